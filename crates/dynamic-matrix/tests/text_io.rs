//! Integration tests for the stream hooks and delimited grid files.

use std::io::Cursor;

use dynamic_matrix::io::{
    read_grid, read_grid_delimited, read_grid_from_reader, read_sequence, write_grid,
    write_grid_delimited, write_grid_to_writer, write_sequence, TokenReader,
};
use dynamic_matrix::{ContainerError, ErrorKind, Grid, Sequence, TextFormat};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Stream hooks
// ---------------------------------------------------------------------------

#[test]
fn reads_exactly_len_elements() {
    let mut tokens = TokenReader::new(Cursor::new("1 2 3 4 5"));
    let mut v = Sequence::<i32>::new(3).unwrap();
    read_sequence(&mut tokens, &mut v).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);

    let mut rest = Sequence::<i32>::new(2).unwrap();
    read_sequence(&mut tokens, &mut rest).unwrap();
    assert_eq!(rest.as_slice(), &[4, 5]);
    assert_eq!(tokens.next_token().unwrap(), None);
}

#[test]
fn short_input_is_unexpected_eof_and_leaves_target_untouched() {
    let mut tokens = TokenReader::new(Cursor::new("7 8"));
    let mut v = Sequence::from_vec(vec![1, 1, 1]).unwrap();
    let err = read_sequence(&mut tokens, &mut v).unwrap_err();
    assert!(matches!(err, ContainerError::UnexpectedEof { expected: 3, found: 2 }));
    assert_eq!(v.as_slice(), &[1, 1, 1]);
}

#[test]
fn bad_token_is_parse_error() {
    let mut tokens = TokenReader::new(Cursor::new("1.5 abc"));
    let mut v = Sequence::<f64>::new(2).unwrap();
    assert_eq!(read_sequence(&mut tokens, &mut v).unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(v.as_slice(), &[0.0, 0.0]);
}

#[test]
fn writes_single_delimiter_without_trailing_separator() {
    let v = Sequence::from_vec(vec![1, 2, 3]).unwrap();
    let mut out = Vec::new();
    write_sequence(&mut out, &v, &TextFormat::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 2 3");

    let mut out = Vec::new();
    write_sequence(&mut out, &v, &TextFormat::new(',')).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1,2,3");
}

#[test]
fn grid_round_trips_through_stream_hooks() {
    init_logging();
    let grid = Grid::from_rows(vec![vec![1, -2, 3], vec![4, 5, 6], vec![7, 8, -9]]).unwrap();
    let mut out = Vec::new();
    write_grid(&mut out, &grid, &TextFormat::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "1 -2 3\n4 5 6\n7 8 -9\n");

    let mut tokens = TokenReader::new(Cursor::new(text));
    let mut back = Grid::<i32>::new(3).unwrap();
    read_grid(&mut tokens, &mut back).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn partial_grid_input_is_not_committed() {
    let mut tokens = TokenReader::new(Cursor::new("1 2\n3"));
    let mut grid = Grid::<i32>::new(2).unwrap();
    let err = read_grid(&mut tokens, &mut grid).unwrap_err();
    assert!(matches!(err, ContainerError::UnexpectedEof { expected: 4, found: 3 }));
    assert_eq!(grid, Grid::new(2).unwrap());
}

// ---------------------------------------------------------------------------
// Delimited files
// ---------------------------------------------------------------------------

#[test]
fn delimited_round_trip_in_memory() {
    let grid = Grid::from_rows(vec![vec![1.5f64, 2.0], vec![-3.25, 4.0]]).unwrap();
    let format: TextFormat = "comma".parse().unwrap();
    let mut buffer = Vec::new();
    write_grid_to_writer(&mut buffer, &grid, &format).unwrap();
    assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "1.5,2\n-3.25,4\n");

    let back: Grid<f64> = read_grid_from_reader(Cursor::new(buffer), &format).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn delimited_reader_rejects_non_square_records() {
    let format = TextFormat::new('\t');
    let err = read_grid_from_reader::<i32, _>(Cursor::new("1\t2\n3\t4\n5\t6\n"), &format)
        .unwrap_err();
    let inner = err.downcast_ref::<ContainerError>().expect("container error in chain");
    assert_eq!(inner.kind(), ErrorKind::SizeMismatch);
}

#[test]
fn delimited_reader_reports_bad_element() {
    let err = read_grid_from_reader::<i32, _>(Cursor::new("1 x\n3 4\n"), &TextFormat::default())
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("row 1, column 2"), "got: {}", message);
}

#[test]
fn non_ascii_delimiter_is_rejected() {
    let grid = Grid::<i32>::new(2).unwrap();
    let result = write_grid_to_writer(Vec::new(), &grid, &TextFormat::new('§'));
    assert!(result.is_err());
}

#[test]
fn delimited_round_trip_on_disk() {
    let path = std::env::temp_dir().join(format!("dynamic-matrix-{}.tsv", std::process::id()));
    let grid = Grid::<i64>::identity(4).unwrap();
    let format = TextFormat::new('\t');
    write_grid_delimited(&path, &grid, &format).unwrap();
    let back: Grid<i64> = read_grid_delimited(&path, &format).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn missing_file_error_names_the_path() {
    let err = read_grid_delimited::<i32, _>("/definitely/not/here.tsv", &TextFormat::default())
        .unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.tsv"));
}
