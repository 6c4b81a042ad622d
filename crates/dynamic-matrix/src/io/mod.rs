//! Text input/output for containers.
//!
//! `text` holds the per-element stream hooks; `delimited` reads and writes
//! whole grids as delimited files.
pub mod delimited;
pub mod text;

pub use delimited::{read_grid_delimited, read_grid_from_reader, write_grid_delimited, write_grid_to_writer};
pub use text::{read_grid, read_sequence, write_grid, write_sequence, TokenReader};
