//! Stream hooks: read and write containers one element at a time.
//!
//! Reading is whitespace-tokenised and consumes exactly as many elements as
//! the target holds; values are parsed before the target is modified.
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::TextFormat;
use crate::error::{ContainerError, Result};
use crate::math::{Grid, Sequence};

/// Whitespace tokenizer over a buffered reader.
///
/// Tokens left over on a line stay queued for the next read, so several
/// containers can be read back to back from one stream.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn read_values<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>> {
        let mut values = Vec::with_capacity(count);
        for position in 0..count {
            let token = self
                .next_token()?
                .ok_or(ContainerError::UnexpectedEof {
                    expected: count,
                    found: position,
                })?;
            let value = token
                .parse::<T>()
                .map_err(|_| ContainerError::Parse { position, token })?;
            values.push(value);
        }
        Ok(values)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Overwrite every element of `target` with the next `target.len()` values.
pub fn read_sequence<T, R>(tokens: &mut TokenReader<R>, target: &mut Sequence<T>) -> Result<()>
where
    T: FromStr,
    R: BufRead,
{
    let values = tokens.read_values::<T>(target.len())?;
    for (slot, value) in target.iter_mut().zip(values) {
        *slot = value;
    }
    Ok(())
}

/// Read `order` rows into `target`; nothing is written unless every row parses.
pub fn read_grid<T, R>(tokens: &mut TokenReader<R>, target: &mut Grid<T>) -> Result<()>
where
    T: FromStr,
    R: BufRead,
{
    let order = target.order();
    let values = tokens.read_values::<T>(order * order)?;
    let mut values = values.into_iter();
    for row in 0..order {
        let mut handle = target.row_mut(row)?;
        for (slot, value) in handle.iter_mut().zip(values.by_ref()) {
            *slot = value;
        }
    }
    log::trace!("read grid of order {}", order);
    Ok(())
}

/// Write the elements separated by the format's delimiter, nothing trailing.
pub fn write_sequence<T, W>(writer: &mut W, source: &Sequence<T>, format: &TextFormat) -> Result<()>
where
    T: Display,
    W: Write,
{
    for (idx, value) in source.iter().enumerate() {
        if idx != 0 {
            write!(writer, "{}", format.delimiter)?;
        }
        write!(writer, "{}", value)?;
    }
    Ok(())
}

/// Write each row with [`write_sequence`], one newline-terminated row per line.
pub fn write_grid<T, W>(writer: &mut W, source: &Grid<T>, format: &TextFormat) -> Result<()>
where
    T: Display,
    W: Write,
{
    for row in source.rows() {
        write_sequence(writer, row, format)?;
        writeln!(writer)?;
    }
    Ok(())
}
