use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ContainerError, Result};

/// Largest length a [`Sequence`](crate::math::Sequence) may be constructed with.
pub const MAX_SEQUENCE_LEN: usize = 100_000_000;

/// Largest order a [`Grid`](crate::math::Grid) may be constructed with.
pub const MAX_GRID_ORDER: usize = 10_000;

/// Central configuration for the containers in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ContainerConfig {
    pub limits: Limits,
    pub format: TextFormat,
}

impl ContainerConfig {
    pub fn new(limits: Limits, format: TextFormat) -> Self {
        Self { limits, format }
    }
}

/// Upper bounds applied at construction time.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_sequence_len: usize,
    pub max_grid_order: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_sequence_len: MAX_SEQUENCE_LEN,
            max_grid_order: MAX_GRID_ORDER,
        }
    }
}

impl Limits {
    pub fn new(max_sequence_len: usize, max_grid_order: usize) -> Self {
        Self {
            max_sequence_len,
            max_grid_order,
        }
    }

    pub fn check_sequence_len(&self, len: usize) -> Result<()> {
        check_bound(len, self.max_sequence_len)
    }

    pub fn check_grid_order(&self, order: usize) -> Result<()> {
        check_bound(order, self.max_grid_order)
    }
}

fn check_bound(requested: usize, max: usize) -> Result<()> {
    if requested == 0 || requested > max {
        log::debug!("rejecting size {} (max {})", requested, max);
        return Err(ContainerError::InvalidSize { requested, max });
    }
    Ok(())
}

/// Text layout used by the stream hooks and the delimited file helpers.
///
/// Elements within a row are separated by exactly one `delimiter`; rows are
/// always newline-terminated.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    pub delimiter: char,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self { delimiter: ' ' }
    }
}

impl TextFormat {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "space" => Ok(TextFormat::new(' ')),
            "tab" | "tsv" => Ok(TextFormat::new('\t')),
            "comma" | "csv" => Ok(TextFormat::new(',')),
            "semicolon" => Ok(TextFormat::new(';')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c != '\n' && c != '\r' => Ok(TextFormat::new(c)),
                    _ => Err(format!(
                        "Unknown text format: {:?}. Use space, tab, comma, semicolon or a single delimiter character",
                        s
                    )),
                }
            }
        }
    }
}
