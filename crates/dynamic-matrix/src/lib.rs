//! dynamic-matrix: owning dynamic vectors and square matrices.
//!
//! This crate provides `Sequence<T>`, a fixed-length owning buffer with
//! checked indexing and size-checked arithmetic, and `Grid<T>`, a square
//! matrix composed of row sequences with matrix-vector and matrix-matrix
//! products. Text stream hooks, delimited files, serde and ndarray
//! conversions sit around the two containers.
pub mod config;
pub mod error;
pub mod interop;
pub mod io;
pub mod math;

pub use config::{ContainerConfig, Limits, TextFormat, MAX_GRID_ORDER, MAX_SEQUENCE_LEN};
pub use error::{ContainerError, ErrorKind, Result};
pub use math::{Element, ElementIndex, Grid, RowMut, Sequence};
