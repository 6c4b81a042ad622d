//! Owning containers: `Sequence` (1D) and the square `Grid` (2D) built from it.
//!
//! Both types keep their length/order fixed between assignments, check
//! every index, and report operand size mismatches as errors instead of
//! panicking.
pub mod element;
pub mod matrix;
pub mod vector;

pub use element::{Element, ElementIndex};
pub use matrix::{Grid, RowMut};
pub use vector::Sequence;
