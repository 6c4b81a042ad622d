//! Conversions between the crate containers and `ndarray` arrays.
use ndarray::{Array1, Array2};

use crate::error::{ContainerError, Result};
use crate::math::{Grid, Sequence};

impl<T: Clone> From<&Sequence<T>> for Array1<T> {
    fn from(value: &Sequence<T>) -> Self {
        Array1::from_vec(value.to_vec())
    }
}

impl<T: Clone> TryFrom<Array1<T>> for Sequence<T> {
    type Error = ContainerError;

    fn try_from(value: Array1<T>) -> Result<Self> {
        Sequence::from_vec(value.to_vec())
    }
}

impl<T: Clone> From<&Grid<T>> for Array2<T> {
    fn from(value: &Grid<T>) -> Self {
        let order = value.order();
        Array2::from_shape_fn((order, order), |(i, j)| value[(i, j)].clone())
    }
}

/// Only square arrays convert; anything else is a `SizeMismatch`.
impl<T: Clone> TryFrom<Array2<T>> for Grid<T> {
    type Error = ContainerError;

    fn try_from(value: Array2<T>) -> Result<Self> {
        let (rows, cols) = value.dim();
        if rows != cols {
            return Err(ContainerError::SizeMismatch {
                expected: rows,
                found: cols,
            });
        }
        Grid::from_rows(value.outer_iter().map(|row| row.to_vec()).collect())
    }
}
