use std::fmt;
use std::ops::{Add, Deref, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use num_traits::One;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::Limits;
use crate::error::{ContainerError, Result};
use crate::math::element::{Element, ElementIndex};
use crate::math::vector::Sequence;

/// Square matrix stored as a sequence of equally long row sequences.
///
/// Every row has exactly `order()` elements after any successful
/// construction or assignment. Rows can be read as `&Sequence<T>` and
/// edited through [`RowMut`], which cannot replace a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Sequence<Sequence<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let order = rows.len();
        Limits::default().check_grid_order(order)?;
        let rows = rows
            .into_iter()
            .map(|row| {
                if row.len() != order {
                    return Err(ContainerError::SizeMismatch {
                        expected: order,
                        found: row.len(),
                    });
                }
                Ok(Sequence::from_trusted(row))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_trusted_rows(rows))
    }

    fn from_trusted_rows(rows: Vec<Sequence<T>>) -> Self {
        Self {
            rows: Sequence::from_trusted(rows),
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    pub fn row<I: ElementIndex>(&self, index: I) -> Result<&Sequence<T>> {
        self.rows.at(index)
    }

    pub fn row_mut<I: ElementIndex>(&mut self, index: I) -> Result<RowMut<'_, T>> {
        let row = self.rows.at_mut(index)?;
        Ok(RowMut { row })
    }

    pub fn get<I: ElementIndex, J: ElementIndex>(&self, row: I, col: J) -> Result<&T> {
        self.rows.at(row)?.at(col)
    }

    pub fn get_mut<I: ElementIndex, J: ElementIndex>(&mut self, row: I, col: J) -> Result<&mut T> {
        self.rows.at_mut(row)?.at_mut(col)
    }

    pub fn rows(&self) -> Iter<'_, Sequence<T>> {
        self.rows.iter()
    }

    pub fn to_vec(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }

    pub fn transpose(&self) -> Grid<T>
    where
        T: Clone,
    {
        let order = self.order();
        let rows = (0..order)
            .map(|col| Sequence::from_trusted(self.rows.iter().map(|row| row[col].clone()).collect()))
            .collect();
        Self::from_trusted_rows(rows)
    }

    fn check_same_order<U>(&self, other: &Grid<U>) -> Result<()> {
        if self.order() != other.order() {
            return Err(ContainerError::SizeMismatch {
                expected: self.order(),
                found: other.order(),
            });
        }
        Ok(())
    }
}

impl<T> Grid<T>
where
    T: Clone + Default,
{
    /// Grid of `order` x `order` default-valued elements.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_limits(order, &Limits::default())
    }

    pub fn with_limits(order: usize, limits: &Limits) -> Result<Self> {
        limits.check_grid_order(order)?;
        log::trace!("allocating grid of order {}", order);
        let rows = (0..order)
            .map(|_| Sequence::with_limits(order, limits))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_trusted_rows(rows))
    }
}

impl<T> Grid<T>
where
    T: Clone + Default + One,
{
    pub fn identity(order: usize) -> Result<Self> {
        let mut grid = Self::new(order)?;
        for (i, row) in grid.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Ok(grid)
    }
}

impl<T: Element> Grid<T> {
    pub fn add_elementwise(&self, other: &Grid<T>) -> Result<Grid<T>> {
        self.check_same_order(other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(lhs, rhs)| lhs.add_elementwise(rhs))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_trusted_rows(rows))
    }

    pub fn sub_elementwise(&self, other: &Grid<T>) -> Result<Grid<T>> {
        self.check_same_order(other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(lhs, rhs)| lhs.sub_elementwise(rhs))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_trusted_rows(rows))
    }

    pub fn mul_scalar(&self, value: T) -> Grid<T> {
        let rows = self.rows.iter().map(|row| row.mul_scalar(value.clone())).collect();
        Self::from_trusted_rows(rows)
    }

    /// Matrix-vector product; entry `i` is row `i` dotted with `vector`.
    pub fn mul_sequence(&self, vector: &Sequence<T>) -> Result<Sequence<T>> {
        if vector.len() != self.order() {
            return Err(ContainerError::SizeMismatch {
                expected: self.order(),
                found: vector.len(),
            });
        }
        let entries = self
            .rows
            .iter()
            .map(|row| row.dot(vector))
            .collect::<Result<Vec<_>>>()?;
        Ok(Sequence::from_trusted(entries))
    }

    /// Standard matrix product: `(i, j)` is the sum over `k` of `self[i][k] * other[k][j]`.
    pub fn matmul(&self, other: &Grid<T>) -> Result<Grid<T>> {
        self.check_same_order(other)?;
        let columns = other.transpose();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .rows
                    .iter()
                    .map(|col| row.dot(col))
                    .collect::<Result<Vec<_>>>()
                    .map(Sequence::from_trusted)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_trusted_rows(rows))
    }
}

impl<T: Clone + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::from_trusted_rows(vec![Sequence::default()])
    }
}

/// Mutable handle to one row of a [`Grid`].
///
/// Elements may be changed in place; the row itself cannot be swapped for
/// one of a different length.
#[derive(Debug)]
pub struct RowMut<'a, T> {
    row: &'a mut Sequence<T>,
}

impl<'a, T> RowMut<'a, T> {
    pub fn at_mut<I: ElementIndex>(&mut self, index: I) -> Result<&mut T> {
        self.row.at_mut(index)
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.row.as_mut_slice()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.row.iter_mut()
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.row.fill(value);
    }

    /// Overwrite the row with `values`, which must have the same length.
    pub fn copy_from(&mut self, values: &Sequence<T>) -> Result<()>
    where
        T: Clone,
    {
        if values.len() != self.row.len() {
            return Err(ContainerError::SizeMismatch {
                expected: self.row.len(),
                found: values.len(),
            });
        }
        self.row.as_mut_slice().clone_from_slice(values.as_slice());
        Ok(())
    }
}

impl<'a, T> Deref for RowMut<'a, T> {
    type Target = Sequence<T>;

    fn deref(&self) -> &Self::Target {
        &*self.row
    }
}

impl<'a, T> Index<usize> for RowMut<'a, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.row[index]
    }
}

impl<'a, T> IndexMut<usize> for RowMut<'a, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.row[index]
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = Sequence<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl<'a, 'b, T: Element> Add<&'b Grid<T>> for &'a Grid<T> {
    type Output = Result<Grid<T>>;

    fn add(self, rhs: &'b Grid<T>) -> Self::Output {
        self.add_elementwise(rhs)
    }
}

impl<'a, 'b, T: Element> Sub<&'b Grid<T>> for &'a Grid<T> {
    type Output = Result<Grid<T>>;

    fn sub(self, rhs: &'b Grid<T>) -> Self::Output {
        self.sub_elementwise(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b Grid<T>> for &'a Grid<T> {
    type Output = Result<Grid<T>>;

    fn mul(self, rhs: &'b Grid<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b Sequence<T>> for &'a Grid<T> {
    type Output = Result<Sequence<T>>;

    fn mul(self, rhs: &'b Sequence<T>) -> Self::Output {
        self.mul_sequence(rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<'a> Mul<$t> for &'a Grid<$t> {
                type Output = Grid<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

/// One row per line, each newline-terminated.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
