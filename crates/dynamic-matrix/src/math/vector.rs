use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::Limits;
use crate::error::{ContainerError, Result};
use crate::math::element::{Element, ElementIndex};

/// Owning, fixed-length sequence of `T`.
///
/// The length is chosen at construction and only changes when another
/// sequence is assigned into the same variable. Moving a `Sequence` hands
/// over its buffer without copying elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    data: Vec<T>,
}

impl<T> Sequence<T> {
    /// Adopt `data` as the storage of a new sequence.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        Limits::default().check_sequence_len(data.len())?;
        Ok(Self { data })
    }

    /// Wrap storage whose length the caller already validated.
    pub(crate) fn from_trusted(data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked access; fails with `IndexOutOfRange` for negative or too-large indices.
    pub fn at<I: ElementIndex>(&self, index: I) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    pub fn at_mut<I: ElementIndex>(&mut self, index: I) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    fn offset<I: ElementIndex>(&self, index: I) -> Result<usize> {
        match index.to_offset() {
            Some(offset) if offset < self.data.len() => Ok(offset),
            _ => Err(ContainerError::IndexOutOfRange {
                index: index.to_signed(),
                len: self.data.len(),
            }),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn mapv<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::from_trusted(self.data.iter().map(f).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    fn check_same_len<U>(&self, other: &Sequence<U>) -> Result<()> {
        if self.len() != other.len() {
            return Err(ContainerError::SizeMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

impl<T> Sequence<T>
where
    T: Clone + Default,
{
    /// Sequence of `len` default-valued elements.
    pub fn new(len: usize) -> Result<Self> {
        Self::with_limits(len, &Limits::default())
    }

    pub fn with_limits(len: usize, limits: &Limits) -> Result<Self> {
        limits.check_sequence_len(len)?;
        Ok(Self {
            data: vec![T::default(); len],
        })
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy the first `len` elements of `buffer` into a new sequence.
    pub fn from_buffer(buffer: Option<&[T]>, len: usize) -> Result<Self> {
        let buffer = buffer.ok_or(ContainerError::NullArgument("buffer"))?;
        Limits::default().check_sequence_len(len)?;
        if buffer.len() < len {
            return Err(ContainerError::SizeMismatch {
                expected: len,
                found: buffer.len(),
            });
        }
        Ok(Self {
            data: buffer[..len].to_vec(),
        })
    }
}

impl<T: Element> Sequence<T> {
    pub fn add_scalar(&self, value: T) -> Sequence<T> {
        self.mapv(|v| v.clone() + value.clone())
    }

    pub fn sub_scalar(&self, value: T) -> Sequence<T> {
        self.mapv(|v| v.clone() - value.clone())
    }

    pub fn mul_scalar(&self, value: T) -> Sequence<T> {
        self.mapv(|v| v.clone() * value.clone())
    }

    pub fn add_elementwise(&self, other: &Sequence<T>) -> Result<Sequence<T>> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    pub fn sub_elementwise(&self, other: &Sequence<T>) -> Result<Sequence<T>> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Sum of pairwise products, starting from `T::zero()`.
    pub fn dot(&self, other: &Sequence<T>) -> Result<T> {
        self.check_same_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    fn zip_with<F>(&self, other: &Sequence<T>, f: F) -> Result<Sequence<T>>
    where
        F: Fn(&T, &T) -> T,
    {
        self.check_same_len(other)?;
        Ok(Sequence::from_trusted(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<T: Clone + Default> Default for Sequence<T> {
    fn default() -> Self {
        Self {
            data: vec![T::default()],
        }
    }
}

impl<T> TryFrom<Vec<T>> for Sequence<T> {
    type Error = ContainerError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Sequence::from_vec(value)
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.data
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                ContainerError::IndexOutOfRange {
                    index: index as i128,
                    len
                }
            ),
        }
    }
}

impl<'a, 'b, T: Element> Add<&'b Sequence<T>> for &'a Sequence<T> {
    type Output = Result<Sequence<T>>;

    fn add(self, rhs: &'b Sequence<T>) -> Self::Output {
        self.add_elementwise(rhs)
    }
}

impl<'a, 'b, T: Element> Sub<&'b Sequence<T>> for &'a Sequence<T> {
    type Output = Result<Sequence<T>>;

    fn sub(self, rhs: &'b Sequence<T>) -> Self::Output {
        self.sub_elementwise(rhs)
    }
}

impl<'a, 'b, T: Element> Mul<&'b Sequence<T>> for &'a Sequence<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &'b Sequence<T>) -> Self::Output {
        self.dot(rhs)
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<'a> Add<$t> for &'a Sequence<$t> {
                type Output = Sequence<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl<'a> Sub<$t> for &'a Sequence<$t> {
                type Output = Sequence<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.sub_scalar(rhs)
                }
            }

            impl<'a> Mul<$t> for &'a Sequence<$t> {
                type Output = Sequence<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Sequence::from_vec(data).map_err(serde::de::Error::custom)
    }
}

/// Elements separated by a single space, nothing trailing.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.data.iter().enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
