//! Flattening of matrices into the element order expected by a rendering
//! backend.
//!
//! Arithmetic never depends on the memory order of elements. Only the
//! conversion to and from flat arrays does, and it goes through a
//! [`MatrixLayout`]. The plain [`From`] and [`TryFrom`] conversions use
//! [`ColumnMajor`], where column 0 occupies indices 0-3, column 1 indices
//! 4-7 and so on.

use crate::{error::MathError, matrix::Matrix4};
use bytemuck::Pod;

/// An ordering of the 16 elements of a [`Matrix4`] in a flat array.
pub trait MatrixLayout {
    /// Writes the elements of the matrix into a flat array in this layout.
    fn flatten(matrix: &Matrix4) -> [f32; 16];

    /// Reads a matrix from a flat array in this layout.
    fn unflatten(elements: &[f32; 16]) -> Matrix4;

    /// Reads a matrix from a slice in this layout.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidLength`] if the slice does not hold
    /// exactly 16 elements.
    fn unflatten_slice(elements: &[f32]) -> Result<Matrix4, MathError> {
        let Ok(array) = <&[f32; 16]>::try_from(elements) else {
            return Err(MathError::InvalidLength {
                expected: 16,
                actual: elements.len(),
            });
        };
        Ok(Self::unflatten(array))
    }
}

/// Consecutive elements run down a column before moving to the next column.
/// This matches the in-memory representation of [`Matrix4`].
#[derive(Clone, Copy, Debug)]
pub struct ColumnMajor;

/// Consecutive elements run along a row before moving to the next row.
#[derive(Clone, Copy, Debug)]
pub struct RowMajor;

impl MatrixLayout for ColumnMajor {
    #[inline]
    fn flatten(matrix: &Matrix4) -> [f32; 16] {
        bytemuck::cast(*matrix)
    }

    #[inline]
    fn unflatten(elements: &[f32; 16]) -> Matrix4 {
        bytemuck::cast(*elements)
    }
}

impl MatrixLayout for RowMajor {
    #[inline]
    fn flatten(matrix: &Matrix4) -> [f32; 16] {
        ColumnMajor::flatten(&matrix.transposed())
    }

    #[inline]
    fn unflatten(elements: &[f32; 16]) -> Matrix4 {
        ColumnMajor::unflatten(elements).transposed()
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        ColumnMajor::flatten(&matrix)
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f32; 16]) -> Self {
        ColumnMajor::unflatten(&elements)
    }
}

impl TryFrom<&[f32]> for Matrix4 {
    type Error = MathError;

    fn try_from(elements: &[f32]) -> Result<Self, Self::Error> {
        ColumnMajor::unflatten_slice(elements)
    }
}

/// Views a value as the raw bytes of a uniform buffer entry, without
/// copying. Matrices come out in [`ColumnMajor`] order.
#[inline]
pub fn uniform_bytes<T: Pod>(value: &T) -> &[u8] {
    bytemuck::bytes_of(value)
}
