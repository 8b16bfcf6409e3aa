//! Matrices.

use crate::{error::MathError, vector::Vector4};
use bytemuck::{Pod, Zeroable};
use std::{fmt, ops::Mul};

/// A 4x4 single precision matrix stored as four [`Vector4`] columns.
///
/// The matrix usually represents a linear or affine transform in homogeneous
/// coordinates, to be applied to column vectors. Nothing structural is
/// enforced, so the all-zero matrix is a valid (singular) value. Every
/// operation returns a new matrix and leaves its operands untouched.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    column_1: Vector4,
    column_2: Vector4,
    column_3: Vector4,
    column_4: Vector4,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        *m.column_1.x_mut() = diagonal.x();
        *m.column_2.y_mut() = diagonal.y();
        *m.column_3.z_mut() = diagonal.z();
        *m.column_4.w_mut() = diagonal.w();
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self {
            column_1,
            column_2,
            column_3,
            column_4,
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(row_1: Vector4, row_2: Vector4, row_3: Vector4, row_4: Vector4) -> Self {
        Self::from_columns(row_1, row_2, row_3, row_4).transposed()
    }

    /// The first column of the matrix.
    #[inline]
    pub const fn column_1(&self) -> &Vector4 {
        &self.column_1
    }

    /// The second column of the matrix.
    #[inline]
    pub const fn column_2(&self) -> &Vector4 {
        &self.column_2
    }

    /// The third column of the matrix.
    #[inline]
    pub const fn column_3(&self) -> &Vector4 {
        &self.column_3
    }

    /// The fourth column of the matrix.
    #[inline]
    pub const fn column_4(&self) -> &Vector4 {
        &self.column_4
    }

    /// Sets the first column of the matrix to the given column.
    #[inline]
    pub const fn set_column_1(&mut self, column: Vector4) {
        self.column_1 = column;
    }

    /// Sets the second column of the matrix to the given column.
    #[inline]
    pub const fn set_column_2(&mut self, column: Vector4) {
        self.column_2 = column;
    }

    /// Sets the third column of the matrix to the given column.
    #[inline]
    pub const fn set_column_3(&mut self, column: Vector4) {
        self.column_3 = column;
    }

    /// Sets the fourth column of the matrix to the given column.
    #[inline]
    pub const fn set_column_4(&mut self, column: Vector4) {
        self.column_4 = column;
    }

    /// Returns the column with index `j`.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn column(&self, j: usize) -> &Vector4 {
        match j {
            0 => &self.column_1,
            1 => &self.column_2,
            2 => &self.column_3,
            3 => &self.column_4,
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the row with index `i`, read across the four columns.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::new(
            self.column_1[i],
            self.column_2[i],
            self.column_3[i],
            self.column_4[i],
        )
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.column(j)[i]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        let column = match j {
            0 => &mut self.column_1,
            1 => &mut self.column_2,
            2 => &mut self.column_3,
            3 => &mut self.column_4,
            _ => panic!("index out of bounds"),
        };
        &mut column[i]
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub fn diagonal(&self) -> Vector4 {
        Vector4::new(
            self.column_1.x(),
            self.column_2.y(),
            self.column_3.z(),
            self.column_4.w(),
        )
    }

    /// Returns the transpose of this matrix. Column `i` of the result is row
    /// `i` of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Computes the minor of the element at row `i` and column `j`: the
    /// determinant of the 3x3 submatrix left after deleting that row and
    /// column.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    pub fn minor(&self, i: usize, j: usize) -> f32 {
        let rows = remaining_indices(i);
        let columns = remaining_indices(j);
        let a = |r: usize, c: usize| self.element(rows[r], columns[c]);

        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }

    /// Computes the matrix of minors, holding [`Self::minor`] of every
    /// element at the element's position.
    pub fn minor_matrix(&self) -> Self {
        let mut minors = Self::zeros();
        for j in 0..4 {
            for i in 0..4 {
                *minors.element_mut(i, j) = self.minor(i, j);
            }
        }
        minors
    }

    /// Computes the matrix of cofactors: the matrix of minors with the sign
    /// flipped wherever the row and column indices sum to an odd number.
    pub fn cofactor_matrix(&self) -> Self {
        self.minor_matrix().with_checkerboard_signs()
    }

    /// Computes the adjugate, the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transposed()
    }

    /// Computes the determinant by cofactor expansion along the first
    /// column.
    pub fn determinant(&self) -> f32 {
        self.determinant_from_minors(&self.minor_matrix())
    }

    /// Computes the inverse as the adjugate scaled by the reciprocal of the
    /// determinant.
    ///
    /// A singular matrix is not trapped: the division by a zero determinant
    /// makes the result non-finite. Use [`Self::try_inverted`] to get an
    /// error instead.
    pub fn inverted(&self) -> Self {
        let minors = self.minor_matrix();
        let determinant = self.determinant_from_minors(&minors);
        Self::inverse_from_minors(&minors, determinant)
    }

    /// Computes the inverse as the adjugate scaled by the reciprocal of the
    /// determinant.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the determinant is zero.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let minors = self.minor_matrix();
        let determinant = self.determinant_from_minors(&minors);
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        Ok(Self::inverse_from_minors(&minors, determinant))
    }

    /// Whether all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.column_1.is_finite()
            && self.column_2.is_finite()
            && self.column_3.is_finite()
            && self.column_4.is_finite()
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::from_columns(
            self.column_1.mapped(&mut f),
            self.column_2.mapped(&mut f),
            self.column_3.mapped(&mut f),
            self.column_4.mapped(&mut f),
        )
    }

    fn determinant_from_minors(&self, minors: &Self) -> f32 {
        let first = &self.column_1;
        first.x() * minors.element(0, 0) - first.y() * minors.element(1, 0)
            + first.z() * minors.element(2, 0)
            - first.w() * minors.element(3, 0)
    }

    fn inverse_from_minors(minors: &Self, determinant: f32) -> Self {
        minors
            .with_checkerboard_signs()
            .transposed()
            .mul(1.0 / determinant)
    }

    fn with_checkerboard_signs(&self) -> Self {
        let mut signed = *self;
        for j in 0..4 {
            for i in 0..4 {
                if (i + j) % 2 == 1 {
                    let element = signed.element_mut(i, j);
                    *element = -*element;
                }
            }
        }
        signed
    }

    /// Multiplies each column of `rhs`, viewed as a column vector, by the
    /// matrix whose rows are the columns of `self`.
    #[inline]
    fn dot_with_columns(&self, rhs: &Vector4) -> Vector4 {
        Vector4::new(
            self.column_1.dot(rhs),
            self.column_2.dot(rhs),
            self.column_3.dot(rhs),
            self.column_4.dot(rhs),
        )
    }
}

fn remaining_indices(skipped: usize) -> [usize; 3] {
    match skipped {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        3 => [0, 1, 2],
        _ => panic!("index out of bounds"),
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_columns(
        a.column_1 + b.column_1,
        a.column_2 + b.column_2,
        a.column_3 + b.column_3,
        a.column_4 + b.column_4,
    )
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_columns(
        a.column_1 - b.column_1,
        a.column_2 - b.column_2,
        a.column_3 - b.column_3,
        a.column_4 - b.column_4,
    )
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let rows = a.transposed();
    Matrix4::from_columns(
        rows.dot_with_columns(&b.column_1),
        rows.dot_with_columns(&b.column_2),
        rows.dot_with_columns(&b.column_3),
        rows.dot_with_columns(&b.column_4),
    )
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, v| {
    a.transposed().dot_with_columns(v)
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, s| {
    let s = *s;
    Matrix4::from_columns(
        a.column_1 * s,
        a.column_2 * s,
        a.column_3 * s,
        a.column_4 * s,
    )
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |s, a| { a.mul(*s) });

impl_binop!(Div, div, Matrix4, f32, Matrix4, |a, s| {
    a.mul(1.0 / *s)
});

impl_binop_assign!(AddAssign, add_assign, Add, add, Matrix4, Matrix4);
impl_binop_assign!(SubAssign, sub_assign, Sub, sub, Matrix4, Matrix4);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Matrix4, Matrix4);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Matrix4, f32);
impl_binop_assign!(DivAssign, div_assign, Div, div, Matrix4, f32);

impl_neg!(Matrix4, |m| {
    Matrix4::from_columns(-m.column_1, -m.column_2, -m.column_3, -m.column_4)
});

impl_approx_eq!(Matrix4, [column_1, column_2, column_3, column_4]);

/// Prints the matrix as four rows.
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            writeln!(f, "{}", self.row(i))?;
        }
        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
pub mod fuzzing {
    use super::*;

    pub fn fuzz_test_matrix_inversion(matrix: Matrix4) {
        let bits = |m: &Matrix4| bytemuck::cast::<Matrix4, [u32; 16]>(*m);

        assert_eq!(bits(&matrix.transposed().transposed()), bits(&matrix));

        let determinant = matrix.determinant();
        match matrix.try_inverted() {
            Ok(inverse) => {
                assert_ne!(determinant, 0.0);
                assert_eq!(bits(&inverse), bits(&matrix.inverted()));
            }
            Err(error) => {
                assert_eq!(error, MathError::SingularMatrix);
                assert_eq!(determinant, 0.0);
            }
        }
    }
}
