//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] holds RGB-to-XYZ matrices and the RGB-to-RGB matrices composed
//! from them.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**.
//! The flat index of element `(row, col)` is `row * 3 + col`:
//!
//! ```text
//! | m[0] m[1] m[2] |   | r |   | m[0]*r + m[1]*g + m[2]*b |
//! | m[3] m[4] m[5] | * | g | = | m[3]*r + m[4]*g + m[5]*b |
//! | m[6] m[7] m[8] |   | b |   | m[6]*r + m[7]*g + m[8]*b |
//! ```
//!
//! This is the only layout in the workspace. The SIMD batch path in
//! [`crate::simd`] derives its lane layout from it.
//!
//! # Singular matrices
//!
//! [`Mat3::inverse_unchecked`] is the closed-form cofactor inverse and never
//! checks the determinant: a singular input yields inf/NaN entries.
//! [`Mat3::inverse`] returns `None` in exactly those cases.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{Mat3, Vec3};
//!
//! // Rec.709 / D65 to XYZ
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.0, 0.0);
//! assert_eq!(rgb_to_xyz[3], 0.2126729);
//! ```

use crate::Vec3;
use std::ops::{Index, Mul};

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Use [`Mat3::from_rows`], [`Mat3::from_cols`]
/// or [`Mat3::from_flat`] to construct.
///
/// # Example
///
/// ```rust
/// use tint_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[0.0; 3]; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from 9 floats where `flat[row * 3 + col]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_math::Mat3;
    ///
    /// let m = Mat3::from_flat([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(m, Mat3::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_flat(flat: [f32; 9]) -> Self {
        Self::from_rows([
            [flat[0], flat[1], flat[2]],
            [flat[3], flat[4], flat[5]],
            [flat[6], flat[7], flat[8]],
        ])
    }

    /// Returns the 9 elements with `flat[row * 3 + col]`.
    #[inline]
    pub const fn to_flat(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        ]
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Closed-form inverse (transposed cofactors scaled by `1 / det`).
    ///
    /// No singularity check: a zero determinant yields inf/NaN entries,
    /// which then propagate through whatever consumes the result.
    pub fn inverse_unchecked(&self) -> Self {
        let m = &self.m;
        let inv_det = 1.0 / self.determinant();

        Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the determinant is zero or not finite, or if the
    /// inverse would contain non-finite values. Otherwise the result equals
    /// [`Mat3::inverse_unchecked`] bit for bit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.125));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = self.inverse_unchecked();
        inv.is_finite().then_some(inv)
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// This is the scalar reference every other matrix path is checked against.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Transforms a `[f32; 3]` by this matrix.
    #[inline]
    pub fn transform_array(&self, v: [f32; 3]) -> [f32; 3] {
        self.transform(Vec3::from_array(v)).to_array()
    }

    /// Multiplies two matrices: `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Scales column `i` by `s[i]`, i.e. `self * diag(s)`.
    #[inline]
    pub fn scale_cols(&self, s: Vec3) -> Self {
        Self::from_col_vecs(self.col(0) * s.x, self.col(1) * s.y, self.col(2) * s.z)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m
            .iter()
            .flatten()
            .all(|x| x.is_finite())
    }

    /// True if every element is within `epsilon` of `other`'s.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        // glam uses column-major, so we transpose
        glam::Mat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_cols([cols[0], cols[1], cols[2]])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

/// Flat element access, `index = row * 3 + col`.
impl Index<usize> for Mat3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i / 3][i % 3]
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(flat: [f32; 9]) -> Self {
        Self::from_flat(flat)
    }
}

impl From<Mat3> for [f32; 9] {
    fn from(m: Mat3) -> Self {
        m.to_flat()
    }
}
