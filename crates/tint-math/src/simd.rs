//! SIMD-accelerated batch matrix transforms.
//!
//! Applies one 3x3 matrix to many RGB or RGBA values in place, using the
//! `wide` crate for portable SIMD on stable Rust.
//!
//! # Layout
//!
//! Each pixel occupies one `f32x4`: lanes 0-2 carry the color channels and
//! lane 3 is padding. The matrix is held as three column registers
//!
//! ```text
//! col0 = (m[0], m[3], m[6], 0)
//! col1 = (m[1], m[4], m[7], 0)
//! col2 = (m[2], m[5], m[8], 0)
//!
//! out  = col0 * r + col1 * g + col2 * b
//! ```
//!
//! so every output lane is summed in the same operand order as
//! [`Mat3::transform`]. Neither path fuses multiply and add, so the batch
//! results match the scalar reference bit for bit, for any slice length.
//!
//! The alpha channel of RGBA input is never loaded into a register; it stays
//! in the caller's buffer untouched.
//!
//! # Example
//!
//! ```rust
//! use tint_math::{Mat3, simd::transform_rgba_batch};
//!
//! let mut px = vec![[0.5, 0.25, 1.0, 0.3]; 3];
//! transform_rgba_batch(&Mat3::diagonal(2.0, 2.0, 2.0), &mut px);
//! assert_eq!(px[2], [1.0, 0.5, 2.0, 0.3]);
//! ```

use crate::Mat3;
use wide::f32x4;

/// Matrix columns padded to 4 lanes.
#[derive(Debug, Clone, Copy)]
pub struct Mat3x4 {
    cols: [f32x4; 3],
}

impl Mat3x4 {
    /// Splits a matrix into padded column registers.
    #[inline]
    pub fn new(m: &Mat3) -> Self {
        let c = |i: usize| f32x4::from([m.m[0][i], m.m[1][i], m.m[2][i], 0.0]);
        Self {
            cols: [c(0), c(1), c(2)],
        }
    }

    /// Multiplies one RGB triplet.
    #[inline]
    pub fn mul_vec3(&self, v: [f32; 3]) -> [f32; 3] {
        let [c0, c1, c2] = self.cols;
        let out = c0 * f32x4::splat(v[0]) + c1 * f32x4::splat(v[1]) + c2 * f32x4::splat(v[2]);
        let out = out.to_array();
        [out[0], out[1], out[2]]
    }
}

/// Matrix-vector multiply for a row-major 3x3 matrix and a 3-element vector.
///
/// # Example
///
/// ```rust
/// use tint_math::simd::mat3_mul_vec3;
///
/// let m = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let result = mat3_mul_vec3(&m, &[0.5, 0.3, 0.2]);
/// assert_eq!(result, [0.5, 0.3, 0.2]);
/// ```
#[inline]
pub fn mat3_mul_vec3(m: &[[f32; 3]; 3], v: &[f32; 3]) -> [f32; 3] {
    Mat3x4::new(&Mat3::from_rows(*m)).mul_vec3(*v)
}

/// Transforms RGB values in place: `v = m * v` for every element.
///
/// Results are identical to calling [`Mat3::transform_array`] per element.
pub fn transform_rgb_batch(m: &Mat3, values: &mut [[f32; 3]]) {
    let mx = Mat3x4::new(m);
    for px in values {
        *px = mx.mul_vec3(*px);
    }
}

/// Transforms the RGB part of RGBA values in place; alpha is untouched.
///
/// Results are identical to calling [`Mat3::transform_array`] on the first
/// three channels of each element.
pub fn transform_rgba_batch(m: &Mat3, values: &mut [[f32; 4]]) {
    let mx = Mat3x4::new(m);
    for px in values {
        let [r, g, b] = mx.mul_vec3([px[0], px[1], px[2]]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix() -> Mat3 {
        // Rec.709 to XYZ with a negative term to exercise sign handling
        Mat3::from_rows([
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, -0.1192, 0.9505],
        ])
    }

    fn pixels(n: usize) -> Vec<[f32; 3]> {
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                [t, 1.0 - t, (t * 7.3).fract() - 0.25]
            })
            .collect()
    }

    #[test]
    fn test_mat3_mul_vec3() {
        let scale = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
        let result = mat3_mul_vec3(&scale, &[0.5, 0.3, 0.2]);
        assert!((result[0] - 1.0).abs() < 0.001);
        assert!((result[1] - 0.6).abs() < 0.001);
    }

    #[test]
    fn test_rgb_batch_matches_scalar() {
        let m = test_matrix();
        for n in [0, 1, 2, 3, 4, 5, 17] {
            let mut values = pixels(n);
            let expected: Vec<_> = values.iter().map(|v| m.transform_array(*v)).collect();
            transform_rgb_batch(&m, &mut values);
            assert_eq!(values, expected, "length {n}");
        }
    }

    #[test]
    fn test_rgba_batch_preserves_alpha() {
        let m = test_matrix();
        let mut values: Vec<[f32; 4]> = pixels(9)
            .into_iter()
            .enumerate()
            .map(|(i, [r, g, b])| [r, g, b, i as f32 * 0.1])
            .collect();
        let original = values.clone();

        transform_rgba_batch(&m, &mut values);
        for (out, inp) in values.iter().zip(&original) {
            assert_eq!(out[3].to_bits(), inp[3].to_bits());
            assert_eq!(
                [out[0], out[1], out[2]],
                m.transform_array([inp[0], inp[1], inp[2]])
            );
        }
    }

    #[test]
    fn test_non_finite_alpha_stays_out_of_rgb() {
        let mut values = vec![[0.5, 0.5, 0.5, f32::NAN]; 2];
        transform_rgba_batch(&Mat3::IDENTITY, &mut values);
        assert_eq!([values[0][0], values[0][1], values[0][2]], [0.5, 0.5, 0.5]);
        assert!(values[1][3].is_nan());
    }
}
