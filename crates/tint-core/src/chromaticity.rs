//! CIE 1931 coordinate types.
//!
//! - [`Chromaticity`] - 2-D `(x, y)` chromaticity coordinate
//! - [`Xyz`] - tristimulus value
//! - [`Yxy`] - luminance plus chromaticity
//!
//! These are plain value types. Conversions between them live in
//! `tint-color` so that the zero-denominator policy is defined in exactly
//! one place.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Chromaticity, Xyz, Yxy};
//!
//! let d65 = Chromaticity::new(0.3127, 0.3290);
//! let white = Xyz::new(0.9505, 1.0, 1.0891);
//! let white_yxy = Yxy::new(1.0, d65.x, d65.y);
//! assert_eq!(white_yxy.chromaticity(), d65);
//! ```

use serde::{Deserialize, Serialize};

/// A CIE 1931 xy chromaticity coordinate.
///
/// Serializes as `{x, y}`, the layout used by color space descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Chromaticity {
    /// x coordinate
    pub x: f32,
    /// y coordinate
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity coordinate.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the implied `z = 1 - x - y`.
    #[inline]
    pub fn z(&self) -> f32 {
        1.0 - self.x - self.y
    }

    /// Returns `(x, y, 1 - x - y)`, the column used when building primary matrices.
    #[inline]
    pub fn to_xyz_column(&self) -> [f32; 3] {
        [self.x, self.y, self.z()]
    }

    /// True when both axes are within `epsilon` (strict) of `other`.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl From<(f32, f32)> for Chromaticity {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Chromaticity> for (f32, f32) {
    fn from(c: Chromaticity) -> Self {
        (c.x, c.y)
    }
}

/// A CIE 1931 XYZ tristimulus value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Xyz {
    /// X tristimulus
    pub x: f32,
    /// Y tristimulus (luminance)
    pub y: f32,
    /// Z tristimulus
    pub z: f32,
}

impl Xyz {
    /// All-zero value, also used as the "undefined" sentinel by conversions.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates from an `[X, Y, Z]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[X, Y, Z]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Xyz {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Xyz> for [f32; 3] {
    fn from(v: Xyz) -> Self {
        v.to_array()
    }
}

/// Luminance `Y` with chromaticity `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Yxy {
    /// Luminance (CIE Y)
    #[serde(rename = "Y")]
    pub luminance: f32,
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
}

impl Yxy {
    /// All-zero value. Returned by out-of-domain blackbody queries.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a Yxy value.
    #[inline]
    pub const fn new(luminance: f32, x: f32, y: f32) -> Self {
        Self { luminance, x, y }
    }

    /// Builds a Yxy from a luminance and a chromaticity.
    #[inline]
    pub const fn from_chromaticity(luminance: f32, c: Chromaticity) -> Self {
        Self::new(luminance, c.x, c.y)
    }

    /// Drops the luminance.
    #[inline]
    pub const fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }

    /// True if every component is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.luminance == 0.0 && self.x == 0.0 && self.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromaticity_column() {
        let c = Chromaticity::new(0.64, 0.33);
        let col = c.to_xyz_column();
        assert_eq!(col[0], 0.64);
        assert_eq!(col[1], 0.33);
        assert!((col[2] - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_chromaticity_approx_eq_is_strict() {
        let a = Chromaticity::new(0.3127, 0.3290);
        let b = Chromaticity::new(0.3127, 0.3290);
        assert!(a.approx_eq(&b, 1e-4));
        assert!(!a.approx_eq(&b, 0.0));
        assert!(!a.approx_eq(&Chromaticity::new(0.32168, 0.33767), 1e-4));
    }

    #[test]
    fn test_yxy_serde_field_names() {
        let v = Yxy::new(1.0, 0.3127, 0.329);
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"Y\""));
        let back: Yxy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_zero_sentinels() {
        assert!(Yxy::ZERO.is_zero());
        assert_eq!(Xyz::ZERO.to_array(), [0.0; 3]);
    }
}
