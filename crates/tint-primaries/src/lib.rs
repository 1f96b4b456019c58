//! # tint-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! Primaries define the gamut a color space can represent: the CIE xy
//! chromaticities of its red, green and blue references plus the white
//! point that RGB (1, 1, 1) maps to.
//!
//! # Included Primaries
//!
//! | Primaries | White | Primary Use |
//! |-----------|-------|-------------|
//! | [`REC709`] | D65 | sRGB, HDTV |
//! | [`ADOBE_RGB`] | D65 | Photography, print |
//! | [`DISPLAY_P3`] | D65 | Apple displays |
//! | [`REC2020`] | D65 | UHDTV |
//! | [`ACES_AP0`] | ACES | Archival, interchange |
//! | [`ACES_AP1`] | ACES | Working space (ACEScg) |
//! | [`IDENTITY`] | E | Pass-through (XYZ as RGB) |
//!
//! # Matrix Derivation (SMPTE RP 177-1993)
//!
//! ```text
//! P = [ r | g | b ]            columns (x, y, 1 - x - y) per primary
//! W = (Wx/Wy, 1, Wz/Wy)         white with luminance 1
//! C = P^-1 * W
//! M = P * diag(C)
//! ```
//!
//! [`rgb_to_xyz_matrix`] runs this exactly, without singularity guards, so
//! degenerate primaries produce inf/NaN entries. [`try_rgb_to_xyz_matrix`]
//! reports the same cases as errors and otherwise returns the identical
//! matrix.
//!
//! # Usage
//!
//! ```rust
//! use tint_primaries::{REC709, rgb_to_xyz_matrix};
//! use tint_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&REC709);
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - `tint-core` - Chromaticity and error types
//! - `tint-math` - Matrix operations
//!
//! # Used By
//!
//! - `tint-color` - Color space construction

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tint_core::{Chromaticity, Error, Result};
use tint_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// # Example
///
/// ```rust
/// use tint_primaries::{Primaries, D65_XY};
/// use tint_core::Chromaticity;
///
/// let my_space = Primaries {
///     red: Chromaticity::new(0.64, 0.33),
///     green: Chromaticity::new(0.30, 0.60),
///     blue: Chromaticity::new(0.15, 0.06),
///     white: D65_XY,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Primaries {
    /// Red primary chromaticity
    pub red: Chromaticity,
    /// Green primary chromaticity
    pub green: Chromaticity,
    /// Blue primary chromaticity
    pub blue: Chromaticity,
    /// White point chromaticity
    pub white: Chromaticity,
}

impl Primaries {
    /// Creates primaries from four chromaticities.
    #[inline]
    pub const fn new(
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: Chromaticity,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Same primaries with a different white point.
    #[inline]
    pub const fn with_white(self, white: Chromaticity) -> Self {
        Self { white, ..self }
    }

    /// White point as XYZ with Y = 1.
    ///
    /// Not guarded: `white.y == 0` yields inf/NaN.
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        let w = self.white;
        Vec3::new(w.x / w.y, w.y / w.y, w.z() / w.y)
    }

    /// Recovers approximate primaries from an RGB to XYZ matrix.
    ///
    /// Each column is the XYZ of a unit primary, and the row sums are the
    /// XYZ of RGB (1, 1, 1). Projecting them to chromaticity gives the
    /// primaries and white point the matrix was built from. A column whose
    /// components sum to zero projects to (0, 0).
    pub fn from_rgb_to_xyz(m: &Mat3) -> Self {
        let white = m.col(0) + m.col(1) + m.col(2);
        Self {
            red: chromaticity_of(m.col(0)),
            green: chromaticity_of(m.col(1)),
            blue: chromaticity_of(m.col(2)),
            white: chromaticity_of(white),
        }
    }

    /// True if every chromaticity is within `epsilon` of `other`'s.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.red.approx_eq(&other.red, epsilon)
            && self.green.approx_eq(&other.green, epsilon)
            && self.blue.approx_eq(&other.blue, epsilon)
            && self.white.approx_eq(&other.white, epsilon)
    }

    /// The matrix `P` whose columns are the primaries' `(x, y, z)`.
    fn column_matrix(&self) -> Mat3 {
        Mat3::from_cols([
            self.red.to_xyz_column(),
            self.green.to_xyz_column(),
            self.blue.to_xyz_column(),
        ])
    }
}

fn chromaticity_of(v: Vec3) -> Chromaticity {
    let sum = v.sum();
    if sum == 0.0 {
        Chromaticity::new(0.0, 0.0)
    } else {
        Chromaticity::new(v.x / sum, v.y / sum)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, 6504K).
pub const D65_XY: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// ACES white point (approximately D60).
pub const ACES_WHITE_XY: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// Equal-energy illuminant E.
pub const EQUAL_ENERGY_XY: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

// ============================================================================
// Standard Primaries
// ============================================================================

/// ITU-R BT.709 primaries (sRGB), D65.
pub const REC709: Primaries = Primaries::new(
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.30, 0.60),
    Chromaticity::new(0.15, 0.06),
    D65_XY,
);

/// Adobe RGB (1998) primaries, D65.
pub const ADOBE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.21, 0.71),
    Chromaticity::new(0.15, 0.06),
    D65_XY,
);

/// Display P3 primaries (DCI-P3 gamut), D65.
pub const DISPLAY_P3: Primaries = Primaries::new(
    Chromaticity::new(0.680, 0.320),
    Chromaticity::new(0.265, 0.690),
    Chromaticity::new(0.150, 0.060),
    D65_XY,
);

/// ITU-R BT.2020 primaries, D65.
pub const REC2020: Primaries = Primaries::new(
    Chromaticity::new(0.708, 0.292),
    Chromaticity::new(0.170, 0.797),
    Chromaticity::new(0.131, 0.046),
    D65_XY,
);

/// ACES AP0 primaries (ACES2065-1).
///
/// Covers the entire visible spectrum; the blue primary lies outside it.
pub const ACES_AP0: Primaries = Primaries::new(
    Chromaticity::new(0.7347, 0.2653),
    Chromaticity::new(0.0000, 1.0000),
    Chromaticity::new(0.0001, -0.0770),
    ACES_WHITE_XY,
);

/// ACES AP1 primaries (ACEScg, ACEScc, ACEScct).
pub const ACES_AP1: Primaries = Primaries::new(
    Chromaticity::new(0.713, 0.293),
    Chromaticity::new(0.165, 0.830),
    Chromaticity::new(0.128, 0.044),
    ACES_WHITE_XY,
);

/// Primaries whose RGB to XYZ matrix is the identity.
pub const IDENTITY: Primaries = Primaries::new(
    Chromaticity::new(1.0, 0.0),
    Chromaticity::new(0.0, 1.0),
    Chromaticity::new(0.0, 0.0),
    EQUAL_ENERGY_XY,
);

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the normalized RGB to XYZ matrix for a set of primaries.
///
/// No checks: collinear primaries or `white.y == 0` produce inf/NaN
/// entries. Use [`try_rgb_to_xyz_matrix`] to get an error instead.
///
/// # Example
///
/// ```rust
/// use tint_primaries::{REC709, rgb_to_xyz_matrix};
///
/// let m = rgb_to_xyz_matrix(&REC709);
/// assert!((m.m[1][0] - 0.2126).abs() < 1e-3);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let p = primaries.column_matrix();
    let c = p.inverse_unchecked() * primaries.white_xyz();
    p.scale_cols(c)
}

/// Checked variant of [`rgb_to_xyz_matrix`].
///
/// # Errors
///
/// - [`Error::DegenerateWhitePoint`] if `white.y == 0`
/// - [`Error::SingularMatrix`] if the primaries are collinear
/// - [`Error::NonFiniteMatrix`] if the result still contains inf/NaN
pub fn try_rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3> {
    let w = primaries.white;
    if w.y == 0.0 {
        return Err(Error::DegenerateWhitePoint { x: w.x, y: w.y });
    }

    let p = primaries.column_matrix();
    let p_inv = p.inverse().ok_or(Error::SingularMatrix {
        determinant: p.determinant(),
    })?;

    let m = p.scale_cols(p_inv * primaries.white_xyz());
    if !m.is_finite() {
        return Err(Error::NonFiniteMatrix);
    }
    Ok(m)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the closed-form inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse_unchecked()
}

/// Computes a matrix to convert from one RGB color space to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. No
/// chromatic adaptation is applied when the white points differ.
///
/// # Example
///
/// ```rust
/// use tint_primaries::{REC709, REC2020, rgb_to_rgb_matrix};
///
/// let rec709_to_rec2020 = rgb_to_rgb_matrix(&REC709, &REC2020);
/// assert!(rec709_to_rec2020.m[0][0] < 1.0);
/// ```
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Primaries; 7] = [
        REC709, ADOBE_RGB, DISPLAY_P3, REC2020, ACES_AP0, ACES_AP1, IDENTITY,
    ];

    #[test]
    fn test_rec709_matrix() {
        let m = rgb_to_xyz_matrix(&REC709);

        // Against published sRGB values
        assert!((m.m[0][0] - 0.4124564).abs() < 1e-3);
        assert!((m.m[1][0] - 0.2126729).abs() < 1e-3);
        assert!((m.m[1][1] - 0.7151522).abs() < 1e-3);
        assert!((m.m[2][2] - 0.9503041).abs() < 1e-3);
    }

    #[test]
    fn test_ap0_matrix() {
        let m = rgb_to_xyz_matrix(&ACES_AP0);
        assert!((m.m[0][0] - 0.9525524).abs() < 1e-4);
        assert!((m.m[1][1] - 0.7281661).abs() < 1e-4);
        assert!((m.m[2][2] - 1.0088252).abs() < 1e-4);
    }

    #[test]
    fn test_identity_primaries() {
        let m = rgb_to_xyz_matrix(&IDENTITY);
        assert!(m.abs_diff_eq(&Mat3::IDENTITY, 1e-6), "{:?}", m);
    }

    #[test]
    fn test_white_point() {
        for p in ALL {
            let white = rgb_to_xyz_matrix(&p) * Vec3::ONE;
            assert!((white.y - 1.0).abs() < 1e-5, "{:?}: Y = {}", p, white.y);
            let sum = white.sum();
            assert!((white.x / sum - p.white.x).abs() < 1e-4);
            assert!((white.y / sum - p.white.y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_roundtrip() {
        for p in ALL {
            let id = xyz_to_rgb_matrix(&p) * rgb_to_xyz_matrix(&p);
            assert!(id.abs_diff_eq(&Mat3::IDENTITY, 1e-5), "{:?}", p);
        }
    }

    #[test]
    fn test_rgb_to_rgb_same_space() {
        let m = rgb_to_rgb_matrix(&REC709, &REC709);
        assert!(m.abs_diff_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_checked_matches_legacy() {
        for p in ALL {
            assert_eq!(try_rgb_to_xyz_matrix(&p), Ok(rgb_to_xyz_matrix(&p)));
        }
    }

    #[test]
    fn test_degenerate_white() {
        let p = REC709.with_white(Chromaticity::new(0.3, 0.0));
        assert_eq!(
            try_rgb_to_xyz_matrix(&p),
            Err(Error::DegenerateWhitePoint { x: 0.3, y: 0.0 })
        );
        assert!(!rgb_to_xyz_matrix(&p).is_finite());
    }

    #[test]
    fn test_collinear_primaries() {
        let line = Primaries::new(
            Chromaticity::new(0.125, 0.125),
            Chromaticity::new(0.25, 0.25),
            Chromaticity::new(0.375, 0.375),
            D65_XY,
        );
        assert!(matches!(
            try_rgb_to_xyz_matrix(&line),
            Err(Error::SingularMatrix { .. })
        ));
        assert!(!rgb_to_xyz_matrix(&line).is_finite());
    }

    #[test]
    fn test_from_rgb_to_xyz_recovers_primaries() {
        for p in [REC709, DISPLAY_P3, REC2020, ACES_AP1] {
            let back = Primaries::from_rgb_to_xyz(&rgb_to_xyz_matrix(&p));
            assert!(back.approx_eq(&p, 1e-4), "{:?} vs {:?}", back, p);
        }
    }
}
