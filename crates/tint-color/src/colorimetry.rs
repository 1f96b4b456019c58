//! CIE colorimetry helpers.
//!
//! - [`xyz_to_yxy`] / [`yxy_to_xyz`] - tristimulus to luminance + chromaticity
//! - [`project_to_chromaticities`] - XYZ normalized to sum 1
//! - [`kelvin_to_yxy`] - blackbody (Planckian) locus, Krystek 1985
//! - [`match_linear_color_space`] - find a built-in by its chromaticities
//! - [`yxy_to_rgb`] - Yxy to RGB with a gamut-normalizing soft clip
//!
//! # Zero denominators
//!
//! None of these functions produce NaN from a zero denominator. Each has a
//! fixed sentinel instead:
//!
//! | Function | Condition | Result |
//! |----------|-----------|--------|
//! | [`xyz_to_yxy`] | `X + Y + Z == 0` | `(Y, 0, 0)` |
//! | [`yxy_to_xyz`] | `y == 0` | [`Xyz::ZERO`] |
//! | [`project_to_chromaticities`] | `X + Y + Z == 0` | [`Xyz::ZERO`] |
//! | [`kelvin_to_yxy`] | `T` outside `[1000, 15000]` | [`Yxy::ZERO`] |

use tint_core::{Chromaticity, Error, Rgb, Xyz, Yxy};
use tint_primaries::Primaries;

use crate::registry::Registry;
use crate::space::ColorSpace;
use crate::transform::xyz_to_rgb;

/// Lowest temperature accepted by [`kelvin_to_yxy`].
pub const KELVIN_MIN: f32 = 1000.0;

/// Highest temperature accepted by [`kelvin_to_yxy`].
pub const KELVIN_MAX: f32 = 15000.0;

/// XYZ to Yxy.
///
/// # Example
///
/// ```rust
/// use tint_color::colorimetry::xyz_to_yxy;
/// use tint_core::Xyz;
///
/// let c = xyz_to_yxy(Xyz::new(0.25, 0.5, 0.25));
/// assert_eq!((c.luminance, c.x, c.y), (0.5, 0.25, 0.5));
/// ```
pub fn xyz_to_yxy(xyz: Xyz) -> Yxy {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        return Yxy::new(xyz.y, 0.0, 0.0);
    }
    Yxy::new(xyz.y, xyz.x / sum, xyz.y / sum)
}

/// Yxy to XYZ.
pub fn yxy_to_xyz(c: Yxy) -> Xyz {
    if c.y == 0.0 {
        return Xyz::ZERO;
    }
    Xyz::new(
        c.luminance * c.x / c.y,
        c.luminance,
        c.luminance * (1.0 - c.x - c.y) / c.y,
    )
}

/// Scales XYZ so its components sum to 1.
pub fn project_to_chromaticities(xyz: Xyz) -> Xyz {
    let n = xyz.x + xyz.y + xyz.z;
    if n == 0.0 {
        return Xyz::ZERO;
    }
    Xyz::new(xyz.x / n, xyz.y / n, xyz.z / n)
}

/// Chromaticity of a blackbody radiator at `kelvin`, with the given luminance.
///
/// Krystek's rational approximation of the Planckian locus in CIE 1960 uv,
/// evaluated in f64. Returns [`Yxy::ZERO`] outside `[1000, 15000]` K.
///
/// # Example
///
/// ```rust
/// use tint_color::colorimetry::kelvin_to_yxy;
///
/// let c = kelvin_to_yxy(6500.0, 1.0);
/// assert!((c.x - 0.3127).abs() < 0.01 && (c.y - 0.3290).abs() < 0.01);
/// ```
pub fn kelvin_to_yxy(kelvin: f32, luminance: f32) -> Yxy {
    try_kelvin_to_yxy(kelvin, luminance).unwrap_or(Yxy::ZERO)
}

/// Checked variant of [`kelvin_to_yxy`].
///
/// # Errors
///
/// [`Error::TemperatureOutOfRange`] outside `[1000, 15000]` K, including NaN.
pub fn try_kelvin_to_yxy(kelvin: f32, luminance: f32) -> tint_core::Result<Yxy> {
    if !(KELVIN_MIN..=KELVIN_MAX).contains(&kelvin) {
        return Err(Error::TemperatureOutOfRange { kelvin });
    }

    let t = f64::from(kelvin);
    let t2 = t * t;
    let u = (0.860117757 + 1.54118254e-4 * t + 1.2864121e-7 * t2)
        / (1.0 + 8.42420235e-4 * t + 7.08145163e-7 * t2);
    let v = (0.317398726 + 4.22806245e-5 * t + 4.20481691e-8 * t2)
        / (1.0 - 2.89741816e-5 * t + 1.61456053e-7 * t2);

    // CIE 1976 u'v' from 1960 uv
    let v_prime = 1.5 * v;
    let d = 6.0 * u - 16.0 * v_prime + 12.0;
    let x = 9.0 * u / d;
    let y = 4.0 * v_prime / d;

    Ok(Yxy::new(luminance, x as f32, y as f32))
}

/// Finds the first linear built-in whose primaries and white point match.
///
/// Scans built-ins in declaration order, skipping any with `gamma != 1`.
/// Each of the four chromaticities must be within `epsilon` (strict) on
/// both axes. Spaces sharing chromaticities resolve to the earlier one:
/// `acescg` before `lin_ap1`, `lin_rec709` before `lin_srgb`.
///
/// # Example
///
/// ```rust
/// use tint_color::colorimetry::match_linear_color_space;
/// use tint_color::primaries::REC709;
///
/// let name = match_linear_color_space(REC709.red, REC709.green, REC709.blue, REC709.white, 1e-4);
/// assert_eq!(name, Some("lin_rec709"));
/// ```
pub fn match_linear_color_space(
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
    white: Chromaticity,
    epsilon: f32,
) -> Option<&'static str> {
    let wanted = Primaries::new(red, green, blue, white);
    Registry::global()
        .iter()
        .filter(|cs| cs.gamma() == 1.0)
        .find(|cs| cs.primaries().approx_eq(&wanted, epsilon))
        .map(|cs| cs.name())
}

/// Yxy to encoded RGB in `cs`, scaled back into range.
///
/// If the largest channel magnitude exceeds 1, every channel is divided by
/// it, keeping signs and hue. In-range results are returned unchanged.
pub fn yxy_to_rgb(cs: &ColorSpace, c: Yxy) -> Rgb {
    let rgb = xyz_to_rgb(cs, yxy_to_xyz(c));
    let max = rgb.max_abs();
    if max > 1.0 {
        rgb.map(|v| v / max)
    } else {
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_primaries::{ACES_AP1, D65_XY, REC709};

    #[test]
    fn test_xyz_yxy_roundtrip() {
        let xyz = Xyz::new(0.4, 0.3, 0.2);
        let back = yxy_to_xyz(xyz_to_yxy(xyz));
        assert!((back.x - 0.4).abs() < 1e-6);
        assert!((back.y - 0.3).abs() < 1e-6);
        assert!((back.z - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(xyz_to_yxy(Xyz::ZERO), Yxy::ZERO);
        // Negative components can cancel with non-zero luminance
        assert_eq!(xyz_to_yxy(Xyz::new(-0.5, 0.5, 0.0)), Yxy::new(0.5, 0.0, 0.0));
        assert_eq!(yxy_to_xyz(Yxy::new(1.0, 0.3, 0.0)), Xyz::ZERO);
        assert_eq!(project_to_chromaticities(Xyz::ZERO), Xyz::ZERO);
    }

    #[test]
    fn test_project() {
        let p = project_to_chromaticities(Xyz::new(2.0, 1.0, 1.0));
        assert_eq!(p, Xyz::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_kelvin_d65() {
        let c = kelvin_to_yxy(6500.0, 1.0);
        assert_eq!(c.luminance, 1.0);
        assert!((c.x - D65_XY.x).abs() < 0.01, "x = {}", c.x);
        assert!((c.y - D65_XY.y).abs() < 0.01, "y = {}", c.y);
    }

    #[test]
    fn test_kelvin_warm_is_redder() {
        let warm = kelvin_to_yxy(2700.0, 1.0);
        let cool = kelvin_to_yxy(9000.0, 1.0);
        assert!(warm.x > cool.x);
        // Illuminant A is near 2856K
        let a = kelvin_to_yxy(2856.0, 1.0);
        assert!((a.x - 0.4476).abs() < 0.01 && (a.y - 0.4074).abs() < 0.01);
    }

    #[test]
    fn test_kelvin_out_of_range() {
        assert!(kelvin_to_yxy(500.0, 1.0).is_zero());
        assert!(kelvin_to_yxy(20000.0, 1.0).is_zero());
        assert!(kelvin_to_yxy(f32::NAN, 1.0).is_zero());
        assert!(!kelvin_to_yxy(1000.0, 1.0).is_zero());
        assert!(!kelvin_to_yxy(15000.0, 1.0).is_zero());
        assert_eq!(
            try_kelvin_to_yxy(500.0, 1.0),
            Err(Error::TemperatureOutOfRange { kelvin: 500.0 })
        );
    }

    #[test]
    fn test_match_first_declared() {
        let m = |p: Primaries, eps| match_linear_color_space(p.red, p.green, p.blue, p.white, eps);
        assert_eq!(m(REC709, 1e-4), Some("lin_rec709"));
        assert_eq!(m(ACES_AP1, 1e-4), Some("acescg"));
        assert_eq!(m(REC709.with_white(Chromaticity::new(0.2, 0.2)), 1e-4), None);
    }

    #[test]
    fn test_match_epsilon_is_strict() {
        // An exact match still fails a zero tolerance
        let r = REC709;
        assert_eq!(match_linear_color_space(r.red, r.green, r.blue, r.white, 0.0), None);
    }

    #[test]
    fn test_yxy_to_rgb_soft_clip() {
        let cs = Registry::global().get("lin_rec709").unwrap();

        // In gamut: unchanged
        let white = yxy_to_rgb(cs, Yxy::from_chromaticity(0.5, D65_XY));
        assert!((white.r - 0.5).abs() < 1e-4 && (white.b - 0.5).abs() < 1e-4);

        // Bright white is scaled down to max 1
        let bright = yxy_to_rgb(cs, Yxy::from_chromaticity(4.0, D65_XY));
        assert!((bright.max_abs() - 1.0).abs() < 1e-6);

        // Out of gamut keeps its negative channel
        let cyan = yxy_to_rgb(cs, Yxy::new(2.0, 0.15, 0.4));
        assert!((cyan.max_abs() - 1.0).abs() < 1e-6);
        assert!(cyan.r < 0.0, "{:?}", cyan);
    }
}
