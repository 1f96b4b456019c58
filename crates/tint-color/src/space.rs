//! Color space definitions.
//!
//! A [`ColorSpace`] is a named pair of a transfer curve and a normalized
//! RGB to XYZ matrix. It is built from one of two descriptors:
//!
//! - [`ColorSpaceDescriptor`] - primaries + white point + curve; the matrix
//!   is derived per SMPTE RP 177
//! - [`ColorSpaceM33Descriptor`] - an explicit matrix + curve; primaries and
//!   white point are back-derived from the matrix for introspection
//!
//! All derived data is computed in the constructor. A `ColorSpace` is
//! immutable afterwards and is `Send + Sync`.
//!
//! # Degenerate input
//!
//! Construction never fails. Collinear primaries or a white point with
//! `y == 0` yield a matrix with inf/NaN entries (and a `warn!` event);
//! [`ColorSpace::validate`] reports those cases explicitly.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{ColorSpace, ColorSpaceDescriptor};
//! use tint_color::primaries::DISPLAY_P3;
//!
//! let desc = ColorSpaceDescriptor::new("my_p3", DISPLAY_P3, 2.4, 0.055);
//! let cs = ColorSpace::new(&desc);
//! assert!(cs.validate().is_ok());
//! assert!(cs.is_normalized());
//! ```

use serde::{Deserialize, Serialize};
use tint_core::{Chromaticity, Error};
use tint_math::Mat3;
use tint_primaries::{Primaries, rgb_to_xyz_matrix, try_rgb_to_xyz_matrix};
use tint_transfer::TransferFunction;
use tracing::warn;

/// Matrix tolerance for [`ColorSpace::approx_eq`].
pub const MATRIX_EPSILON: f32 = 1e-5;

/// Curve parameter tolerance for [`ColorSpace::approx_eq`].
pub const CURVE_EPSILON: f32 = 1e-3;

/// Primaries-based color space description.
///
/// A white point with `x == 0` marks a descriptor whose matrix is supplied
/// some other way; no matrix is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorSpaceDescriptor {
    /// Unique name
    pub name: String,
    /// Red primary
    pub red_primary: Chromaticity,
    /// Green primary
    pub green_primary: Chromaticity,
    /// Blue primary
    pub blue_primary: Chromaticity,
    /// White point
    pub white_point: Chromaticity,
    /// Transfer curve exponent
    pub gamma: f32,
    /// Transfer curve linear bias
    #[serde(default)]
    pub linear_bias: f32,
}

impl ColorSpaceDescriptor {
    /// Creates a descriptor from [`Primaries`] and curve parameters.
    pub fn new(name: impl Into<String>, primaries: Primaries, gamma: f32, linear_bias: f32) -> Self {
        Self {
            name: name.into(),
            red_primary: primaries.red,
            green_primary: primaries.green,
            blue_primary: primaries.blue,
            white_point: primaries.white,
            gamma,
            linear_bias,
        }
    }

    /// The four chromaticities as [`Primaries`].
    pub fn primaries(&self) -> Primaries {
        Primaries::new(
            self.red_primary,
            self.green_primary,
            self.blue_primary,
            self.white_point,
        )
    }
}

/// Matrix-based color space description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorSpaceM33Descriptor {
    /// Unique name
    pub name: String,
    /// RGB to XYZ matrix, row-major (`index = row * 3 + col`)
    #[serde(rename = "rgbToXYZ")]
    pub rgb_to_xyz: [f32; 9],
    /// Transfer curve exponent
    pub gamma: f32,
    /// Transfer curve linear bias
    #[serde(default)]
    pub linear_bias: f32,
}

/// How a color space's matrix was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Derived from primaries and white point.
    Primaries,
    /// Supplied directly; primaries are back-derived.
    Matrix,
}

/// A color space: transfer curve plus RGB to XYZ matrix.
#[derive(Debug, Clone)]
pub struct ColorSpace {
    name: String,
    description: Option<&'static str>,
    origin: Origin,
    primaries: Primaries,
    transfer: TransferFunction,
    rgb_to_xyz: Mat3,
    xyz_to_rgb: Mat3,
}

impl ColorSpace {
    /// Builds a color space from primaries, deriving its matrix.
    pub fn new(desc: &ColorSpaceDescriptor) -> Self {
        let primaries = desc.primaries();
        let rgb_to_xyz = if primaries.white.x == 0.0 {
            warn!(name = %desc.name, "white point x is 0, no matrix derived");
            Mat3::ZERO
        } else {
            rgb_to_xyz_matrix(&primaries)
        };

        Self::assemble(
            desc.name.clone(),
            Origin::Primaries,
            primaries,
            TransferFunction::new(desc.gamma, desc.linear_bias),
            rgb_to_xyz,
        )
    }

    /// Builds a color space from an explicit RGB to XYZ matrix.
    ///
    /// Primaries and white point are recovered by projecting the matrix
    /// columns (and their sum) to chromaticity. Whether the matrix maps
    /// RGB (1, 1, 1) to unit luminance is available via
    /// [`ColorSpace::is_normalized`].
    pub fn from_m33(desc: &ColorSpaceM33Descriptor) -> Self {
        let rgb_to_xyz = Mat3::from_flat(desc.rgb_to_xyz);
        Self::assemble(
            desc.name.clone(),
            Origin::Matrix,
            Primaries::from_rgb_to_xyz(&rgb_to_xyz),
            TransferFunction::new(desc.gamma, desc.linear_bias),
            rgb_to_xyz,
        )
    }

    fn assemble(
        name: String,
        origin: Origin,
        primaries: Primaries,
        transfer: TransferFunction,
        rgb_to_xyz: Mat3,
    ) -> Self {
        if !rgb_to_xyz.is_finite() {
            warn!(name = %name, "RGB to XYZ matrix contains non-finite values");
        }
        Self {
            name,
            description: None,
            origin,
            primaries,
            transfer,
            rgb_to_xyz,
            xyz_to_rgb: rgb_to_xyz.inverse_unchecked(),
        }
    }

    pub(crate) fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Name of this color space.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description (built-ins only).
    #[inline]
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// How the matrix was obtained.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Primaries and white point, declared or back-derived.
    #[inline]
    pub fn primaries(&self) -> Primaries {
        self.primaries
    }

    /// Transfer curve.
    #[inline]
    pub fn transfer(&self) -> &TransferFunction {
        &self.transfer
    }

    /// Transfer curve exponent.
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.transfer.gamma
    }

    /// Transfer curve linear bias.
    #[inline]
    pub fn linear_bias(&self) -> f32 {
        self.transfer.linear_bias
    }

    /// Transfer curve breakpoint `(K0, φ)`.
    #[inline]
    pub fn k0_phi(&self) -> (f32, f32) {
        (self.transfer.k0, self.transfer.phi)
    }

    /// True when the transfer curve is the identity.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.transfer.is_linear()
    }

    /// RGB to XYZ matrix.
    #[inline]
    pub fn rgb_to_xyz_matrix(&self) -> Mat3 {
        self.rgb_to_xyz
    }

    /// XYZ to RGB matrix (closed-form inverse of the RGB to XYZ matrix).
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> Mat3 {
        self.xyz_to_rgb
    }

    /// True if RGB (1, 1, 1) maps to luminance 1 within 1e-3.
    pub fn is_normalized(&self) -> bool {
        (self.rgb_to_xyz.row(1).sum() - 1.0).abs() < 1e-3
    }

    /// Primaries-based descriptor of this space.
    ///
    /// For matrix-built spaces the chromaticities are the back-derived ones,
    /// so rebuilding from this descriptor gives a normalized matrix that
    /// may differ from the supplied one when that was not normalized.
    pub fn descriptor(&self) -> ColorSpaceDescriptor {
        ColorSpaceDescriptor::new(
            self.name.clone(),
            self.primaries,
            self.transfer.gamma,
            self.transfer.linear_bias,
        )
    }

    /// Matrix-based descriptor of this space.
    pub fn m33_descriptor(&self) -> ColorSpaceM33Descriptor {
        ColorSpaceM33Descriptor {
            name: self.name.clone(),
            rgb_to_xyz: self.rgb_to_xyz.to_flat(),
            gamma: self.transfer.gamma,
            linear_bias: self.transfer.linear_bias,
        }
    }

    /// Equality up to float noise.
    ///
    /// Names must match exactly, matrices within [`MATRIX_EPSILON`] per
    /// element, gamma and linear bias within [`CURVE_EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.rgb_to_xyz.abs_diff_eq(&other.rgb_to_xyz, MATRIX_EPSILON)
            && (self.transfer.gamma - other.transfer.gamma).abs() <= CURVE_EPSILON
            && (self.transfer.linear_bias - other.transfer.linear_bias).abs() <= CURVE_EPSILON
    }

    /// Checks that the matrix is finite and invertible.
    ///
    /// # Errors
    ///
    /// For primaries-based spaces, the errors of
    /// [`tint_primaries::try_rgb_to_xyz_matrix`]; then
    /// [`Error::NonFiniteMatrix`] or [`Error::SingularMatrix`] for the
    /// matrix itself.
    pub fn validate(&self) -> tint_core::Result<()> {
        if self.origin == Origin::Primaries && self.primaries.white.x != 0.0 {
            try_rgb_to_xyz_matrix(&self.primaries)?;
        }
        if !self.rgb_to_xyz.is_finite() {
            return Err(Error::NonFiniteMatrix);
        }
        if self.rgb_to_xyz.inverse().is_none() {
            return Err(Error::SingularMatrix {
                determinant: self.rgb_to_xyz.determinant(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_math::Vec3;
    use tint_primaries::{D65_XY, REC709};

    fn lin_rec709() -> ColorSpace {
        ColorSpace::new(&ColorSpaceDescriptor::new("lin_rec709", REC709, 1.0, 0.0))
    }

    #[test]
    fn test_new_derives_matrix() {
        let cs = lin_rec709();
        assert_eq!(cs.origin(), Origin::Primaries);
        assert_eq!(cs.rgb_to_xyz_matrix(), rgb_to_xyz_matrix(&REC709));
        assert!(cs.is_linear());
        assert!(cs.is_normalized());
        assert!(cs.validate().is_ok());
        assert_eq!(cs.k0_phi(), (f32::INFINITY, 1.0));
    }

    #[test]
    fn test_from_m33_back_derives_primaries() {
        let src = lin_rec709();
        let cs = ColorSpace::from_m33(&src.m33_descriptor());
        assert_eq!(cs.origin(), Origin::Matrix);
        assert!(cs.is_normalized());
        assert!(cs.primaries().approx_eq(&REC709, 1e-4), "{:?}", cs.primaries());
        assert!(cs.approx_eq(&src));
    }

    #[test]
    fn test_from_m33_unnormalized() {
        let scaled = rgb_to_xyz_matrix(&REC709) * Mat3::diagonal(2.0, 2.0, 2.0);
        let cs = ColorSpace::from_m33(&ColorSpaceM33Descriptor {
            name: "double".into(),
            rgb_to_xyz: scaled.to_flat(),
            gamma: 1.0,
            linear_bias: 0.0,
        });
        assert!(!cs.is_normalized());
        // Chromaticity is scale invariant
        assert!(cs.primaries().white.approx_eq(&D65_XY, 1e-4));
    }

    #[test]
    fn test_xyz_to_rgb_is_inverse() {
        let cs = lin_rec709();
        let v = Vec3::new(0.2, 0.5, 0.8);
        let back = cs.xyz_to_rgb_matrix() * (cs.rgb_to_xyz_matrix() * v);
        assert!((back - v).to_array().iter().all(|d| d.abs() < 1e-5));
    }

    #[test]
    fn test_approx_eq_requires_same_name() {
        let a = lin_rec709();
        let b = ColorSpace::new(&ColorSpaceDescriptor::new("other", REC709, 1.0, 0.0));
        assert!(!a.approx_eq(&b));
        let c = ColorSpace::new(&ColorSpaceDescriptor::new("lin_rec709", REC709, 1.0005, 0.0));
        assert!(a.approx_eq(&c));
        let d = ColorSpace::new(&ColorSpaceDescriptor::new("lin_rec709", REC709, 2.2, 0.0));
        assert!(!a.approx_eq(&d));
    }

    #[test]
    fn test_degenerate_is_fail_soft() {
        let desc = ColorSpaceDescriptor::new(
            "bad",
            REC709.with_white(Chromaticity::new(0.3, 0.0)),
            1.0,
            0.0,
        );
        let cs = ColorSpace::new(&desc);
        assert!(!cs.rgb_to_xyz_matrix().is_finite());
        assert!(matches!(
            cs.validate(),
            Err(Error::DegenerateWhitePoint { .. })
        ));
    }

    #[test]
    fn test_white_x_zero_sentinel() {
        let desc = ColorSpaceDescriptor::new(
            "no_matrix",
            REC709.with_white(Chromaticity::new(0.0, 0.33)),
            1.0,
            0.0,
        );
        let cs = ColorSpace::new(&desc);
        assert_eq!(cs.rgb_to_xyz_matrix(), Mat3::ZERO);
        assert!(matches!(cs.validate(), Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_descriptor_serde_field_names() {
        let desc = lin_rec709().descriptor();
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["name"], "lin_rec709");
        assert!(json["redPrimary"]["x"].is_number());
        assert!(json["whitePoint"]["y"].is_number());
        assert!(json["linearBias"].is_number());

        let m33 = serde_json::to_value(lin_rec709().m33_descriptor()).unwrap();
        assert_eq!(m33["rgbToXYZ"].as_array().map(|a| a.len()), Some(9));

        let back: ColorSpaceDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, desc);
    }

    #[test]
    fn test_linear_bias_defaults_to_zero() {
        let json = r#"{
            "name": "g22",
            "redPrimary": {"x": 0.64, "y": 0.33},
            "greenPrimary": {"x": 0.30, "y": 0.60},
            "bluePrimary": {"x": 0.15, "y": 0.06},
            "whitePoint": {"x": 0.3127, "y": 0.3290},
            "gamma": 2.2
        }"#;
        let desc: ColorSpaceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.linear_bias, 0.0);
        assert_eq!(desc.primaries(), REC709);
    }
}
