//! IEC 61966-2-1 sRGB transfer function.
//!
//! sRGB is the γ = 2.4, a = 0.055 member of the [`TransferFunction`]
//! family. The breakpoint is derived, not hard-coded, so the constants
//! here are the parameters only.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use std::sync::LazyLock;

use crate::TransferFunction;

/// sRGB exponent.
pub const GAMMA: f32 = 2.4;

/// sRGB linear bias.
pub const LINEAR_BIAS: f32 = 0.055;

static CURVE: LazyLock<TransferFunction> =
    LazyLock::new(|| TransferFunction::new(GAMMA, LINEAR_BIAS));

/// The sRGB curve, derived once per process.
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb;
///
/// let tf = srgb::curve();
/// assert!((tf.to_linear(0.5) - 0.214041).abs() < 1e-5);
/// ```
#[inline]
pub fn curve() -> TransferFunction {
    *CURVE
}

/// Decodes an sRGB value to linear.
#[inline]
pub fn eotf(v: f32) -> f32 {
    CURVE.to_linear(v)
}

/// Encodes a linear value to sRGB.
#[inline]
pub fn oetf(l: f32) -> f32 {
    CURVE.from_linear(l)
}
