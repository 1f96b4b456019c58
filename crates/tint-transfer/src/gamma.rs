//! Gamma transfer function with an optional linear toe.
//!
//! A single parametric curve covers every transfer function in the
//! workspace: a pure power law (`linear_bias == 0`), a power law with a
//! linear segment near black (sRGB style), or the identity (`gamma == 1`).
//!
//! ## Parameters
//!
//! - `gamma` (γ): exponent applied to encoded values on the way to linear
//! - `linear_bias` (a): offset that makes room for the linear toe
//!
//! ## Derived breakpoint
//!
//! ```text
//! γ == 1 :  K0 = +inf, φ = 1           (identity)
//! a <= 0 :  K0 = 0,    φ = 1           (pure power law)
//! else   :  K0 = a / (γ - 1)
//!           φ  = (a / exp(ln(γa / (γ + γa - 1 - a)) * γ)) / (γ - 1)
//! ```
//!
//! `K0` is the encoded-domain breakpoint and `K0 / φ` its linear-domain
//! image. The curve is value-continuous there by construction.
//!
//! ## Evaluation
//!
//! ```text
//! to_linear(t)   = t < K0     ? t / φ : ((t + a) / (1 + a))^γ
//! from_linear(t) = t < K0 / φ ? t * φ : (1 + a) * t^(1/γ) - a
//! ```
//!
//! # Range
//!
//! No clamping. `K0 >= 0`, so every negative input takes the linear segment
//! and passes through scaled by `φ` (unchanged for a pure power law). The
//! power segment only sees non-negative bases, so finite input never yields
//! NaN. Callers own gamut policy.

use tint_core::Rgb;

/// Precomputed gamma curve.
///
/// # Example
///
/// ```rust
/// use tint_transfer::TransferFunction;
///
/// let srgb = TransferFunction::new(2.4, 0.055);
/// assert!((srgb.k0 - 0.0392857).abs() < 1e-6);
/// assert!((srgb.phi - 12.9232).abs() < 1e-3);
///
/// let linear = srgb.to_linear(0.5);
/// assert!((linear - 0.214041).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFunction {
    /// Exponent of the power segment
    pub gamma: f32,
    /// Offset of the power segment; 0 means no linear toe
    pub linear_bias: f32,
    /// Encoded-domain breakpoint
    pub k0: f32,
    /// Slope of the linear toe
    pub phi: f32,
}

impl TransferFunction {
    /// The identity curve (γ = 1).
    pub const LINEAR: Self = Self {
        gamma: 1.0,
        linear_bias: 0.0,
        k0: f32::INFINITY,
        phi: 1.0,
    };

    /// Derives `K0` and `φ` from `gamma` and `linear_bias`.
    pub fn new(gamma: f32, linear_bias: f32) -> Self {
        let (k0, phi) = k0_phi(gamma, linear_bias);
        Self {
            gamma,
            linear_bias,
            k0,
            phi,
        }
    }

    /// True for the identity curve.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.gamma == 1.0
    }

    /// Encoded-domain breakpoint (`K0`).
    #[inline]
    pub fn breakpoint(&self) -> f32 {
        self.k0
    }

    /// Linear-domain breakpoint (`K0 / φ`).
    #[inline]
    pub fn linear_breakpoint(&self) -> f32 {
        self.k0 / self.phi
    }

    /// Decodes one channel to linear.
    #[inline]
    pub fn to_linear(&self, t: f32) -> f32 {
        if t < self.k0 {
            t / self.phi
        } else {
            let a = self.linear_bias;
            ((t + a) / (1.0 + a)).powf(self.gamma)
        }
    }

    /// Encodes one linear channel.
    #[inline]
    pub fn from_linear(&self, t: f32) -> f32 {
        if t < self.k0 / self.phi {
            t * self.phi
        } else {
            let a = self.linear_bias;
            (1.0 + a) * t.powf(1.0 / self.gamma) - a
        }
    }

    /// Decodes each channel of an RGB value.
    #[inline]
    pub fn to_linear_rgb(&self, c: Rgb) -> Rgb {
        c.map(|t| self.to_linear(t))
    }

    /// Encodes each channel of a linear RGB value.
    #[inline]
    pub fn from_linear_rgb(&self, c: Rgb) -> Rgb {
        c.map(|t| self.from_linear(t))
    }

    /// Decodes a slice of scalar channel values in place.
    pub fn to_linear_slice(&self, values: &mut [f32]) {
        if self.is_linear() {
            return;
        }
        for v in values {
            *v = self.to_linear(*v);
        }
    }

    /// Encodes a slice of scalar channel values in place.
    pub fn from_linear_slice(&self, values: &mut [f32]) {
        if self.is_linear() {
            return;
        }
        for v in values {
            *v = self.from_linear(*v);
        }
    }
}

impl Default for TransferFunction {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Computes the breakpoint `(K0, φ)` for a gamma curve.
///
/// `φ` is evaluated in f32 in exactly the documented operation order, so
/// curves built from the same parameters agree bit for bit.
pub fn k0_phi(gamma: f32, linear_bias: f32) -> (f32, f32) {
    if gamma == 1.0 {
        return (f32::INFINITY, 1.0);
    }
    if linear_bias <= 0.0 {
        return (0.0, 1.0);
    }

    let a = linear_bias;
    let k0 = a / (gamma - 1.0);
    let phi = (a / ((gamma * a / (gamma + gamma * a - 1.0 - a)).ln() * gamma).exp())
        / (gamma - 1.0);
    (k0, phi)
}
