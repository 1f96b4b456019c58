//! # tint-transfer
//!
//! Transfer functions (gamma curves) for color encoding and decoding.
//!
//! A transfer function converts between linear light values and encoded
//! values. Every color space in tint uses the same two-parameter family,
//! [`TransferFunction`]: a power law with an optional linear toe near black.
//!
//! # Terminology
//!
//! - **to_linear** (EOTF-like): Encoded -> Linear
//! - **from_linear** (OETF-like): Linear -> Encoded
//! - **Gamma**: The exponent in the power-law segment
//! - **Linear bias**: Offset that introduces the linear toe
//!
//! | Curve | gamma | linear_bias |
//! |-------|-------|-------------|
//! | linear | 1.0 | 0 |
//! | [`srgb`] | 2.4 | 0.055 |
//! | Adobe RGB (1998) | 563/256 | 0 |
//! | gamma 1.8 / 2.2 | 1.8 / 2.2 | 0 |
//!
//! # Usage
//!
//! ```rust
//! use tint_transfer::{TransferFunction, srgb};
//!
//! let tf = TransferFunction::new(2.2, 0.0);
//! let linear = tf.to_linear(0.5);
//! let encoded = tf.from_linear(linear);
//! assert!((encoded - 0.5).abs() < 1e-6);
//!
//! let linear = srgb::eotf(0.5);
//! ```
//!
//! # Dependencies
//!
//! - `tint-core` - Core types
//!
//! # Used By
//!
//! - `tint-color` - Full color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod srgb;

pub use gamma::{TransferFunction, k0_phi};
