//! Error types for colorimetric primitives.
//!
//! Most operations in this workspace are fail-soft: they return a documented
//! sentinel or propagate inf/NaN the way the closed-form math does. The
//! variants here back the *checked* alternatives (`try_*`, `validate`) that
//! turn those silent cases into an explicit signal.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check_kelvin(t: f32) -> Result<f32> {
//!     if !(1000.0..=15000.0).contains(&t) {
//!         return Err(Error::TemperatureOutOfRange { kelvin: t });
//!     }
//!     Ok(t)
//! }
//! assert!(check_kelvin(500.0).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the checked colorimetry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A matrix that must be inverted has a zero or non-finite determinant.
    ///
    /// Collinear primaries produce this when deriving an RGB to XYZ matrix.
    #[error("singular matrix (determinant {determinant})")]
    SingularMatrix {
        /// The offending determinant.
        determinant: f32,
    },

    /// The white point has `y == 0` and cannot be luminance-normalized.
    #[error("degenerate white point ({x}, {y})")]
    DegenerateWhitePoint {
        /// White point x.
        x: f32,
        /// White point y.
        y: f32,
    },

    /// Blackbody temperature outside the supported `[1000, 15000]` K range.
    #[error("temperature {kelvin}K outside [1000, 15000]")]
    TemperatureOutOfRange {
        /// Requested temperature in Kelvin.
        kelvin: f32,
    },

    /// A derived matrix contains inf or NaN.
    #[error("matrix contains non-finite values")]
    NonFiniteMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::SingularMatrix { determinant: 0.0 };
        assert!(e.to_string().contains("singular"));
        let e = Error::TemperatureOutOfRange { kelvin: 500.0 };
        assert!(e.to_string().contains("500"));
    }
}
