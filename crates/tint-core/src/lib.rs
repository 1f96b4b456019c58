//! # tint-core
//!
//! Core value types shared by every tint crate.
//!
//! - [`Chromaticity`], [`Xyz`], [`Yxy`] - CIE 1931 coordinates
//! - [`Rgb`], [`Rgba`] - color values with no intrinsic color space
//! - [`Error`] - failures reported by checked colorimetry operations
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math (matrices, SIMD batches)
//!    +-- tint-transfer (gamma curves)
//!    +-- tint-primaries (RGB to XYZ derivation)
//!    +-- tint-color (color spaces, transforms, registry)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod error;
pub mod pixel;

pub use chromaticity::{Chromaticity, Xyz, Yxy};
pub use error::{Error, Result};
pub use pixel::{Rgb, Rgba};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chromaticity::{Chromaticity, Xyz, Yxy};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{Rgb, Rgba};
}
