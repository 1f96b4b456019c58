//! # tint-color
//!
//! Named color spaces and the transforms between them.
//!
//! A color space is three primaries, a white point and an invertible
//! piecewise transfer curve. This crate builds them, keeps the built-in set,
//! and moves colors between any two of them:
//!
//! - **Color spaces** - [`ColorSpace`] from primaries or an explicit matrix
//! - **Registry** - the 16 built-in spaces ([`Registry`]) and user-created
//!   ones ([`UserColorSpaces`])
//! - **Transforms** - single colors, SIMD batches, RGBA with alpha untouched
//! - **Colorimetry** - XYZ/Yxy, blackbody chromaticity, space matching
//! - **Config** - user spaces and aliases from YAML or JSON
//!
//! # Architecture
//!
//! ```text
//!                  tint-color
//!                      |
//!         +------------+------------+
//!         |                         |
//!   tint-transfer            tint-primaries
//!         |                         |
//!         |                     tint-math
//!         |                         |
//!         +------------+------------+
//!                      |
//!                  tint-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{Registry, transform_color};
//! use tint_core::Rgb;
//!
//! let reg = Registry::global();
//! let srgb = reg.get("sRGB").unwrap();
//! let lin = reg.get("lin_srgb").unwrap();
//!
//! let linear = transform_color(lin, srgb, Rgb::new(0.5, 0.5, 0.5));
//! assert!((linear.g - 0.214041).abs() < 1e-5);
//! ```
//!
//! # Built-in Spaces
//!
//! | Name | Primaries | Curve | White |
//! |------|-----------|-------|-------|
//! | `acescg`, `lin_ap1` | AP1 | linear | ACES |
//! | `lin_ap0` | AP0 | linear | ACES |
//! | `g18_ap1`, `g22_ap1` | AP1 | gamma 1.8 / 2.2 | ACES |
//! | `lin_rec709`, `lin_srgb` | Rec.709 | linear | D65 |
//! | `g18_rec709`, `g22_rec709` | Rec.709 | gamma 1.8 / 2.2 | D65 |
//! | `srgb_texture` | Rec.709 | sRGB | D65 |
//! | `adobergb`, `lin_adobergb` | Adobe RGB | 563/256 / linear | D65 |
//! | `lin_displayp3`, `srgb_displayp3` | P3 | linear / sRGB | D65 |
//! | `lin_rec2020` | Rec.2020 | linear | D65 |
//! | `identity` | XYZ | linear | E |
//!
//! Synonyms: `raw` for `identity`, `sRGB` for `srgb_texture`.
//!
//! # Errors
//!
//! Transforms never fail. Degenerate input produces documented sentinels
//! (see [`colorimetry`]) or non-finite values; the checked operations
//! ([`ColorSpace::validate`], [`colorimetry::try_kelvin_to_yxy`],
//! [`tint_primaries::try_rgb_to_xyz_matrix`]) report them as errors instead.
//!
//! # Features
//!
//! - `parallel` - [`transform_colors_par`] on rayon
//!
//! # Dependencies
//!
//! - [`tint-core`] - Value types and the core error
//! - [`tint-math`] - `Mat3` and the SIMD batch path
//! - [`tint-transfer`] - Transfer curves
//! - [`tint-primaries`] - Primaries and matrix derivation
//!
//! # Used By
//!
//! - `tint-bench` - Transform benchmarks
//!
//! [`tint-core`]: tint_core
//! [`tint-math`]: tint_math
//! [`tint-transfer`]: tint_transfer
//! [`tint-primaries`]: tint_primaries

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod registry;
mod space;
pub mod colorimetry;
pub mod config;
pub mod transform;

pub use colorimetry::{
    kelvin_to_yxy, match_linear_color_space, project_to_chromaticities, try_kelvin_to_yxy,
    xyz_to_yxy, yxy_to_rgb, yxy_to_xyz,
};
pub use config::{ColorSpaceEntry, Config};
pub use error::{ColorError, ColorResult};
pub use registry::{Registry, SYNONYMS, UserColorSpaces, resolve_name};
pub use space::{
    CURVE_EPSILON, ColorSpace, ColorSpaceDescriptor, ColorSpaceM33Descriptor, MATRIX_EPSILON,
    Origin,
};
#[cfg(feature = "parallel")]
pub use transform::transform_colors_par;
pub use transform::{
    rgb_to_rgb_matrix, rgb_to_xyz, transform_color, transform_colors, transform_colors_scalar,
    transform_colors_with_alpha, xyz_to_rgb,
};

// Re-export sub-crates for convenience
pub use tint_core;
pub use tint_math as math;
pub use tint_primaries as primaries;
pub use tint_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ColorError, ColorResult, ColorSpace, ColorSpaceDescriptor, ColorSpaceM33Descriptor,
        Config, Registry, UserColorSpaces,
    };
    pub use crate::{transform_color, transform_colors, transform_colors_with_alpha};

    pub use tint_core::{Chromaticity, Rgb, Rgba, Xyz, Yxy};
    pub use tint_math::Mat3;
    pub use tint_primaries::Primaries;
    pub use tint_transfer::TransferFunction;
}
