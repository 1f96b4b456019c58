//! # tint-math
//!
//! Matrix math for color space transforms.
//!
//! - [`Mat3`] - 3x3 matrices, row-major, column vectors
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - [`simd`] - batched in-place matrix transforms over RGB/RGBA slices
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! let back = rgb_to_xyz.inverse().unwrap() * xyz;
//! assert!((back.x - 1.0).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the wider graphics ecosystem
//! - [`wide`] - portable SIMD for the batch path
//! - `tint-core` - value types
//!
//! # Used By
//!
//! - `tint-primaries` - RGB/XYZ matrix generation
//! - `tint-color` - Color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
pub mod simd;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}
