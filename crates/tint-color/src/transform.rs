//! Color transforms between color spaces.
//!
//! Every transform runs the same three stages:
//!
//! ```text
//! encoded src ──to_linear(src)──> linear src ──M──> linear dst ──from_linear(dst)──> encoded dst
//!
//! M = xyz_to_rgb(dst) * rgb_to_xyz(src)
//! ```
//!
//! The single-color path ([`transform_color`]) and the scalar batch path
//! ([`transform_colors_scalar`]) use [`Mat3::transform`] for the middle
//! stage. The batch paths ([`transform_colors`],
//! [`transform_colors_with_alpha`]) route it through
//! [`tint_math::simd`], which sums in the same operand order, so all paths
//! agree for every slice length.
//!
//! Argument order is destination first, then source, for every function
//! that takes two spaces except the matrix getters, which read left to
//! right as `src -> dst`.
//!
//! # Missing spaces
//!
//! The `_opt` variants take `Option<&ColorSpace>` and never fail: a missing
//! space leaves colors unchanged, single-space conversions return zero, and
//! matrix getters return the identity.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{Registry, transform};
//! use tint_core::Rgb;
//!
//! let reg = Registry::global();
//! let srgb = reg.get("srgb_texture").unwrap();
//! let acescg = reg.get("acescg").unwrap();
//!
//! let mut pixels = vec![Rgb::new(0.5, 0.2, 0.8); 16];
//! transform::transform_colors(acescg, srgb, &mut pixels);
//! ```

use tint_core::{Rgb, Rgba, Xyz};
use tint_math::{Mat3, Vec3, simd};
use tracing::trace;

use crate::space::ColorSpace;

/// Matrix taking linear `src` RGB to linear `dst` RGB.
///
/// Recomputed on every call; no chromatic adaptation between white points.
#[inline]
pub fn rgb_to_rgb_matrix(src: &ColorSpace, dst: &ColorSpace) -> Mat3 {
    dst.xyz_to_rgb_matrix() * src.rgb_to_xyz_matrix()
}

/// Transforms one color from `src` to `dst`.
pub fn transform_color(dst: &ColorSpace, src: &ColorSpace, rgb: Rgb) -> Rgb {
    let m = rgb_to_rgb_matrix(src, dst);
    convert_one(&m, dst, src, rgb)
}

#[inline]
fn convert_one(m: &Mat3, dst: &ColorSpace, src: &ColorSpace, rgb: Rgb) -> Rgb {
    let linear = src.transfer().to_linear_rgb(rgb);
    let out = m.transform(Vec3::from(linear));
    dst.transfer().from_linear_rgb(Rgb::from(out))
}

/// Transforms colors in place, matrix stage through the SIMD path.
///
/// # Example
///
/// ```rust
/// use tint_color::{Registry, transform};
/// use tint_core::Rgb;
///
/// let reg = Registry::global();
/// let (lin, srgb) = (reg.get("lin_srgb").unwrap(), reg.get("sRGB").unwrap());
///
/// let mut px = [Rgb::ONE, Rgb::ZERO];
/// transform::transform_colors(srgb, lin, &mut px);
/// assert!((px[0].g - 1.0).abs() < 1e-5);
/// ```
pub fn transform_colors(dst: &ColorSpace, src: &ColorSpace, colors: &mut [Rgb]) {
    if colors.is_empty() {
        return;
    }
    trace!(src = src.name(), dst = dst.name(), count = colors.len(), "transform_colors");

    let m = rgb_to_rgb_matrix(src, dst);
    let src_tf = src.transfer();
    let dst_tf = dst.transfer();

    if !src_tf.is_linear() {
        for c in colors.iter_mut() {
            *c = src_tf.to_linear_rgb(*c);
        }
    }

    simd::transform_rgb_batch(&m, bytemuck::cast_slice_mut(colors));

    if !dst_tf.is_linear() {
        for c in colors.iter_mut() {
            *c = dst_tf.from_linear_rgb(*c);
        }
    }
}

/// Scalar reference for [`transform_colors`].
pub fn transform_colors_scalar(dst: &ColorSpace, src: &ColorSpace, colors: &mut [Rgb]) {
    let m = rgb_to_rgb_matrix(src, dst);
    for c in colors {
        *c = convert_one(&m, dst, src, *c);
    }
}

/// Transforms the color part of RGBA values in place.
///
/// Alpha is never read or written at any stage.
pub fn transform_colors_with_alpha(dst: &ColorSpace, src: &ColorSpace, colors: &mut [Rgba]) {
    if colors.is_empty() {
        return;
    }
    trace!(
        src = src.name(),
        dst = dst.name(),
        count = colors.len(),
        "transform_colors_with_alpha"
    );

    let m = rgb_to_rgb_matrix(src, dst);
    let src_tf = src.transfer();
    let dst_tf = dst.transfer();

    if !src_tf.is_linear() {
        for c in colors.iter_mut() {
            c.set_rgb(src_tf.to_linear_rgb(c.rgb()));
        }
    }

    simd::transform_rgba_batch(&m, bytemuck::cast_slice_mut(colors));

    if !dst_tf.is_linear() {
        for c in colors.iter_mut() {
            c.set_rgb(dst_tf.from_linear_rgb(c.rgb()));
        }
    }
}

/// Pixels per rayon task in [`transform_colors_par`].
#[cfg(feature = "parallel")]
pub const PAR_CHUNK: usize = 16 * 1024;

/// Parallel [`transform_colors`] over disjoint chunks.
///
/// Each chunk goes through the same SIMD path, so results equal the
/// sequential call.
#[cfg(feature = "parallel")]
pub fn transform_colors_par(dst: &ColorSpace, src: &ColorSpace, colors: &mut [Rgb]) {
    use rayon::prelude::*;

    trace!(src = src.name(), dst = dst.name(), count = colors.len(), "transform_colors_par");
    colors
        .par_chunks_mut(PAR_CHUNK)
        .for_each(|chunk| transform_colors(dst, src, chunk));
}

/// Converts encoded RGB in `cs` to XYZ.
pub fn rgb_to_xyz(cs: &ColorSpace, rgb: Rgb) -> Xyz {
    let linear = cs.transfer().to_linear_rgb(rgb);
    Xyz::from(cs.rgb_to_xyz_matrix().transform(Vec3::from(linear)))
}

/// Converts XYZ to encoded RGB in `cs`.
pub fn xyz_to_rgb(cs: &ColorSpace, xyz: Xyz) -> Rgb {
    let linear = cs.xyz_to_rgb_matrix().transform(Vec3::from(xyz));
    cs.transfer().from_linear_rgb(Rgb::from(linear))
}

// ============================================================================
// Fail-soft variants
// ============================================================================

/// [`transform_color`], returning `rgb` unchanged if either space is missing.
pub fn transform_color_opt(dst: Option<&ColorSpace>, src: Option<&ColorSpace>, rgb: Rgb) -> Rgb {
    match (dst, src) {
        (Some(dst), Some(src)) => transform_color(dst, src, rgb),
        _ => rgb,
    }
}

/// [`transform_colors`], leaving `colors` unchanged if either space is missing.
pub fn transform_colors_opt(dst: Option<&ColorSpace>, src: Option<&ColorSpace>, colors: &mut [Rgb]) {
    if let (Some(dst), Some(src)) = (dst, src) {
        transform_colors(dst, src, colors);
    }
}

/// [`transform_colors_with_alpha`], leaving `colors` unchanged if either space is missing.
pub fn transform_colors_with_alpha_opt(
    dst: Option<&ColorSpace>,
    src: Option<&ColorSpace>,
    colors: &mut [Rgba],
) {
    if let (Some(dst), Some(src)) = (dst, src) {
        transform_colors_with_alpha(dst, src, colors);
    }
}

/// [`rgb_to_xyz`], returning zero if the space is missing.
pub fn rgb_to_xyz_opt(cs: Option<&ColorSpace>, rgb: Rgb) -> Xyz {
    cs.map_or(Xyz::ZERO, |cs| rgb_to_xyz(cs, rgb))
}

/// [`xyz_to_rgb`], returning zero if the space is missing.
pub fn xyz_to_rgb_opt(cs: Option<&ColorSpace>, xyz: Xyz) -> Rgb {
    cs.map_or(Rgb::ZERO, |cs| xyz_to_rgb(cs, xyz))
}

/// RGB to XYZ matrix, or identity if the space is missing.
pub fn rgb_to_xyz_matrix_opt(cs: Option<&ColorSpace>) -> Mat3 {
    cs.map_or(Mat3::IDENTITY, ColorSpace::rgb_to_xyz_matrix)
}

/// XYZ to RGB matrix, or identity if the space is missing.
pub fn xyz_to_rgb_matrix_opt(cs: Option<&ColorSpace>) -> Mat3 {
    cs.map_or(Mat3::IDENTITY, ColorSpace::xyz_to_rgb_matrix)
}

/// [`rgb_to_rgb_matrix`], or identity if either space is missing.
pub fn rgb_to_rgb_matrix_opt(src: Option<&ColorSpace>, dst: Option<&ColorSpace>) -> Mat3 {
    match (src, dst) {
        (Some(src), Some(dst)) => rgb_to_rgb_matrix(src, dst),
        _ => Mat3::IDENTITY,
    }
}
