//! RGB and RGBA color values.
//!
//! An [`Rgb`] carries no intrinsic color space; it is three named floats that
//! get their meaning from the color space passed alongside them. [`Rgba`]
//! adds an alpha channel that no transform in this workspace ever modifies,
//! and does not say whether alpha is straight or premultiplied.
//!
//! # Memory Layout
//!
//! Both types are `#[repr(C)]` and [`Pod`], so slices of them can be viewed as
//! flat `[f32; 3]` / `[f32; 4]` arrays by the batched SIMD paths with
//! `bytemuck::cast_slice_mut`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// An RGB triplet.
///
/// # Example
///
/// ```rust
/// use tint_core::Rgb;
///
/// let gray = Rgb::splat(0.18);
/// assert_eq!(gray[1], 0.18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Black.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// RGB (1, 1, 1), which maps to the white point of any color space.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates an RGB value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB value with all channels equal.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Applies `f` to each channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Largest channel magnitude.
    #[inline]
    pub fn max_abs(&self) -> f32 {
        self.r.abs().max(self.g.abs()).max(self.b.abs())
    }

    /// Attaches an alpha value.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(v: Rgb) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Rgb index out of range: {}", i),
        }
    }
}

impl IndexMut<usize> for Rgb {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Rgb index out of range: {}", i),
        }
    }
}

/// An RGB triplet with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha, passed through untouched by every transform
    pub a: f32,
}

impl Rgba {
    /// Creates an RGBA value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Converts to `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color part without alpha.
    #[inline]
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Replaces the color part, keeping alpha.
    #[inline]
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.r = rgb.r;
        self.g = rgb.g;
        self.b = rgb.b;
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(v: [f32; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(v: Rgba) -> Self {
        v.to_array()
    }
}
