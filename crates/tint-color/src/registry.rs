//! Named color space registry.
//!
//! Two stores, deliberately separate:
//!
//! - [`Registry`] - the immutable table of built-in spaces, built once and
//!   shared for the process lifetime as `&'static ColorSpace`
//! - [`UserColorSpaces`] - spaces created at runtime, owned by whoever
//!   created them and destroyed by removing them
//!
//! User spaces are never inserted into the built-in table, and a built-in
//! can never be destroyed: [`UserColorSpaces::destroy`] only removes what
//! it owns.
//!
//! # Built-ins
//!
//! Declaration order (also the scan order of
//! [`crate::colorimetry::match_linear_color_space`]):
//!
//! | Name | Primaries | White | Curve |
//! |------|-----------|-------|-------|
//! | `acescg` | AP1 | ACES | linear |
//! | `adobergb` | Adobe RGB | D65 | γ 563/256 |
//! | `g18_ap1` | AP1 | ACES | γ 1.8 |
//! | `g18_rec709` | Rec.709 | D65 | γ 1.8 |
//! | `g22_ap1` | AP1 | ACES | γ 2.2 |
//! | `g22_rec709` | Rec.709 | D65 | γ 2.2 |
//! | `identity` | identity | E | linear |
//! | `lin_adobergb` | Adobe RGB | D65 | linear |
//! | `lin_ap0` | AP0 | ACES | linear |
//! | `lin_ap1` | AP1 | ACES | linear |
//! | `lin_displayp3` | Display P3 | D65 | linear |
//! | `lin_rec709` | Rec.709 | D65 | linear |
//! | `lin_rec2020` | Rec.2020 | D65 | linear |
//! | `lin_srgb` | Rec.709 | D65 | linear |
//! | `srgb_displayp3` | Display P3 | D65 | sRGB |
//! | `srgb_texture` | Rec.709 | D65 | sRGB |
//!
//! Synonyms ([`SYNONYMS`]): `raw` resolves to `identity`, `sRGB`
//! to `srgb_texture`.
//!
//! # Example
//!
//! ```rust
//! use tint_color::Registry;
//!
//! let srgb = Registry::global().get("sRGB").unwrap();
//! assert_eq!(srgb.name(), "srgb_texture");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tint_primaries::{
    ACES_AP0, ACES_AP1, ADOBE_RGB, DISPLAY_P3, IDENTITY, Primaries, REC709, REC2020,
};
use tint_transfer::srgb;
use tracing::debug;

use crate::error::{ColorError, ColorResult};
use crate::space::{ColorSpace, ColorSpaceDescriptor, ColorSpaceM33Descriptor};

/// Name synonyms resolved before lookup, as `(synonym, canonical)`.
pub const SYNONYMS: &[(&str, &str)] = &[
    ("raw", "identity"),
    ("sRGB", "srgb_texture"),
];

/// Synonyms that carry their own description, as `(synonym, description)`.
const SYNONYM_DESCRIPTIONS: &[(&str, &str)] = &[
    ("raw", "Raw color space, no conversion."),
    ("sRGB", "sRGB, a display color space developed by HP and Microsoft."),
];

/// Applies [`SYNONYMS`]; other names are returned unchanged.
pub fn resolve_name(name: &str) -> &str {
    SYNONYMS
        .iter()
        .find(|(syn, _)| *syn == name)
        .map_or(name, |&(_, canonical)| canonical)
}

/// Adobe RGB (1998) exponent.
const ADOBE_GAMMA: f32 = 563.0 / 256.0;

struct Builtin {
    name: &'static str,
    primaries: Primaries,
    gamma: f32,
    linear_bias: f32,
    description: &'static str,
}

const fn builtin(
    name: &'static str,
    primaries: Primaries,
    gamma: f32,
    linear_bias: f32,
    description: &'static str,
) -> Builtin {
    Builtin {
        name,
        primaries,
        gamma,
        linear_bias,
        description,
    }
}

const BUILTINS: &[Builtin] = &[
    builtin("acescg", ACES_AP1, 1.0, 0.0,
        "Academy Color Encoding System (ACEScg), a color space designed for computer graphics."),
    builtin("adobergb", ADOBE_RGB, ADOBE_GAMMA, 0.0,
        "Adobe RGB (1998), a color space developed by Adobe Systems."),
    builtin("g18_ap1", ACES_AP1, 1.8, 0.0,
        "Gamma 1.8, primaries from ACES, white point from ACES."),
    builtin("g18_rec709", REC709, 1.8, 0.0,
        "Gamma 1.8, primaries from Rec. 709, white point from D65."),
    builtin("g22_ap1", ACES_AP1, 2.2, 0.0,
        "Gamma 2.2, primaries from ACES, white point from ACES."),
    builtin("g22_rec709", REC709, 2.2, 0.0,
        "Gamma 2.2, primaries from Rec. 709, white point from D65."),
    builtin("identity", IDENTITY, 1.0, 0.0,
        "Identity color space, no conversion."),
    builtin("lin_adobergb", ADOBE_RGB, 1.0, 0.0,
        "Linear Adobe RGB (1998), a color space developed by Adobe Systems."),
    builtin("lin_ap0", ACES_AP0, 1.0, 0.0,
        "Linear transfer, AP0 primaries, white point from ACES."),
    builtin("lin_ap1", ACES_AP1, 1.0, 0.0,
        "Linear transfer, AP1 primaries, white point from ACES."),
    builtin("lin_displayp3", DISPLAY_P3, 1.0, 0.0,
        "Linear Display P3, a color space using the Display P3 primaries."),
    builtin("lin_rec709", REC709, 1.0, 0.0,
        "Linear Rec. 709, a color space using the Rec. 709 primaries."),
    builtin("lin_rec2020", REC2020, 1.0, 0.0,
        "Linear Rec. 2020, a color space using the Rec. 2020 primaries."),
    builtin("lin_srgb", REC709, 1.0, 0.0,
        "Linear sRGB, a color space using the sRGB primaries."),
    builtin("srgb_displayp3", DISPLAY_P3, srgb::GAMMA, srgb::LINEAR_BIAS,
        "sRGB Display P3, a color space using the Display P3 primaries."),
    builtin("srgb_texture", REC709, srgb::GAMMA, srgb::LINEAR_BIAS,
        "sRGB Texture, a color space using the sRGB primaries."),
];

/// The built-in color space table.
///
/// # Thread Safety
///
/// Built once inside a `OnceLock`, immutable afterwards. Every space is
/// fully derived before the table becomes visible.
pub struct Registry {
    spaces: Vec<ColorSpace>,
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        let spaces: Vec<ColorSpace> = BUILTINS
            .iter()
            .map(|b| {
                ColorSpace::new(&ColorSpaceDescriptor::new(
                    b.name,
                    b.primaries,
                    b.gamma,
                    b.linear_bias,
                ))
                .with_description(b.description)
            })
            .collect();
        let by_name = BUILTINS
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name, i))
            .collect();

        debug!(count = spaces.len(), "built-in color spaces initialized");
        Self { spaces, by_name }
    }

    /// Returns the global registry, building it on first use.
    pub fn global() -> &'static Registry {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE.get_or_init(Registry::new)
    }

    /// Builds the global registry now instead of on first lookup.
    ///
    /// Idempotent.
    pub fn init() {
        Self::global();
    }

    /// Looks up a built-in by name, after synonym resolution.
    ///
    /// Exact and case-sensitive: `"sRGB"` is a synonym, `"SRGB"` is unknown.
    pub fn get(&'static self, name: &str) -> Option<&'static ColorSpace> {
        self.by_name
            .get(resolve_name(name))
            .map(|&i| &self.spaces[i])
    }

    /// Like [`Registry::get`], but unknown names are an error.
    pub fn require(&'static self, name: &str) -> ColorResult<&'static ColorSpace> {
        self.get(name).ok_or_else(|| ColorError::UnknownColorSpace {
            name: name.to_string(),
        })
    }

    /// True if `name` (or its synonym target) is a built-in.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(resolve_name(name))
    }

    /// Canonical built-in names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.spaces.iter().map(|cs| cs.name())
    }

    /// Built-in spaces in declaration order.
    pub fn iter(&'static self) -> impl Iterator<Item = &'static ColorSpace> {
        self.spaces.iter()
    }

    /// Number of built-in spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false; the table is never empty.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Description of a built-in.
    ///
    /// `raw` and `sRGB` have descriptions of their own; other synonyms
    /// share their target's.
    pub fn description(&self, name: &str) -> Option<&'static str> {
        if let Some(&(_, text)) = SYNONYM_DESCRIPTIONS.iter().find(|(syn, _)| *syn == name) {
            return Some(text);
        }
        self.by_name
            .get(resolve_name(name))
            .and_then(|&i| self.spaces[i].description())
    }
}

/// Color spaces created at runtime.
///
/// Owns its spaces; a space is destroyed by [`UserColorSpaces::destroy`],
/// which hands the owned value back. Names are unique across this store
/// and the built-in table.
#[derive(Debug, Default)]
pub struct UserColorSpaces {
    spaces: Vec<ColorSpace>,
    aliases: HashMap<String, String>,
}

impl UserColorSpaces {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a space from primaries.
    ///
    /// # Errors
    ///
    /// [`ColorError::DuplicateName`] if the name is taken by a built-in, a
    /// synonym, or an existing user space.
    pub fn create(&mut self, desc: &ColorSpaceDescriptor) -> ColorResult<&ColorSpace> {
        self.check_name(&desc.name)?;
        self.insert(ColorSpace::new(desc))
    }

    /// Creates a space from an explicit matrix.
    ///
    /// # Errors
    ///
    /// [`ColorError::DuplicateName`] as for [`UserColorSpaces::create`].
    pub fn create_m33(&mut self, desc: &ColorSpaceM33Descriptor) -> ColorResult<&ColorSpace> {
        self.check_name(&desc.name)?;
        self.insert(ColorSpace::from_m33(desc))
    }

    fn check_name(&self, name: &str) -> ColorResult<()> {
        if Registry::global().contains(name)
            || self.get(name).is_some()
            || self.aliases.contains_key(name)
        {
            return Err(ColorError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, cs: ColorSpace) -> ColorResult<&ColorSpace> {
        debug!(
            name = cs.name(),
            origin = ?cs.origin(),
            normalized = cs.is_normalized(),
            "user color space created"
        );
        self.spaces.push(cs);
        let i = self.spaces.len() - 1;
        Ok(&self.spaces[i])
    }

    /// Registers `alias` as another name for `target`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::DuplicateName`] if `alias` is already a name
    /// - [`ColorError::UnknownColorSpace`] if `target` resolves to nothing
    pub fn add_alias(&mut self, alias: &str, target: &str) -> ColorResult<()> {
        self.check_name(alias)?;
        if self.lookup(target).is_none() {
            return Err(ColorError::UnknownColorSpace {
                name: target.to_string(),
            });
        }
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Looks up a user space by exact name.
    pub fn get(&self, name: &str) -> Option<&ColorSpace> {
        self.spaces.iter().find(|cs| cs.name() == name)
    }

    /// Looks up a user space, then a built-in.
    pub fn lookup(&self, name: &str) -> Option<&ColorSpace> {
        self.get(name).or_else(|| Registry::global().get(name))
    }

    /// Like [`UserColorSpaces::lookup`], after applying aliases.
    pub fn resolve(&self, name: &str) -> Option<&ColorSpace> {
        let name = self.aliases.get(name).map_or(name, String::as_str);
        self.lookup(name)
    }

    /// Removes and returns a user space.
    ///
    /// Built-in names are a no-op returning `None`.
    pub fn destroy(&mut self, name: &str) -> Option<ColorSpace> {
        let i = self.spaces.iter().position(|cs| cs.name() == name)?;
        self.aliases.retain(|_, target| target != name);
        debug!(name, "user color space destroyed");
        Some(self.spaces.remove(i))
    }

    /// User space names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spaces.iter().map(|cs| cs.name())
    }

    /// Configured aliases as `(alias, target)`.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    /// Number of user spaces.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// True if no user spaces exist.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
