//! User color space configuration.
//!
//! Loads user-defined color spaces and aliases from YAML or JSON and builds a
//! [`UserColorSpaces`] store from them.
//!
//! # Format
//!
//! ```yaml
//! version: 1
//! aliases:
//!   linear: lin_rec709
//! colorspaces:
//!   - name: my_p3
//!     redPrimary: {x: 0.68, y: 0.32}
//!     greenPrimary: {x: 0.265, y: 0.69}
//!     bluePrimary: {x: 0.15, y: 0.06}
//!     whitePoint: {x: 0.3127, y: 0.329}
//!     gamma: 2.4
//!     linearBias: 0.055
//!   - name: my_matrix
//!     rgbToXYZ: [0.4124, 0.3576, 0.1805, 0.2126, 0.7152, 0.0722, 0.0193, 0.1192, 0.9505]
//!     gamma: 1.0
//! ```
//!
//! Each entry is either a primaries descriptor or a matrix descriptor,
//! distinguished by which fields are present. `linearBias` defaults to 0.
//! Unknown fields are rejected, so an entry mixing primaries with
//! `rgbToXYZ` fails to parse instead of silently dropping one of them.
//!
//! # Example
//!
//! ```rust
//! use tint_color::Config;
//!
//! let yaml = r#"
//! version: 1
//! aliases:
//!   working: acescg
//! "#;
//! let spaces = Config::from_yaml_str(yaml)?.build()?;
//! assert_eq!(spaces.resolve("working").map(|cs| cs.name()), Some("acescg"));
//! # Ok::<(), tint_color::ColorError>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ColorError, ColorResult};
use crate::registry::UserColorSpaces;
use crate::space::{ColorSpaceDescriptor, ColorSpaceM33Descriptor};

/// Config format version this crate reads.
pub const CONFIG_VERSION: u32 = 1;

/// One color space entry in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpaceEntry {
    /// Defined by primaries and white point.
    Primaries(ColorSpaceDescriptor),
    /// Defined by an RGB to XYZ matrix.
    Matrix(ColorSpaceM33Descriptor),
}

impl ColorSpaceEntry {
    /// Entry name.
    pub fn name(&self) -> &str {
        match self {
            Self::Primaries(d) => &d.name,
            Self::Matrix(d) => &d.name,
        }
    }
}

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format version, must be [`CONFIG_VERSION`].
    pub version: u32,
    /// Extra names mapped to existing spaces.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    /// User color spaces, created in order.
    #[serde(default)]
    pub colorspaces: Vec<ColorSpaceEntry>,
}

impl Config {
    /// Empty config at the current version.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            ..Self::default()
        }
    }

    /// Loads a config file. `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading color space config");

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parses a YAML config.
    pub fn from_yaml_str(yaml: &str) -> ColorResult<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.checked()
    }

    /// Parses a JSON config.
    pub fn from_json_str(json: &str) -> ColorResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.checked()
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> ColorResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn checked(self) -> ColorResult<Self> {
        if self.version != CONFIG_VERSION {
            return Err(ColorError::UnsupportedConfigVersion {
                version: self.version,
            });
        }
        Ok(self)
    }

    /// Creates every configured space, then every alias.
    ///
    /// Aliases may target built-ins or spaces from this config.
    ///
    /// # Errors
    ///
    /// - [`ColorError::UnsupportedConfigVersion`] for a version other than 1
    /// - [`ColorError::DuplicateName`] for a name that is already taken
    /// - [`ColorError::UnknownColorSpace`] for an alias with no target
    pub fn build(&self) -> ColorResult<UserColorSpaces> {
        if self.version != CONFIG_VERSION {
            return Err(ColorError::UnsupportedConfigVersion {
                version: self.version,
            });
        }

        let mut spaces = UserColorSpaces::new();
        for entry in &self.colorspaces {
            let cs = match entry {
                ColorSpaceEntry::Primaries(d) => spaces.create(d)?,
                ColorSpaceEntry::Matrix(d) => spaces.create_m33(d)?,
            };
            if let Err(e) = cs.validate() {
                warn!(name = cs.name(), error = %e, "configured color space is degenerate");
            }
        }

        // Sorted for a deterministic error on bad configs
        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            spaces.add_alias(alias, target)?;
            debug!(alias, target, "alias added");
        }

        debug!(
            spaces = spaces.len(),
            aliases = self.aliases.len(),
            "color space config built"
        );
        Ok(spaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::Rgb;
    use tint_primaries::DISPLAY_P3;

    const YAML: &str = r#"
version: 1
aliases:
  linear: lin_rec709
  p3: my_p3
colorspaces:
  - name: my_p3
    redPrimary: {x: 0.68, y: 0.32}
    greenPrimary: {x: 0.265, y: 0.69}
    bluePrimary: {x: 0.15, y: 0.06}
    whitePoint: {x: 0.3127, y: 0.329}
    gamma: 2.4
    linearBias: 0.055
  - name: my_matrix
    rgbToXYZ: [0.4124, 0.3576, 0.1805, 0.2126, 0.7152, 0.0722, 0.0193, 0.1192, 0.9505]
    gamma: 1.0
"#;

    #[test]
    fn test_parse_yaml() {
        let config = Config::from_yaml_str(YAML).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.colorspaces.len(), 2);
        assert!(matches!(config.colorspaces[0], ColorSpaceEntry::Primaries(_)));
        assert!(matches!(config.colorspaces[1], ColorSpaceEntry::Matrix(_)));
        assert_eq!(config.colorspaces[1].name(), "my_matrix");
        if let ColorSpaceEntry::Matrix(d) = &config.colorspaces[1] {
            assert_eq!(d.linear_bias, 0.0);
        }
    }

    #[test]
    fn test_build() {
        let spaces = Config::from_yaml_str(YAML).unwrap().build().unwrap();
        assert_eq!(spaces.names().collect::<Vec<_>>(), ["my_p3", "my_matrix"]);

        let p3 = spaces.resolve("p3").unwrap();
        assert_eq!(p3.name(), "my_p3");
        assert!(p3.primaries().approx_eq(&DISPLAY_P3, 1e-6));

        assert_eq!(spaces.resolve("linear").map(|cs| cs.name()), Some("lin_rec709"));
        assert!(spaces.get("linear").is_none());

        let m = spaces.get("my_matrix").unwrap();
        assert!(m.is_normalized());
        let xyz = crate::transform::rgb_to_xyz(m, Rgb::ONE);
        assert!((xyz.y - 1.0).abs() < 1e-3, "Y = {}", xyz.y);
    }

    #[test]
    fn test_json() {
        let json = r#"{
            "version": 1,
            "colorspaces": [{
                "name": "half_ap1",
                "redPrimary": {"x": 0.713, "y": 0.293},
                "greenPrimary": {"x": 0.165, "y": 0.830},
                "bluePrimary": {"x": 0.128, "y": 0.044},
                "whitePoint": {"x": 0.32168, "y": 0.33767},
                "gamma": 1.0
            }]
        }"#;
        let spaces = Config::from_json_str(json).unwrap().build().unwrap();
        assert_eq!(spaces.len(), 1);
        assert!(spaces.aliases().next().is_none());
    }

    #[test]
    fn test_unsupported_version() {
        let err = Config::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedConfigVersion { version: 2 }));

        let config = Config {
            version: 0,
            ..Config::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_unknown_alias_target() {
        let yaml = "version: 1\naliases:\n  foo: does_not_exist\n";
        let err = Config::from_yaml_str(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, ColorError::UnknownColorSpace { ref name } if name == "does_not_exist"));
    }

    #[test]
    fn test_duplicate_builtin_name() {
        let yaml = r#"
version: 1
colorspaces:
  - name: acescg
    rgbToXYZ: [1, 0, 0, 0, 1, 0, 0, 0, 1]
    gamma: 1.0
"#;
        let err = Config::from_yaml_str(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, ColorError::DuplicateName { .. }));
    }

    #[test]
    fn test_mixed_entry_rejected() {
        let yaml = r#"
version: 1
colorspaces:
  - name: both
    redPrimary: {x: 0.64, y: 0.33}
    greenPrimary: {x: 0.30, y: 0.60}
    bluePrimary: {x: 0.15, y: 0.06}
    whitePoint: {x: 0.3127, y: 0.329}
    rgbToXYZ: [1, 0, 0, 0, 1, 0, 0, 0, 1]
    gamma: 1.0
"#;
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ColorError::Yaml(_)), "{err}");

        // Misspelled optional field
        let typo = r#"{"version": 1, "colorspaces": [{"name": "m",
            "rgbToXYZ": [1, 0, 0, 0, 1, 0, 0, 0, 1], "gamma": 1.0, "linearbias": 0.1}]}"#;
        assert!(matches!(Config::from_json_str(typo), Err(ColorError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("spaces.yaml");
        std::fs::write(&yaml_path, YAML).unwrap();
        assert_eq!(Config::from_file(&yaml_path).unwrap().colorspaces.len(), 2);

        let json_path = dir.path().join("spaces.JSON");
        std::fs::write(&json_path, r#"{"version": 1}"#).unwrap();
        assert!(Config::from_file(&json_path).unwrap().colorspaces.is_empty());

        let missing = Config::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ColorError::Io(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::from_yaml_str(YAML).unwrap();
        let text = config.to_yaml_string().unwrap();
        assert_eq!(Config::from_yaml_str(&text).unwrap(), config);
    }
}
