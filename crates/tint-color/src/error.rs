//! Error types for color space operations.
//!
//! Wraps the colorimetric errors from `tint-core` and adds the failure
//! modes of the registry and configuration layers. The transform functions
//! themselves never fail; see the crate docs for their sentinel behavior.

use thiserror::Error;

/// Color space error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Colorimetric failure from a checked operation.
    #[error(transparent)]
    Core(#[from] tint_core::Error),

    /// No color space is registered under this name.
    #[error("unknown color space: {name}")]
    UnknownColorSpace {
        /// Requested name.
        name: String,
    },

    /// A color space with this name already exists.
    #[error("color space already exists: {name}")]
    DuplicateName {
        /// Conflicting name.
        name: String,
    },

    /// Config file declares a version this crate cannot read.
    #[error("unsupported config version: {version}")]
    UnsupportedConfigVersion {
        /// Declared version.
        version: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let e: ColorError = tint_core::Error::NonFiniteMatrix.into();
        assert_eq!(e.to_string(), tint_core::Error::NonFiniteMatrix.to_string());
    }

    #[test]
    fn test_display() {
        let e = ColorError::UnknownColorSpace {
            name: "nope".into(),
        };
        assert_eq!(e.to_string(), "unknown color space: nope");
    }

    #[test]
    fn test_every_variant_has_a_source() {
        // Each variant maps to a failure some operation can produce
        let origin = |e: &ColorError| match e {
            ColorError::Core(_) => "checked colorimetry",
            ColorError::UnknownColorSpace { .. } => "alias target",
            ColorError::DuplicateName { .. } => "user space name",
            ColorError::UnsupportedConfigVersion { .. } => "config version",
            ColorError::Io(_) => "config file",
            ColorError::Yaml(_) => "yaml config",
            ColorError::Json(_) => "json config",
        };
        let e = ColorError::DuplicateName { name: "acescg".into() };
        assert_eq!(origin(&e), "user space name");
    }
}
