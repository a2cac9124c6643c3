use std::{fs, io, path::Path};

use clap::ValueEnum;
use mathbridge::{MathmlEncoding, SpacingControl};
use serde::Deserialize;

/// The full option set of the converter. A TOML config file supplies
/// defaults; command-line flags override individual fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Print the standalone LaTeX document instead of MathML.
    pub purified_tex: bool,
    /// Enable the texvc compatibility macros.
    pub texvc_compatible_commands: bool,
    pub spacing: Spacing,
    /// Write MathML 1.x font attributes instead of `mathvariant`.
    pub mathml_version_1_fonts: bool,
    /// Keep the output inside the Basic Multilingual Plane.
    pub disallow_plane_1: bool,
    pub mathml_encoding: Encoding,
    pub other_encoding: OtherEncoding,
    /// Pretty-print the XML output.
    pub indented: bool,
    /// Allow `\unichar` (from the `ucs` package) in purified TeX.
    pub use_ucs_package: bool,
}

#[derive(Debug, Default, Clone, Copy, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    Strict,
    #[default]
    Moderate,
    Relaxed,
}

impl From<Spacing> for SpacingControl {
    fn from(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Strict => SpacingControl::Strict,
            Spacing::Moderate => SpacingControl::Moderate,
            Spacing::Relaxed => SpacingControl::Relaxed,
        }
    }
}

/// Encoding of MathML characters in the printed XML.
#[derive(Debug, Default, Clone, Copy, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Long,
    Short,
    #[default]
    Numeric,
    Raw,
}

impl From<Encoding> for MathmlEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Long => MathmlEncoding::Long,
            Encoding::Short => MathmlEncoding::Short,
            Encoding::Numeric => MathmlEncoding::Numeric,
            Encoding::Raw => MathmlEncoding::Raw,
        }
    }
}

/// Encoding of characters outside MathML's entity lists.
#[derive(Debug, Default, Clone, Copy, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OtherEncoding {
    #[default]
    Numeric,
    Raw,
}

/// Error type for configuration loading operations.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error when reading the file.
    Io(io::Error),
    /// TOML parsing error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "TOML parsing error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok(config)
}

#[inline]
fn parse_config(s: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}
