//! Report configuration.
//!
//! Configuration is resolved once at process startup and passed into [`crate::run`]. The
//! reporter itself never reads environment variables, which keeps it deterministic under test.

use crate::{PathsError, PathsResult};
use std::str::FromStr;

/// How derived subdirectory paths are joined onto their base folder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorStyle {
    /// The host platform's native path join.
    #[default]
    Native,
    /// Plain concatenation with a backslash, whatever the platform.
    Legacy,
}

impl FromStr for SeparatorStyle {
    type Err = PathsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "legacy" => Ok(Self::Legacy),
            _ => Err(PathsError::InvalidSeparatorStyle(s.to_string())),
        }
    }
}

/// Report configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportConfig {
    separator: SeparatorStyle,
}

impl ReportConfig {
    pub fn new(separator: SeparatorStyle) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> SeparatorStyle {
        self.separator
    }
}

/// Parse the separator style from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`SeparatorStyle::Native`].
pub fn separator_style_from_env_value(value: Option<String>) -> PathsResult<SeparatorStyle> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<SeparatorStyle>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
