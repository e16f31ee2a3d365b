//! Shared types used across the crate: `EmblemName` and `Dimensions`.
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Emblem tiers processed when no names are configured, in output order.
pub const DEFAULT_EMBLEMS: [&str; 5] = ["bronze", "silver", "gold", "diamond", "legend"];

/// Suffix appended to a name to locate its full-resolution source.
pub const FULLRES_SUFFIX: &str = "_fullres";

/// A validated emblem identifier. Maps to exactly one input and one output path.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmblemName(String);

impl EmblemName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
            || name.contains('\0');
        if invalid {
            return Err(Error::InvalidName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{dir}/{name}_fullres.png`
    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}{}.png", self.0, FULLRES_SUFFIX))
    }

    /// `{dir}/{name}.png`
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output_file_name())
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.png", self.0)
    }

    pub fn defaults() -> Vec<EmblemName> {
        DEFAULT_EMBLEMS
            .iter()
            .map(|name| EmblemName(name.to_string()))
            .collect()
    }
}

impl TryFrom<String> for EmblemName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        EmblemName::new(value)
    }
}

impl From<EmblemName> for String {
    fn from(name: EmblemName) -> Self {
        name.0
    }
}

impl fmt::Display for EmblemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
