use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::EmblemName;

pub const DEFAULT_BASE_DIR: &str = "public";
pub const DEFAULT_TARGET_HEIGHT: u32 = 64;

/// Resize run configuration, suitable for JSON config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Directory holding `{name}_fullres.png` sources; outputs land next to them
    pub base_dir: PathBuf,
    /// Emblems to process, in order
    pub names: Vec<EmblemName>,
    /// Output height in pixels
    pub target_height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            names: EmblemName::defaults(),
            target_height: DEFAULT_TARGET_HEIGHT,
        }
    }
}

impl ResizeConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let text = fs::read_to_string(path)?;
        let config: ResizeConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Names are validated on construction; only the height needs checking here.
    pub fn validate(&self) -> Result<()> {
        if self.target_height == 0 {
            return Err(Error::ZeroSize {
                arg: "target_height",
                size: self.target_height,
            });
        }
        Ok(())
    }
}
