//! Optional `folio.toml` configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Built-in default record source, matching the deployed resource name.
pub const DEFAULT_SOURCE: &str = "details.json";

/// Project-level configuration, all fields defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Record source: an `http(s)://` URL or a filesystem path.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Load `folio.toml` from `root`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns [`FolioError::ConfigParse`] when the file exists but cannot be
/// read or parsed.
pub fn load_config(root: &Path) -> Result<ProjectConfig, FolioError> {
    let path = root.join("folio.toml");
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let raw = std::fs::read_to_string(&path).map_err(|err| FolioError::ConfigParse {
        path: path.display().to_string(),
        source: Box::new(err),
    })?;
    toml::from_str(&raw).map_err(|err| FolioError::ConfigParse {
        path: path.display().to_string(),
        source: Box::new(err),
    })
}

/// Resolve the record source. Precedence: flag > `FOLIO_SOURCE` env > config.
#[must_use]
pub fn resolve_source(flag: Option<&str>, env: Option<&str>, config: &ProjectConfig) -> String {
    if let Some(flag) = flag {
        return flag.to_string();
    }
    if let Some(env) = env {
        if !env.is_empty() {
            return env.to_string();
        }
    }
    config.source.clone()
}
