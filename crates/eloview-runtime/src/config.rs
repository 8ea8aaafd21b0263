use crate::{Error, Result};
use eloview_engine::Tolerances;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ELOVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.eloview (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ELOVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("eloview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".eloview"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store prefix baseviews are written under
    pub output_dir: String,
    /// Source tag announced with every completed baseview
    pub baseview_type: String,
    pub truncation_tolerance_secs: f64,
    pub offset_warning_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        let tolerances = Tolerances::default();
        Self {
            output_dir: "baseviews".to_string(),
            baseview_type: "elo".to_string(),
            truncation_tolerance_secs: tolerances.truncation_secs,
            offset_warning_secs: tolerances.offset_warning_secs,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = Self::default_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(explicit_path: Option<&str>) -> Result<PathBuf> {
        Ok(resolve_workspace_path(explicit_path)?.join("config.toml"))
    }

    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            truncation_secs: self.truncation_tolerance_secs,
            offset_warning_secs: self.offset_warning_secs,
        }
    }
}
