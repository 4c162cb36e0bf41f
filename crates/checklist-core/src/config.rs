use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Chat front-ends cap autocomplete lists at this many entries.
pub const DEFAULT_MAX_CHOICES: usize = 25;
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Ledger directory, relative to the root.
    #[serde(default = "default_ledger_dir")]
    pub ledger_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_choices")]
    pub max_choices: usize,
}

fn default_version() -> u32 {
    1
}

fn default_ledger_dir() -> String {
    paths::DEFAULT_LEDGER_DIR.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_choices() -> usize {
    DEFAULT_MAX_CHOICES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            ledger_dir: default_ledger_dir(),
            page_size: default_page_size(),
            max_choices: default_max_choices(),
        }
    }
}

impl Config {
    /// Load `.checklist/config.yaml`, falling back to defaults when absent.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn ledger_dir(&self, root: &Path) -> PathBuf {
        paths::ledger_dir(root, &self.ledger_dir)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.ledger_dir.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "ledger_dir must not be empty".to_string(),
            });
        } else if Path::new(&self.ledger_dir)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "ledger_dir '{}' points outside the project root",
                    self.ledger_dir
                ),
            });
        }

        if self.page_size == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "page_size must be at least 1".to_string(),
            });
        } else if self.page_size > DEFAULT_MAX_CHOICES {
            // Chat embeds hold 25 fields; larger pages get truncated there.
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "page_size {} exceeds {} and may not render in chat embeds",
                    self.page_size, DEFAULT_MAX_CHOICES
                ),
            });
        }

        if self.max_choices == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "max_choices must be at least 1".to_string(),
            });
        } else if self.max_choices > DEFAULT_MAX_CHOICES {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "max_choices {} exceeds the autocomplete limit of {}",
                    self.max_choices, DEFAULT_MAX_CHOICES
                ),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
