use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::context::MAX_TIMEOUT;
use crate::error::{Result, SnippetsError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOG_FILTER: &str = "warn";

const TIMEOUT_ENV: &str = "SPANNER_SNIPPETS_TIMEOUT_SECS";
const LOG_ENV: &str = "SPANNER_SNIPPETS_LOG";
const PROJECT_CONFIG: &str = ".spanner-snippets.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Deadline for the whole invocation, in seconds.
    pub timeout_secs: Option<u64>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::read_optional(Path::new(PROJECT_CONFIG))?;
        Self::merge(global, project).with_env_overrides()
    }

    /// Loads `path` instead of the global and project files. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SnippetsError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::read_optional(path)?.with_env_overrides()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    fn load_global() -> Result<Self> {
        let config_dir = directories::ProjectDirs::from("", "", "spanner-snippets").map_or_else(
            || PathBuf::from("~/.config/spanner-snippets"),
            |d| d.config_dir().to_path_buf(),
        );

        Self::read_optional(&config_dir.join("config.toml"))
    }

    fn read_optional(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SnippetsError::Config(e.to_string()))?;
        config.validate()
    }

    fn merge(global: Self, project: Self) -> Self {
        Self {
            timeout_secs: project.timeout_secs.or(global.timeout_secs),
            log_filter: project.log_filter.or(global.log_filter),
        }
    }

    fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                SnippetsError::Config(format!(
                    "{TIMEOUT_ENV}={raw:?} is not a number of seconds: {e}"
                ))
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(filter) = lookup(LOG_ENV) {
            self.log_filter = Some(filter);
        }
        self.validate()
    }

    fn validate(self) -> Result<Self> {
        match self.timeout_secs {
            Some(0) => Err(SnippetsError::Config(
                "timeout_secs must be greater than zero".to_string(),
            )),
            Some(secs) if secs > MAX_TIMEOUT.as_secs() => Err(SnippetsError::Config(format!(
                "timeout_secs must be at most {}",
                MAX_TIMEOUT.as_secs()
            ))),
            _ => Ok(self),
        }
    }
}
