//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/drills/drills.toml`
//! 3. Local config: `<dir>/.drills.toml` (dir from `-C`, default cwd)
//! 4. Environment variables: `DRILLS_*` prefix

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY};

/// Name of the local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".drills.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "DRILLS";

/// Unified configuration for drills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Capacity of the stack built by the stack demo
    pub stack_capacity: usize,
    /// Capacity of the queue built by the queue demo
    pub queue_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub stack_capacity: Option<usize>,
    pub queue_capacity: Option<usize>,
}

/// Get the XDG config directory for drills.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "drills").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("drills.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            stack_capacity: overlay.stack_capacity.unwrap_or(self.stack_capacity),
            queue_capacity: overlay.queue_capacity.unwrap_or(self.queue_capacity),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.drills.toml`
    pub fn load(local_dir: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, Environment::with_prefix(ENV_PREFIX))?;

        current.validate()?;
        Ok(current)
    }

    /// Apply `DRILLS_*` environment variables as explicit overrides.
    ///
    /// Unset variables leave the value alone; unparsable ones are errors.
    fn apply_env_overrides(mut settings: Self, source: Environment) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                source
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "stack_capacity")? {
            settings.stack_capacity = val;
        }
        if let Some(val) = env_value(&config, "queue_capacity")? {
            settings.queue_capacity = val;
        }

        Ok(settings)
    }

    /// Reject capacities no container could work with.
    pub fn validate(&self) -> ApplicationResult<()> {
        for (name, value) in [
            ("stack_capacity", self.stack_capacity),
            ("queue_capacity", self.queue_capacity),
        ] {
            if value == 0 {
                return Err(ApplicationError::Config {
                    message: format!("{name} must be at least 1"),
                });
            }
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write the template to `path`, creating parent directories.
    /// Refuses to replace an existing file unless `force` is set.
    pub fn write_template(path: &Path, force: bool) -> ApplicationResult<()> {
        if path.exists() && !force {
            return Err(ApplicationError::Config {
                message: format!("{} already exists (use --force to overwrite)", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
        }
        fs::write(path, Self::template()).with_path_context("write config", path)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# drills configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/drills/drills.toml
#   Local:  ./.drills.toml (or the directory given with -C)
#   Env:    DRILLS_STACK_CAPACITY, DRILLS_QUEUE_CAPACITY

# Fixed capacity of the array-backed stack used by the demos
# stack_capacity = 100

# Fixed capacity of the circular queue used by the demos
# queue_capacity = 100
"#
        .to_string()
    }
}

fn env_value(config: &Config, key: &str) -> ApplicationResult<Option<usize>> {
    match config.get::<usize>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
