use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::IgnoreRules;

pub const CONFIG_FILE_NAME: &str = ".libscanrc.json";

pub const DEFAULT_BUILD_FILE_NAME: &str = "CMakeLists.txt";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_build_file_name")]
    pub build_file_name: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_build_file_name() -> String {
    DEFAULT_BUILD_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_file_name: default_build_file_name(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the build file name is not a plain file name or if
    /// any glob pattern in `ignores` is invalid.
    ///
    /// Entries without wildcards (* or ?) are literal directory paths, so
    /// names like `deps/[vendored]` are valid without escaping.
    pub fn validate(&self) -> Result<()> {
        validate_build_file_name(&self.build_file_name)?;
        self.ignore_rules()?;
        Ok(())
    }

    /// Compile `ignores` into literal paths and glob patterns.
    pub fn ignore_rules(&self) -> Result<IgnoreRules> {
        IgnoreRules::new(&self.ignores)
    }
}

/// A build file name must name a file directly inside each directory.
pub fn validate_build_file_name(name: &str) -> Result<()> {
    let is_plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if !is_plain {
        anyhow::bail!("Invalid build file name: \"{}\"", name);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Look for the config file in `start_dir` and its ancestors, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` if using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
