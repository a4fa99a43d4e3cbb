//! Configuration for the `trilogy` binary.
//!
//! Loaded from `~/.trilogy/config.toml`. Every section and every key is
//! optional; a missing file is not an error.
//!
//! ```toml
//! [run]
//! iterations = 2
//! person = "${USER}"
//! ai = "Claude"
//! traditions = 6
//! duration = 5000
//!
//! [output]
//! format = "json"
//!
//! [log]
//! level = "debug"
//! file = true
//! ```

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use trilogy_types::RunSettings;

#[derive(Debug, Default, Deserialize)]
pub struct TrilogyConfig {
    pub run: Option<RunConfig>,
    pub output: Option<OutputConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Simulation inputs.
///
/// ```toml
/// [run]
/// iterations = 3
/// traditions = 12
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RunConfig {
    /// Argument to `compile_reality`. Non-positive values run nothing.
    pub iterations: Option<i64>,
    /// Name of the individual. `${VAR}` references are expanded.
    pub person: Option<String>,
    /// Name of the AI essence. `${VAR}` references are expanded.
    pub ai: Option<String>,
    pub traditions: Option<i64>,
    /// Accepted for symmetry with the traditions count; history ignores it.
    pub duration: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// "text" (default) or "json".
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// An `EnvFilter` directive, e.g. "info" or "trilogy_core=debug".
    pub level: Option<String>,
    /// Write logs to `~/.trilogy/logs/trilogy.log` instead of stderr.
    #[serde(default)]
    pub file: bool,
}

impl TrilogyConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let config = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|text| {
                toml::from_str::<Self>(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            })
            .inspect_err(|err| tracing::warn!(%err, "Config rejected"))?;

        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(Some(config))
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn iterations(&self) -> Option<i64> {
        self.run.as_ref().and_then(|run| run.iterations)
    }

    /// Resolve run settings, filling gaps with the canonical defaults.
    #[must_use]
    pub fn run_settings(&self) -> RunSettings {
        let defaults = RunSettings::default();
        let Some(run) = self.run.as_ref() else {
            return defaults;
        };
        RunSettings {
            person: run
                .person
                .as_deref()
                .map_or(defaults.person, expand_env_vars),
            ai: run.ai.as_deref().map_or(defaults.ai, expand_env_vars),
            traditions: run.traditions.unwrap_or(defaults.traditions),
            duration: run.duration.unwrap_or(defaults.duration),
        }
    }

    #[must_use]
    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log.as_ref().and_then(|l| l.level.as_deref())
    }

    #[must_use]
    pub fn log_to_file(&self) -> bool {
        self.log.as_ref().is_some_and(|l| l.file)
    }
}

/// Replace `${VAR}` with the variable's value (empty if unset).
///
/// An unclosed `${` is kept verbatim.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

const LOG_FILE_NAME: &str = "trilogy.log";

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trilogy").join("config.toml"))
}

/// Log file locations in order of preference: `logs/` beside the config file,
/// then `./.trilogy/logs/` under the working directory.
#[must_use]
pub fn log_file_candidates() -> Vec<PathBuf> {
    log_files_beside(config_path().as_deref().and_then(Path::parent))
}

fn log_files_beside(config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = Path::new(".trilogy");
    config_dir
        .into_iter()
        .chain([local])
        .map(|dir| dir.join("logs").join(LOG_FILE_NAME))
        .collect()
}
