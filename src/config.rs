//! Configuration for the gate.
//!
//! Loaded from .stylegate.yml in the current directory or
//! ~/.config/stylegate/stylegate.yml, with CLI overrides applied on top.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::invocation::ArgumentTemplate;
use crate::runner::{default_jobs, RunnerConfig};
use crate::task::TaskConfig;

/// Default checker invocation: rustfmt in check-only mode.
pub const DEFAULT_CHECKER: &str = "rustfmt";

/// Default base arguments for the checker.
pub fn default_args() -> Vec<String> {
    vec!["--check".to_string()]
}

fn default_timeout_secs() -> u64 {
    300
}

/// Gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateConfig {
    /// Checker program to invoke.
    pub checker: String,

    /// Base argument tokens, applied before any file token.
    pub args: Vec<String>,

    /// Maximum checker processes in flight simultaneously.
    pub jobs: usize,

    /// Wall-clock timeout for a whole batch, in seconds.
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Command suggested to fix violations (e.g. the checker without
    /// its check-only flag).
    #[serde(rename = "fix-command")]
    pub fix_command: Option<String>,

    /// Working directory for checker processes.
    #[serde(rename = "working-dir")]
    pub working_dir: PathBuf,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            checker: DEFAULT_CHECKER.to_string(),
            args: default_args(),
            jobs: default_jobs(),
            timeout_secs: default_timeout_secs(),
            fix_command: Some(DEFAULT_CHECKER.to_string()),
            working_dir: PathBuf::from("."),
        }
    }
}

impl GateConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .stylegate.yml in current directory
    /// 3. ~/.config/stylegate/stylegate.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_config = PathBuf::from(".stylegate.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .stylegate.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .stylegate.yml: {}", e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("stylegate").join("stylegate.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.checker.trim().is_empty() {
            eyre::bail!("checker must not be empty");
        }
        if self.jobs == 0 {
            eyre::bail!("jobs must be > 0");
        }
        if self.timeout_secs == 0 {
            eyre::bail!("timeout-secs must be > 0");
        }
        Ok(())
    }

    /// Task configuration derived from this gate config.
    pub fn task_config(&self) -> TaskConfig {
        TaskConfig::new(&self.checker)
            .template(ArgumentTemplate::new(self.args.clone()))
            .working_dir(&self.working_dir)
    }

    /// Runner configuration derived from this gate config.
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig::default()
            .jobs(self.jobs)
            .timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.checker, "rustfmt");
        assert_eq!(config.args, vec!["--check".to_string()]);
        assert!(config.jobs >= 1);
        assert_eq!(config.timeout_secs, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gate.yml");
        fs::write(
            &path,
            "checker: fmtcheck\nargs: [\"--dry-run\", \"--diff\"]\njobs: 2\ntimeout-secs: 60\nfix-command: fmtcheck --fix\n",
        )
        .unwrap();

        let config = GateConfig::load(Some(&path)).unwrap();
        assert_eq!(config.checker, "fmtcheck");
        assert_eq!(config.args, vec!["--dry-run".to_string(), "--diff".to_string()]);
        assert_eq!(config.jobs, 2);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.fix_command.as_deref(), Some("fmtcheck --fix"));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let path = PathBuf::from("/nonexistent/gate.yml");
        assert!(GateConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gate.yml");
        fs::write(&path, "jobs: 3\n").unwrap();

        let config = GateConfig::load(Some(&path)).unwrap();
        assert_eq!(config.jobs, 3);
        assert_eq!(config.checker, "rustfmt");
        assert_eq!(config.timeout_secs, 300);
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let config = GateConfig {
            jobs: 0,
            ..GateConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = GateConfig {
            timeout_secs: 0,
            ..GateConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_checker() {
        let config = GateConfig {
            checker: "  ".to_string(),
            ..GateConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_task_config_conversion() {
        let config = GateConfig::default();
        let task = config.task_config();
        assert_eq!(task.program(), Path::new("rustfmt"));
        assert_eq!(task.argument_template().tokens(), ["--check"]);
    }

    #[test]
    fn test_runner_config_conversion() {
        let config = GateConfig {
            jobs: 5,
            timeout_secs: 10,
            ..GateConfig::default()
        };
        let runner = config.runner_config();
        assert_eq!(runner.max_concurrent, 5);
        assert_eq!(runner.batch_timeout, Duration::from_secs(10));
    }
}
