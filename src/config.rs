// Checker Configuration - Process-wide settings, built once at startup

use crate::Result;
use crate::error::CheckerError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Default listen address
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:10000";

/// Default watch pattern: every `cert.pem` below the working directory
pub const DEFAULT_WATCH: &str = "./**/cert.pem";

/// Default warning window
pub const DEFAULT_WARNING_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Default cap on concurrent certificate reads
pub const DEFAULT_MAX_CONCURRENT_READS: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,

    /// Glob pattern of certificate files to check
    pub watch: String,

    /// How long before expiry a certificate enters the WARNING state
    #[serde(with = "humantime_duration")]
    pub warning_duration: Duration,

    /// Maximum number of files read concurrently per request (0 = unbounded)
    pub max_concurrent_reads: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            watch: DEFAULT_WATCH.to_string(),
            warning_duration: DEFAULT_WARNING_DURATION,
            max_concurrent_reads: DEFAULT_MAX_CONCURRENT_READS,
        }
    }
}

impl CheckerConfig {
    /// Create config from file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CheckerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Create example config file
    pub fn create_example(path: &Path) -> anyhow::Result<()> {
        let config = Self::default();
        let toml = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| CheckerError::Config {
            message: format!("invalid listen address {:?}: {}", self.listen_addr, e),
        })
    }

    /// Warning window as a signed delta for timestamp arithmetic
    pub fn warning_delta(&self) -> Result<TimeDelta> {
        TimeDelta::from_std(self.warning_duration).map_err(|_| CheckerError::Config {
            message: format!(
                "warning duration {} is out of range",
                humantime::format_duration(self.warning_duration)
            ),
        })
    }

    /// Check the settings before the server starts
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        self.warning_delta()?;
        if self.watch.trim().is_empty() {
            return Err(CheckerError::Config {
                message: "watch pattern must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Serialize durations as humantime strings ("7days", "168h", "30m")
mod humantime_duration {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&humantime::format_duration(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(de::Error::custom)
    }
}
