// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::config::CheckerConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// certchecker - Report the expiry status of TLS certificates on disk
///
/// Every option can also be given through the environment variable shown in
/// its help text. Values from the command line and environment override the
/// configuration file, which overrides the built-in defaults.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "certchecker")]
pub struct Args {
    /// The address to listen on [default: 0.0.0.0:10000]
    #[arg(
        long = "listen-addr",
        alias = "listenAddr",
        value_name = "ADDR",
        env = "LISTENADDR"
    )]
    pub listen_addr: Option<String>,

    /// The files to check for certificates, as a glob pattern [default: ./**/cert.pem]
    #[arg(long = "watch", value_name = "GLOB", env = "WATCH")]
    pub watch: Option<String>,

    /// How long until expiry before a certificate enters 'warning' state [default: 7d]
    #[arg(
        long = "warning-duration",
        alias = "warningDuration",
        value_name = "DURATION",
        env = "WARNINGDURATION",
        value_parser = humantime::parse_duration
    )]
    pub warning_duration: Option<Duration>,

    /// Maximum certificate files read concurrently per request, 0 for no limit [default: 64]
    #[arg(
        long = "max-concurrent-reads",
        value_name = "NUM",
        env = "MAXCONCURRENTREADS"
    )]
    pub max_concurrent_reads: Option<usize>,

    /// Configuration file (TOML format)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,
}

impl Args {
    /// Apply command line and environment overrides on top of `config`
    pub fn apply_to(&self, mut config: CheckerConfig) -> CheckerConfig {
        if let Some(listen_addr) = &self.listen_addr {
            config.listen_addr = listen_addr.clone();
        }
        if let Some(watch) = &self.watch {
            config.watch = watch.clone();
        }
        if let Some(warning_duration) = self.warning_duration {
            config.warning_duration = warning_duration;
        }
        if let Some(max_concurrent_reads) = self.max_concurrent_reads {
            config.max_concurrent_reads = max_concurrent_reads;
        }
        config
    }

    /// Build the effective configuration: defaults, then file, then overrides
    pub fn load_config(&self) -> anyhow::Result<CheckerConfig> {
        let base = match &self.config {
            Some(path) => CheckerConfig::from_file(path)?,
            None => CheckerConfig::default(),
        };
        Ok(self.apply_to(base))
    }
}
