// certchecker - Expiry status of TLS certificates on disk, served over HTTP
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use certchecker::Args;
use certchecker::api::ApiServer;
use certchecker::config::CheckerConfig;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    // Handle --config-example (generate config example and exit)
    if let Some(config_path) = &args.config_example {
        CheckerConfig::create_example(config_path)?;
        println!("✓ Example configuration saved to: {}", config_path.display());
        return Ok(());
    }

    let config = args.load_config()?;
    info!("Starting certchecker v{}", env!("CARGO_PKG_VERSION"));

    let server = ApiServer::new(config)?;
    server.run().await?;

    Ok(())
}
