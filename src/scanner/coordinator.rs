// Scan Coordinator - Concurrent read and classification of certificate files

use crate::certificates::{CertificateRecord, read_certificate};
use chrono::{TimeDelta, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info, warn};

/// A certificate file that could not be reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one scan
///
/// Failed files are absent from `records`; they are kept in `failures` for
/// diagnostics only. Record order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub records: Vec<CertificateRecord>,
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    /// Number of files the scan was given
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

type UnitOutcome = std::result::Result<CertificateRecord, ScanFailure>;

/// Fans certificate files out across concurrent workers
#[derive(Debug, Clone)]
pub struct ScanCoordinator {
    warning: TimeDelta,
    max_concurrent: usize,
}

impl ScanCoordinator {
    /// Create a coordinator with one worker per path and no concurrency cap
    pub fn new(warning: TimeDelta) -> Self {
        Self {
            warning,
            max_concurrent: 0,
        }
    }

    /// Limit the number of files read at the same time (0 = unbounded)
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// Read and classify every path concurrently.
    ///
    /// Never fails: a file that cannot be read, decoded or parsed is logged
    /// and reported in `failures`. Returns only after every worker has
    /// finished.
    pub async fn scan(&self, paths: Vec<PathBuf>) -> ScanResult {
        let start = Instant::now();
        let total = paths.len();

        // One slot per path so deposits never wait for capacity
        let (tx, mut rx) = mpsc::channel::<UnitOutcome>(total.max(1));

        let semaphore = (self.max_concurrent > 0)
            .then(|| Arc::new(Semaphore::new(self.max_concurrent)));

        let mut tasks = Vec::with_capacity(total);
        for path in paths {
            let tx = tx.clone();
            let semaphore = semaphore.clone();
            let warning = self.warning;
            let task_path = path.clone();

            let task = tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome = Self::scan_file(task_path, warning).await;
                // Capacity equals the number of senders, so this never waits
                let _ = tx.send(outcome).await;
            });

            tasks.push((path, task));
        }
        drop(tx);

        let mut failures = Vec::new();
        for (path, task) in tasks {
            if let Err(e) = task.await {
                error!("Worker for {} aborted: {}", path.display(), e);
                failures.push(ScanFailure {
                    path,
                    reason: format!("worker aborted: {}", e),
                });
            }
        }

        // All senders are gone, so the channel is closed once drained
        let mut records = Vec::with_capacity(total);
        while let Some(outcome) = rx.recv().await {
            match outcome {
                Ok(record) => records.push(record),
                Err(failure) => failures.push(failure),
            }
        }

        info!(
            "Scanned {} certificate file(s) in {:.2}s: {} reported, {} failed",
            total,
            start.elapsed().as_secs_f64(),
            records.len(),
            failures.len()
        );

        ScanResult { records, failures }
    }

    async fn scan_file(path: PathBuf, warning: TimeDelta) -> UnitOutcome {
        match read_certificate(&path).await {
            Ok(cert) => {
                let record = CertificateRecord::classify(cert, Utc::now(), warning);
                debug!("{}: {} (expires {})", path.display(), record.status, record.not_after);
                Ok(record)
            }
            Err(e) => {
                if e.is_per_file() {
                    warn!("Error getting certificate status for {}: {}", path.display(), e);
                } else {
                    error!("Error getting certificate status for {}: {}", path.display(), e);
                }
                Err(ScanFailure {
                    path,
                    reason: e.to_string(),
                })
            }
        }
    }
}
