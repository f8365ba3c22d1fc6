//! Simulated backup job
//!
//! Stands in for the real database export until one exists: waits the
//! configured delay, then reports success with a generated file path. No
//! file is written and nothing is exported.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::{config::BackupConfig, error::AppResult, models::backup::BackupReport};

#[derive(Clone)]
pub struct BackupService {
    config: BackupConfig,
}

impl BackupService {
    pub fn new(config: BackupConfig) -> Self {
        Self { config }
    }

    /// Run the simulated backup. Always succeeds after the fixed delay.
    pub async fn run(&self) -> AppResult<BackupReport> {
        let started = std::time::Instant::now();
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        let stamp = Utc::now().format("%Y%m%d_%H%M%S");
        let file = format!(
            "{}/brigada_backup_{}_{}.sql",
            self.config.dir.trim_end_matches('/'),
            stamp,
            Uuid::new_v4().simple()
        );

        tracing::info!("Simulated backup finished: {}", file);

        Ok(BackupReport {
            status: "success".to_string(),
            file,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_success_with_generated_path() {
        let service = BackupService::new(BackupConfig {
            dir: "/tmp/brigada-backups/".to_string(),
            delay_ms: 10,
        });

        let report = service.run().await.unwrap();
        assert_eq!(report.status, "success");
        assert!(!report.file.is_empty());
        assert!(report.file.starts_with("/tmp/brigada-backups/brigada_backup_"));
        assert!(report.file.ends_with(".sql"));
        assert!(report.elapsed_ms >= 10);
    }

    #[tokio::test]
    async fn consecutive_runs_generate_distinct_paths() {
        let service = BackupService::new(BackupConfig {
            dir: "/tmp".to_string(),
            delay_ms: 1,
        });
        let a = service.run().await.unwrap();
        let b = service.run().await.unwrap();
        assert_ne!(a.file, b.file);
    }
}
