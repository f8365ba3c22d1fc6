//! Simulated backup job types

use serde::Serialize;
use utoipa::ToSchema;

/// Result of a (simulated) backup run. No file is actually written.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BackupReport {
    /// Always "success"
    pub status: String,
    /// Generated path the real job would have produced
    pub file: String,
    pub elapsed_ms: u64,
}
