//! Brigada Management System
//!
//! REST API server for a volunteer fire-brigade administration: vehicles,
//! inventory, protective equipment maintenance, tasks, personnel and
//! warehouse records, plus the simulated telemetry and backup endpoints the
//! dashboard consumes.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
