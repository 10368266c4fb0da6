//! Core domain logic for the PRD desk.
//! This crate is the single source of truth for PRD invariants.

pub mod config;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{DashboardConfig, LoggingConfig};
pub use fixture::load_demo_data;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::{CategoryMeta, PrdCategory, PrdStatus, StatusMeta};
pub use model::prd::{Prd, PrdId, PrdIdError};
pub use repo::prd_repo::{InMemoryPrdRepository, PrdRepository, RepoError, RepoResult};
pub use service::prd_manager::{ManagerError, ManagerResult, PrdManager};
pub use service::stats::{CompletionStats, PrdStatistics};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
