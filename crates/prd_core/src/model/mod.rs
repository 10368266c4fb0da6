//! Domain model for requirements documents.
//!
//! # Responsibility
//! - Define the PRD entity and its closed classification enums.
//!
//! # Invariants
//! - Every PRD is identified by a stable `PrdId`.
//! - There is no delete; PRDs live for the lifetime of their manager.

pub mod catalog;
pub mod prd;
