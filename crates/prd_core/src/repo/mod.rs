//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the keyed storage contract the manager builds on.
//! - Keep ordering and lookup details out of use-case code.
//!
//! # Invariants
//! - Ids are unique within one repository; inserts never overwrite.
//! - Listing order is creation order.

pub mod prd_repo;
