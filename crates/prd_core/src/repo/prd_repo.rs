//! PRD repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store PRDs keyed by id with O(1) lookup.
//! - Preserve creation order for listing.
//!
//! # Invariants
//! - `insert` rejects an id that is already stored.
//! - Stored PRDs are never removed, so index slots stay valid.

use crate::model::prd::{Prd, PrdId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for PRD storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateId(PrdId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "prd already stored: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for keyed PRD storage.
pub trait PrdRepository {
    fn insert(&mut self, prd: Prd) -> RepoResult<PrdId>;
    fn contains(&self, id: &str) -> bool;
    fn get(&self, id: &str) -> Option<&Prd>;
    fn get_mut(&mut self, id: &str) -> Option<&mut Prd>;
    /// All stored PRDs in creation order.
    fn list(&self) -> Vec<&Prd>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local PRD store.
#[derive(Debug, Default)]
pub struct InMemoryPrdRepository {
    prds: Vec<Prd>,
    index: HashMap<PrdId, usize>,
}

impl InMemoryPrdRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrdRepository for InMemoryPrdRepository {
    fn insert(&mut self, prd: Prd) -> RepoResult<PrdId> {
        let id = prd.id().clone();
        if self.index.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }
        self.index.insert(id.clone(), self.prds.len());
        self.prds.push(prd);
        Ok(id)
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn get(&self, id: &str) -> Option<&Prd> {
        self.index.get(id).and_then(|&slot| self.prds.get(slot))
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Prd> {
        let slot = *self.index.get(id)?;
        self.prds.get_mut(slot)
    }

    fn list(&self) -> Vec<&Prd> {
        self.prds.iter().collect()
    }

    fn len(&self) -> usize {
        self.prds.len()
    }
}
