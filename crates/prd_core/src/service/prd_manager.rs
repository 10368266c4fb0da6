//! PRD manager use-case service.
//!
//! # Responsibility
//! - Own the PRD collection and expose create/read/update entry points.
//! - Provide filters, search and aggregate statistics for presentation.
//!
//! # Invariants
//! - PRDs are only created here, so every stored id is unique.
//! - Read APIs return owned snapshots or shared borrows; callers cannot
//!   mutate stored PRDs except through `update` and the `update_*` helpers.
//! - Missing ids surface as `ManagerError::NotFound`, never as a panic.
//! - Filter results follow creation order.

use crate::model::catalog::{PrdCategory, PrdStatus};
use crate::model::prd::{clamp_priority, Prd, PrdId};
use crate::repo::prd_repo::{InMemoryPrdRepository, PrdRepository, RepoError};
use crate::service::stats::{self, CompletionStats, PrdStatistics};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Error for PRD manager use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// No PRD is stored under the given id.
    NotFound(String),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "prd not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for ManagerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Keyed PRD collection with filter/search/statistics operations.
pub struct PrdManager<R: PrdRepository = InMemoryPrdRepository> {
    repo: R,
}

impl PrdManager<InMemoryPrdRepository> {
    /// Creates an empty manager backed by process-local storage.
    pub fn in_memory() -> Self {
        Self::new(InMemoryPrdRepository::new())
    }
}

impl Default for PrdManager<InMemoryPrdRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: PrdRepository> PrdManager<R> {
    /// Creates a manager over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Creates a draft PRD and returns its id.
    ///
    /// # Errors
    /// - Returns `ManagerError::Repo` only if the repository refuses the
    ///   insert; the in-memory store never does because ids are redrawn
    ///   until unused.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        category: PrdCategory,
    ) -> ManagerResult<PrdId> {
        let mut prd = Prd::new(title, description, author, category);
        while self.repo.contains(prd.id().as_str()) {
            prd.regenerate_id();
        }
        let id = self.repo.insert(prd)?;
        info!(
            "event=prd_created module=manager status=ok id={} category={:?}",
            id, category
        );
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&Prd> {
        self.repo.get(id)
    }

    /// Owned snapshot of every PRD in creation order.
    pub fn get_all(&self) -> Vec<Prd> {
        self.repo.list().into_iter().cloned().collect()
    }

    pub fn get_by_status(&self, status: PrdStatus) -> Vec<Prd> {
        self.filter(|prd| prd.status() == status)
    }

    pub fn get_by_category(&self, category: PrdCategory) -> Vec<Prd> {
        self.filter(|prd| prd.category() == category)
    }

    /// Filters by priority after clamping `priority` like `Prd::set_priority`.
    pub fn get_by_priority(&self, priority: i32) -> Vec<Prd> {
        let priority = clamp_priority(priority);
        self.filter(|prd| prd.priority() == priority)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// An empty term matches every PRD.
    pub fn search(&self, term: &str) -> Vec<Prd> {
        let term = term.to_lowercase();
        self.filter(|prd| {
            prd.title().to_lowercase().contains(&term)
                || prd.description().to_lowercase().contains(&term)
        })
    }

    pub fn needing_attention(&self) -> Vec<Prd> {
        self.filter(Prd::needs_attention)
    }

    /// Up to `limit` PRDs, most recently updated first.
    ///
    /// Equal timestamps fall back to later creation first.
    pub fn recent(&self, limit: usize) -> Vec<Prd> {
        let mut ordered: Vec<(usize, &Prd)> = self.repo.list().into_iter().enumerate().collect();
        ordered.sort_by(|(left_seq, left), (right_seq, right)| {
            right
                .updated_at()
                .cmp(&left.updated_at())
                .then(right_seq.cmp(left_seq))
        });
        ordered
            .into_iter()
            .take(limit)
            .map(|(_, prd)| prd.clone())
            .collect()
    }

    /// Runs `apply` against one stored PRD and returns its result.
    ///
    /// # Errors
    /// - `ManagerError::NotFound` when `id` is not stored; nothing changes.
    pub fn update<T>(&mut self, id: &str, apply: impl FnOnce(&mut Prd) -> T) -> ManagerResult<T> {
        match self.repo.get_mut(id) {
            Some(prd) => Ok(apply(prd)),
            None => {
                warn!(
                    "event=prd_update_missing module=manager status=error id={}",
                    id
                );
                Err(ManagerError::NotFound(id.to_string()))
            }
        }
    }

    /// Sets the status of one PRD.
    ///
    /// # Errors
    /// - `ManagerError::NotFound` when `id` is not stored; nothing changes.
    pub fn update_status(&mut self, id: &str, status: PrdStatus) -> ManagerResult<()> {
        self.update(id, |prd| prd.set_status(status))?;
        info!(
            "event=prd_status_updated module=manager status=ok id={} new_status={}",
            id,
            status.label()
        );
        Ok(())
    }

    /// Sets the completion percentage of one PRD (clamped to `[0, 100]`).
    pub fn update_completion(&mut self, id: &str, percentage: i32) -> ManagerResult<()> {
        self.update(id, |prd| prd.set_completion_percentage(percentage))
    }

    pub fn statistics(&self) -> PrdStatistics {
        stats::summarize(self.repo.list())
    }

    pub fn completion_stats(&self) -> CompletionStats {
        stats::completion_stats(self.repo.list())
    }

    /// Mean completion per status, covering every status in declaration order.
    pub fn status_progress(&self) -> Vec<(PrdStatus, f64)> {
        PrdStatus::ALL
            .iter()
            .map(|&status| {
                let (sum, count) = self
                    .repo
                    .list()
                    .into_iter()
                    .filter(|prd| prd.status() == status)
                    .fold((0_i64, 0_usize), |(sum, count), prd| {
                        (sum + i64::from(prd.completion_percentage()), count + 1)
                    });
                (status, stats::mean(sum, count))
            })
            .collect()
    }

    /// Pretty-printed JSON array of every PRD in creation order.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.repo.list())
    }

    fn filter(&self, predicate: impl Fn(&Prd) -> bool) -> Vec<Prd> {
        self.repo
            .list()
            .into_iter()
            .filter(|prd| predicate(prd))
            .cloned()
            .collect()
    }
}
