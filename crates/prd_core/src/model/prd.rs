//! PRD entity model.
//!
//! # Responsibility
//! - Hold validated state for one Product Requirements Document.
//! - Maintain `updated_at` on every mutation.
//!
//! # Invariants
//! - `id` has shape `PRD-XXXXXXXX` and never changes once stored.
//! - `priority` stays in `[PRIORITY_MIN, PRIORITY_MAX]`.
//! - `completion_percentage` stays in `[0, COMPLETION_MAX]`.
//! - `updated_at >= created_at` and never moves backwards.
//! - `tags` holds no duplicate values (exact, case-sensitive match).

use crate::model::catalog::{PrdCategory, PrdStatus};
use serde::Serialize;
use std::borrow::Borrow;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub const PRIORITY_MIN: i32 = 1;
pub const PRIORITY_MAX: i32 = 4;
pub const DEFAULT_PRIORITY: i32 = 3;
pub const COMPLETION_MAX: i32 = 100;
pub const DEFAULT_VERSION: &str = "1.0.0";

const ID_PREFIX: &str = "PRD-";
const ID_TOKEN_LEN: usize = 8;

/// Error returned when parsing an externally supplied PRD id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrdIdError {
    /// Input does not start with `PRD-`.
    MissingPrefix(String),
    /// Token after the prefix is not 8 uppercase hex characters.
    InvalidToken(String),
}

impl Display for PrdIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrefix(value) => write!(f, "prd id `{value}` must start with `PRD-`"),
            Self::InvalidToken(value) => write!(
                f,
                "prd id `{value}` must end with {ID_TOKEN_LEN} uppercase hex characters"
            ),
        }
    }
}

impl Error for PrdIdError {}

/// Stable identifier of one PRD, e.g. `PRD-3F2A9C01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PrdId(String);

impl PrdId {
    /// Generates a fresh id from the first 8 hex digits of a v4 UUID.
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{ID_PREFIX}{}",
            simple[..ID_TOKEN_LEN].to_ascii_uppercase()
        ))
    }

    /// Parses an id, accepting only the `PRD-XXXXXXXX` shape.
    pub fn parse(value: &str) -> Result<Self, PrdIdError> {
        let token = value
            .strip_prefix(ID_PREFIX)
            .ok_or_else(|| PrdIdError::MissingPrefix(value.to_string()))?;
        let valid = token.len() == ID_TOKEN_LEN
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c));
        if !valid {
            return Err(PrdIdError::InvalidToken(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PrdId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PrdId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PrdId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One Product Requirements Document.
///
/// Only the manager constructs PRDs; outside code mutates them through the
/// setters below, never through fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prd {
    id: PrdId,
    title: String,
    description: String,
    author: String,
    category: PrdCategory,
    status: PrdStatus,
    priority: i32,
    estimated_effort: i32,
    completion_percentage: i32,
    /// Unix epoch milliseconds.
    created_at: i64,
    /// Unix epoch milliseconds. Always `>= created_at`.
    updated_at: i64,
    tags: Vec<String>,
    version: String,
}

impl Prd {
    /// Creates a draft PRD with a freshly generated id and default fields.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        category: PrdCategory,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: PrdId::generate(),
            title: title.into(),
            description: description.into(),
            author: author.into(),
            category,
            status: PrdStatus::Draft,
            priority: DEFAULT_PRIORITY,
            estimated_effort: 0,
            completion_percentage: 0,
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Draws a new id. Only valid before the PRD is stored.
    pub(crate) fn regenerate_id(&mut self) {
        self.id = PrdId::generate();
    }

    pub fn id(&self) -> &PrdId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> PrdCategory {
        self.category
    }

    pub fn status(&self) -> PrdStatus {
        self.status
    }

    pub fn set_status(&mut self, status: PrdStatus) {
        self.status = status;
        self.touch();
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Stores `priority` clamped to `[1, 4]`.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = clamp_priority(priority);
        self.touch();
    }

    pub fn estimated_effort(&self) -> i32 {
        self.estimated_effort
    }

    /// Stores `effort` as given; no lower bound is enforced.
    pub fn set_estimated_effort(&mut self, effort: i32) {
        self.estimated_effort = effort;
        self.touch();
    }

    pub fn completion_percentage(&self) -> i32 {
        self.completion_percentage
    }

    /// Stores `percentage` clamped to `[0, 100]`.
    pub fn set_completion_percentage(&mut self, percentage: i32) {
        self.completion_percentage = percentage.clamp(0, COMPLETION_MAX);
        self.touch();
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Returns a copy of the tags; mutating it does not affect this PRD.
    pub fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// Appends `tag` unless already present.
    ///
    /// Returns whether the tag was inserted. `updated_at` only moves on insert.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.touch();
        true
    }

    /// Removes `tag` if present and returns whether it was found.
    ///
    /// `updated_at` is refreshed even when nothing was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing != tag);
        self.touch();
        self.tags.len() != before
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
        self.touch();
    }

    /// Flags PRDs that look stalled for their current stage.
    pub fn needs_attention(&self) -> bool {
        match self.status {
            PrdStatus::InDevelopment => self.completion_percentage < 50,
            PrdStatus::Testing => self.completion_percentage < 80,
            PrdStatus::Draft => self.priority == PRIORITY_MAX,
            _ => false,
        }
    }

    fn touch(&mut self) {
        self.updated_at = now_epoch_ms().max(self.updated_at);
    }
}

impl Display for Prd {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PRD{{id='{}', title='{}', status={}, priority={}, completion={}%}}",
            self.id,
            self.title,
            self.status.label(),
            self.priority,
            self.completion_percentage
        )
    }
}

/// Clamps a raw priority into the supported `[1, 4]` range.
pub fn clamp_priority(priority: i32) -> i32 {
    priority.clamp(PRIORITY_MIN, PRIORITY_MAX)
}

fn now_epoch_ms() -> i64 {
    // A clock before 1970 collapses to 0; `touch` keeps timestamps monotonic.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Prd, PrdId, PrdIdError};
    use crate::model::catalog::{PrdCategory, PrdStatus};

    fn sample() -> Prd {
        Prd::new("Title", "Body", "Dev Team", PrdCategory::Feature)
    }

    #[test]
    fn generated_ids_round_trip_through_parse() {
        let id = PrdId::generate();
        assert_eq!(id.as_str().len(), 12);
        assert_eq!(PrdId::parse(id.as_str()).unwrap(), id);
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert_eq!(
            PrdId::parse("TASK-12345678").unwrap_err(),
            PrdIdError::MissingPrefix("TASK-12345678".to_string())
        );
        assert!(matches!(
            PrdId::parse("PRD-abcdef12"),
            Err(PrdIdError::InvalidToken(_))
        ));
        assert!(matches!(
            PrdId::parse("PRD-123"),
            Err(PrdIdError::InvalidToken(_))
        ));
    }

    #[test]
    fn remove_tag_refreshes_timestamp_even_when_absent() {
        let mut prd = sample();
        prd.updated_at = prd.created_at;
        prd.created_at -= 10;
        prd.updated_at -= 10;
        let stale = prd.updated_at;

        assert!(!prd.remove_tag("missing"));
        assert!(prd.updated_at > stale);
    }

    #[test]
    fn add_tag_leaves_timestamp_alone_for_duplicates() {
        let mut prd = sample();
        assert!(prd.add_tag("api"));
        prd.created_at -= 10;
        prd.updated_at -= 10;
        let stale = prd.updated_at;

        assert!(!prd.add_tag("api"));
        assert_eq!(prd.updated_at, stale);
        assert!(prd.add_tag("API"));
        assert!(prd.updated_at > stale);
    }

    #[test]
    fn every_setter_refreshes_updated_at() {
        let setters: [(&str, fn(&mut Prd)); 7] = [
            ("title", |prd| prd.set_title("renamed")),
            ("description", |prd| prd.set_description("rewritten")),
            ("status", |prd| prd.set_status(PrdStatus::Approved)),
            ("priority", |prd| prd.set_priority(1)),
            ("estimated_effort", |prd| prd.set_estimated_effort(8)),
            ("completion", |prd| prd.set_completion_percentage(40)),
            ("version", |prd| prd.set_version("2.0.0")),
        ];

        for (field, apply) in setters {
            let mut prd = sample();
            prd.created_at -= 10;
            prd.updated_at -= 10;
            let stale = prd.updated_at;

            apply(&mut prd);
            assert!(prd.updated_at > stale, "{field} setter did not refresh");
        }
    }

    #[test]
    fn touch_never_moves_backwards() {
        let mut prd = sample();
        prd.updated_at = i64::MAX - 1;
        prd.set_title("renamed");
        assert_eq!(prd.updated_at, i64::MAX - 1);
    }

    #[test]
    fn needs_attention_covers_stalled_stages() {
        let mut prd = sample();
        assert!(!prd.needs_attention());

        prd.set_priority(4);
        assert!(prd.needs_attention());

        prd.set_status(PrdStatus::InDevelopment);
        prd.set_completion_percentage(49);
        assert!(prd.needs_attention());
        prd.set_completion_percentage(50);
        assert!(!prd.needs_attention());

        prd.set_status(PrdStatus::Testing);
        assert!(prd.needs_attention());
        prd.set_completion_percentage(80);
        assert!(!prd.needs_attention());
    }
}
