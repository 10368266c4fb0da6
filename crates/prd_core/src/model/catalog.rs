//! Closed PRD classification enums and their display metadata.
//!
//! # Responsibility
//! - Define lifecycle status and purpose category for a PRD.
//! - Attach static, cosmetic display metadata to every variant.
//!
//! # Invariants
//! - Metadata tables are indexed by variant declaration order and must stay
//!   in lockstep with `ALL`.
//! - Metadata carries no behavior; filtering and grouping compare variants.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Display metadata for one `PrdStatus` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub label: &'static str,
    /// Hex RGB color, e.g. `#FFC107`.
    pub color: &'static str,
}

/// Display metadata for one `PrdCategory` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub description: &'static str,
}

/// Lifecycle stage of a PRD.
///
/// Not an enforced state machine: any transition is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrdStatus {
    Draft,
    InReview,
    Approved,
    InDevelopment,
    Testing,
    Implemented,
    Archived,
}

const STATUS_META: [StatusMeta; 7] = [
    StatusMeta {
        label: "Draft",
        color: "#FFC107",
    },
    StatusMeta {
        label: "In Review",
        color: "#17A2B8",
    },
    StatusMeta {
        label: "Approved",
        color: "#28A745",
    },
    StatusMeta {
        label: "In Development",
        color: "#6F42C1",
    },
    StatusMeta {
        label: "Testing",
        color: "#FD7E14",
    },
    StatusMeta {
        label: "Implemented",
        color: "#20C997",
    },
    StatusMeta {
        label: "Archived",
        color: "#6C757D",
    },
];

impl PrdStatus {
    /// Every status in declaration order.
    pub const ALL: [PrdStatus; 7] = [
        Self::Draft,
        Self::InReview,
        Self::Approved,
        Self::InDevelopment,
        Self::Testing,
        Self::Implemented,
        Self::Archived,
    ];

    pub fn meta(self) -> &'static StatusMeta {
        &STATUS_META[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn color(self) -> &'static str {
        self.meta().color
    }
}

impl Display for PrdStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Purpose classification of a PRD, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrdCategory {
    Feature,
    Enhancement,
    BugFix,
    NewProduct,
    Maintenance,
}

const CATEGORY_META: [CategoryMeta; 5] = [
    CategoryMeta {
        label: "Feature",
        description: "New functionality or capabilities",
    },
    CategoryMeta {
        label: "Enhancement",
        description: "Improvements to existing features",
    },
    CategoryMeta {
        label: "Bug Fix",
        description: "Fixes for identified issues",
    },
    CategoryMeta {
        label: "New Product",
        description: "Entirely new product development",
    },
    CategoryMeta {
        label: "Maintenance",
        description: "System maintenance and updates",
    },
];

impl PrdCategory {
    /// Every category in declaration order.
    pub const ALL: [PrdCategory; 5] = [
        Self::Feature,
        Self::Enhancement,
        Self::BugFix,
        Self::NewProduct,
        Self::Maintenance,
    ];

    pub fn meta(self) -> &'static CategoryMeta {
        &CATEGORY_META[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn description(self) -> &'static str {
        self.meta().description
    }
}

impl Display for PrdCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
