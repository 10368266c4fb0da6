//! Aggregate views over a PRD collection.
//!
//! # Invariants
//! - Empty input yields zero counts and `0.0` averages, never NaN.
//! - `average_completion` is rounded to 2 decimal places.

use crate::model::catalog::PrdStatus;
use crate::model::prd::Prd;
use serde::Serialize;
use std::collections::BTreeMap;

/// Collection-wide counts keyed by display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrdStatistics {
    pub total_prds: usize,
    /// Keyed by `PrdStatus::label()`. Statuses with no PRDs are absent.
    pub by_status: BTreeMap<String, usize>,
    /// Keyed by `PrdCategory::label()`. Categories with no PRDs are absent.
    pub by_category: BTreeMap<String, usize>,
    pub by_author: BTreeMap<String, usize>,
    pub by_tag: BTreeMap<String, usize>,
    pub average_completion: f64,
}

impl PrdStatistics {
    /// Count for one status; `0` when no PRD carries it.
    pub fn status_count(&self, status: PrdStatus) -> usize {
        self.by_status.get(status.label()).copied().unwrap_or(0)
    }
}

/// Min/max/mean of completion percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionStats {
    pub min: i32,
    pub max: i32,
    pub average: f64,
}

pub(crate) fn summarize<'a>(prds: impl IntoIterator<Item = &'a Prd>) -> PrdStatistics {
    let mut stats = PrdStatistics {
        total_prds: 0,
        by_status: BTreeMap::new(),
        by_category: BTreeMap::new(),
        by_author: BTreeMap::new(),
        by_tag: BTreeMap::new(),
        average_completion: 0.0,
    };
    let mut completion_sum = 0_i64;

    for prd in prds {
        stats.total_prds += 1;
        completion_sum += i64::from(prd.completion_percentage());
        *stats
            .by_status
            .entry(prd.status().label().to_string())
            .or_insert(0) += 1;
        *stats
            .by_category
            .entry(prd.category().label().to_string())
            .or_insert(0) += 1;
        *stats.by_author.entry(prd.author().to_string()).or_insert(0) += 1;
        for tag in prd.tags() {
            *stats.by_tag.entry(tag).or_insert(0) += 1;
        }
    }

    stats.average_completion = round2(mean(completion_sum, stats.total_prds));
    stats
}

pub(crate) fn completion_stats<'a>(prds: impl IntoIterator<Item = &'a Prd>) -> CompletionStats {
    let mut count = 0_usize;
    let mut sum = 0_i64;
    let mut min = i32::MAX;
    let mut max = i32::MIN;

    for prd in prds {
        let value = prd.completion_percentage();
        count += 1;
        sum += i64::from(value);
        min = min.min(value);
        max = max.max(value);
    }

    if count == 0 {
        return CompletionStats {
            min: 0,
            max: 0,
            average: 0.0,
        };
    }
    CompletionStats {
        min,
        max,
        average: mean(sum, count),
    }
}

/// Mean of `sum / count`, `0.0` when `count` is zero.
pub(crate) fn mean(sum: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
