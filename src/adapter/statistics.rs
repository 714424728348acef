//! Result shape of the statistics use case.

use crate::data::BasicStats;
use serde::{Deserialize, Serialize};

/// Summary of a filtered score list.
///
/// `mean`, `min` and `max` are all `None` when no scores survived filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Number of scores after nulls were dropped.
    pub count: usize,
}

impl StatisticsReport {
    /// The defined "no data" result.
    pub fn no_data() -> Self {
        Self {
            mean: None,
            min: None,
            max: None,
            count: 0,
        }
    }

    /// Build a report from computed statistics over `count` scores.
    pub fn from_stats(stats: BasicStats, count: usize) -> Self {
        Self {
            mean: Some(stats.mean),
            min: Some(stats.min),
            max: Some(stats.max),
            count,
        }
    }

    /// Whether the report carries statistics.
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}
