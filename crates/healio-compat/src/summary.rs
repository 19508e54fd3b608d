//! Per-category counts for the visible slice of the compatibility table.

use serde::{Deserialize, Serialize};

use crate::records::{Compatibility, CompatibilityRecord};

/// Counts per compatibility category, driving the stat cards above the
/// table. Always recomputed from the currently visible records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilitySummary {
    pub compatible: usize,
    pub caution: usize,
    pub incompatible: usize,
}

impl CompatibilitySummary {
    /// Total number of records summarized.
    pub fn total(&self) -> usize {
        self.compatible + self.caution + self.incompatible
    }
}

/// Count the records in each category.
pub fn summarize(records: &[CompatibilityRecord]) -> CompatibilitySummary {
    let mut summary = CompatibilitySummary::default();
    for record in records {
        match record.compatibility {
            Compatibility::Compatible => summary.compatible += 1,
            Compatibility::Caution => summary.caution += 1,
            Compatibility::Incompatible => summary.incompatible += 1,
        }
    }
    summary
}
