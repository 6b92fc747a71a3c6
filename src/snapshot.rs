use std::sync::Arc;

use tracing::info;

use crate::analytics;
use crate::dedup::{dedupe, dedupe_with, DedupPolicy};
use crate::error::Result;
use crate::models::{ActivityRecord, DailyStats, SchoolSummary, TeacherDetail, TeacherFilter, TeacherTotals};
use crate::seed;
use crate::teacher;

/// Read-only set of source records. Every query recomputes from the raw
/// records, so a clone is as good as the original and replacing the data
/// means building a new snapshot.
#[derive(Debug, Clone)]
pub struct ActivitySnapshot {
    records: Arc<[ActivityRecord]>,
}

impl ActivitySnapshot {
    pub fn new(records: Vec<ActivityRecord>, policy: DedupPolicy) -> Result<Self> {
        let distinct = dedupe_with(&records, policy)?.len();
        info!(
            records = records.len(),
            distinct,
            policy = ?policy,
            "activity snapshot ready"
        );
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn seeded() -> Result<Self> {
        Self::new(seed::activities()?, DedupPolicy::KeepFirst)
    }

    pub fn raw(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn deduplicated(&self) -> Vec<ActivityRecord> {
        dedupe(&self.records)
    }

    pub fn teacher_totals(&self) -> Vec<TeacherTotals> {
        analytics::totals_by_teacher(&self.deduplicated())
    }

    pub fn daily_stats(&self) -> Vec<DailyStats> {
        analytics::daily_stats(&self.deduplicated())
    }

    pub fn school_summary(&self) -> SchoolSummary {
        analytics::school_summary(&self.deduplicated())
    }

    pub fn query_teacher(&self, teacher_id: &str, filter: &TeacherFilter) -> Option<TeacherDetail> {
        teacher::query_teacher(&self.deduplicated(), teacher_id, filter)
    }
}
