//! Teacher activity analytics: deduplication, per-teacher totals, daily
//! trends and per-teacher queries over an immutable activity snapshot.

pub mod analytics;
pub mod config;
pub mod dedup;
pub mod error;
pub mod import;
pub mod models;
pub mod report;
pub mod seed;
pub mod snapshot;
pub mod teacher;

pub use analytics::{daily_stats, totals_by_teacher};
pub use dedup::{dedupe, DedupPolicy};
pub use error::DashboardError;
pub use models::{ActivityRecord, ActivityType, DailyStats, TeacherDetail, TeacherFilter, TeacherTotals};
pub use snapshot::ActivitySnapshot;
pub use teacher::query_teacher;
