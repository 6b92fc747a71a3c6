use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::{
    ActivityCounts, ActivityRecord, DailyStats, GradeBreakdown, SchoolSummary, TeacherTotals,
};

pub fn count_activities<'a, I>(records: I) -> ActivityCounts
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut counts = ActivityCounts::default();
    for record in records {
        counts.record(record.activity_type);
    }
    counts
}

/// Totals in the order each teacher first appears. The display name is taken
/// from that first record. Callers pass deduplicated records.
pub fn totals_by_teacher(records: &[ActivityRecord]) -> Vec<TeacherTotals> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<TeacherTotals> = Vec::new();

    for record in records {
        let slot = *index.entry(&record.teacher_id).or_insert_with(|| {
            totals.push(TeacherTotals {
                teacher_id: record.teacher_id.clone(),
                teacher_name: record.teacher_name.clone(),
                counts: ActivityCounts::default(),
            });
            totals.len() - 1
        });
        totals[slot].counts.record(record.activity_type);
    }

    totals
}

/// Per-day counts across all teachers, oldest day first.
pub fn daily_stats(records: &[ActivityRecord]) -> Vec<DailyStats> {
    let mut days: BTreeMap<NaiveDate, ActivityCounts> = BTreeMap::new();

    for record in records {
        days.entry(record.date())
            .or_default()
            .record(record.activity_type);
    }

    days.into_iter()
        .map(|(date, counts)| DailyStats { date, counts })
        .collect()
}

pub fn school_summary(records: &[ActivityRecord]) -> SchoolSummary {
    let mut counts = ActivityCounts::default();
    for totals in totals_by_teacher(records) {
        counts.add(&totals.counts);
    }

    let active_days = records
        .iter()
        .map(ActivityRecord::date)
        .collect::<HashSet<_>>()
        .len();

    let teachers = records
        .iter()
        .map(|record| record.teacher_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    SchoolSummary {
        teachers,
        active_days,
        counts,
    }
}

pub fn grade_breakdown(records: &[ActivityRecord]) -> Vec<GradeBreakdown> {
    let mut grades: BTreeMap<u32, ActivityCounts> = BTreeMap::new();

    for record in records {
        grades.entry(record.grade)
            .or_default()
            .record(record.activity_type);
    }

    grades.into_iter()
        .map(|(grade, counts)| GradeBreakdown { grade, counts })
        .collect()
}

pub fn grades(records: &[ActivityRecord]) -> Vec<u32> {
    records
        .iter()
        .map(|record| record.grade)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn subjects(records: &[ActivityRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|&record| seen.insert(record.subject.as_str()))
        .map(|record| record.subject.clone())
        .collect()
}

/// Newest first; records sharing a timestamp keep their input order.
pub fn recent_activities(records: &[ActivityRecord], limit: usize) -> Vec<ActivityRecord> {
    let mut recent = records.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}
