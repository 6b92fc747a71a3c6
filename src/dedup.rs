use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::models::{ActivityRecord, ActivityType};

/// What to do when two records share `(teacher_id, activity_type, created_at)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    #[default]
    KeepFirst,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub first_position: usize,
    pub position: usize,
}

type DedupKey<'a> = (&'a str, ActivityType, NaiveDateTime);

fn key(record: &ActivityRecord) -> DedupKey<'_> {
    (&record.teacher_id, record.activity_type, record.created_at)
}

pub fn dedupe(records: &[ActivityRecord]) -> Vec<ActivityRecord> {
    let mut seen: HashSet<DedupKey<'_>> = HashSet::with_capacity(records.len());
    let kept: Vec<ActivityRecord> = records
        .iter()
        .filter(|&record| seen.insert(key(record)))
        .cloned()
        .collect();

    if kept.len() != records.len() {
        debug!(dropped = records.len() - kept.len(), "dropped duplicate activities");
    }
    kept
}

pub fn dedupe_with(records: &[ActivityRecord], policy: DedupPolicy) -> Result<Vec<ActivityRecord>> {
    if policy == DedupPolicy::Reject {
        if let Some(duplicate) = find_duplicates(records).into_iter().next() {
            let record = &records[duplicate.position];
            return Err(DashboardError::DuplicateActivity {
                teacher_id: record.teacher_id.clone(),
                activity_type: record.activity_type.to_string(),
                created_at: record.created_at.to_string(),
                first_position: duplicate.first_position,
                position: duplicate.position,
            });
        }
    }
    Ok(dedupe(records))
}

/// Every record `dedupe` would drop, paired with the record it repeats.
pub fn find_duplicates(records: &[ActivityRecord]) -> Vec<Duplicate> {
    let mut first_seen: HashMap<DedupKey<'_>, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (position, record) in records.iter().enumerate() {
        match first_seen.entry(key(record)) {
            Entry::Occupied(entry) => duplicates.push(Duplicate {
                first_position: *entry.get(),
                position,
            }),
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn activity(teacher_id: &str, activity_type: ActivityType, created_at: &str) -> ActivityRecord {
        ActivityRecord {
            teacher_id: teacher_id.to_string(),
            teacher_name: "Vikas Nair".to_string(),
            grade: 10,
            subject: "Social Studies".to_string(),
            activity_type,
            created_at: parse_timestamp(created_at).unwrap(),
        }
    }

    #[test]
    fn keeps_first_occurrence_in_input_order() {
        let records = vec![
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T1", ActivityType::LessonPlan, "2026-02-11T19:15:55"),
        ];

        let kept = dedupe(&records);
        assert_eq!(kept, vec![records[0].clone(), records[2].clone()]);
    }

    #[test]
    fn first_occurrence_wins_even_when_other_fields_differ() {
        let mut later = activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41");
        later.grade = 9;
        let records = vec![activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"), later];

        let kept = dedupe(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].grade, 10);
    }

    #[test]
    fn distinct_types_at_same_second_are_not_duplicates() {
        let records = vec![
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T1", ActivityType::QuestionPaper, "2026-02-12T19:07:41"),
            activity("T2", ActivityType::Quiz, "2026-02-12T19:07:41"),
        ];
        assert_eq!(dedupe(&records).len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedupe(&[]).is_empty());
        assert!(find_duplicates(&[]).is_empty());
    }

    #[test]
    fn dedupe_is_idempotent() {
        let records = vec![
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T2", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T2", ActivityType::Quiz, "2026-02-12T19:07:41"),
        ];
        let once = dedupe(&records);
        assert_eq!(dedupe(&once), once);
    }

    #[test]
    fn find_duplicates_reports_positions() {
        let records = vec![
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T2", ActivityType::Quiz, "2026-02-13T10:00:00"),
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
        ];
        assert_eq!(
            find_duplicates(&records),
            vec![Duplicate {
                first_position: 0,
                position: 2
            }]
        );
    }

    #[test]
    fn reject_policy_fails_on_collision() {
        let records = vec![
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
            activity("T1", ActivityType::Quiz, "2026-02-12T19:07:41"),
        ];

        match dedupe_with(&records, DedupPolicy::Reject) {
            Err(DashboardError::DuplicateActivity {
                first_position,
                position,
                ..
            }) => {
                assert_eq!(first_position, 0);
                assert_eq!(position, 1);
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }

        assert_eq!(dedupe_with(&records, DedupPolicy::KeepFirst).unwrap().len(), 1);
    }
}
