use crate::analytics::{count_activities, daily_stats, grade_breakdown};
use crate::error::{DashboardError, Result};
use crate::models::{ActivityRecord, DailyStats, GradeBreakdown, TeacherDetail, TeacherFilter};

/// Looks up one teacher in deduplicated records. `teacher_id` is an opaque
/// key here; route-level format checks go through [`validate_teacher_id`].
///
/// Returns `None` when the teacher has no records at all. A grade filter
/// that matches nothing still returns the teacher, with empty activities.
pub fn query_teacher(
    records: &[ActivityRecord],
    teacher_id: &str,
    filter: &TeacherFilter,
) -> Option<TeacherDetail> {
    let mut matched = records
        .iter()
        .filter(|record| record.teacher_id == teacher_id)
        .peekable();

    let teacher_name = matched.peek()?.teacher_name.clone();
    let activities: Vec<ActivityRecord> = matched
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    let counts = count_activities(&activities);

    Some(TeacherDetail {
        teacher_id: teacher_id.to_string(),
        teacher_name,
        counts,
        activities,
    })
}

pub fn validate_teacher_id(teacher_id: &str) -> Result<()> {
    let bytes = teacher_id.as_bytes();
    let valid = bytes.len() == 4 && bytes[0] == b'T' && bytes[1..].iter().all(u8::is_ascii_digit);
    if valid {
        Ok(())
    } else {
        Err(DashboardError::InvalidTeacherId(teacher_id.to_string()))
    }
}

impl TeacherDetail {
    pub fn daily_stats(&self) -> Vec<DailyStats> {
        daily_stats(&self.activities)
    }

    pub fn grade_breakdown(&self) -> Vec<GradeBreakdown> {
        grade_breakdown(&self.activities)
    }
}
