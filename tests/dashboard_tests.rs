use teacher_pulse::analytics::school_summary;
use teacher_pulse::import::read_csv;
use teacher_pulse::models::parse_timestamp;
use teacher_pulse::{
    daily_stats, dedupe, query_teacher, ActivityRecord, ActivitySnapshot, ActivityType,
    DedupPolicy, TeacherFilter, totals_by_teacher,
};

fn activity(
    teacher_id: &str,
    grade: u32,
    activity_type: ActivityType,
    created_at: &str,
) -> ActivityRecord {
    ActivityRecord {
        teacher_id: teacher_id.to_string(),
        teacher_name: format!("Teacher {teacher_id}"),
        grade,
        subject: "Mathematics".to_string(),
        activity_type,
        created_at: parse_timestamp(created_at).unwrap(),
    }
}

fn mixed_records() -> Vec<ActivityRecord> {
    vec![
        activity("T002", 8, ActivityType::Quiz, "2026-02-14T13:57:07"),
        activity("T001", 7, ActivityType::LessonPlan, "2026-02-17T20:35:33"),
        activity("T002", 9, ActivityType::QuestionPaper, "2026-02-12T11:38:24"),
        activity("T002", 8, ActivityType::Quiz, "2026-02-14T13:57:07"),
        activity("T001", 8, ActivityType::QuestionPaper, "2026-02-16T11:26:52"),
        activity("T003", 6, ActivityType::Quiz, "2026-02-14T15:22:29"),
        activity("T001", 7, ActivityType::LessonPlan, "2026-02-17T20:35:33"),
        activity("T001", 8, ActivityType::Quiz, "2026-02-14T15:43:38"),
    ]
}

#[test]
fn dedupe_is_idempotent_and_order_preserving() {
    let input = mixed_records();
    let once = dedupe(&input);
    assert_eq!(dedupe(&once), once);
    assert_eq!(once.len(), 6);

    let positions: Vec<usize> = once
        .iter()
        .map(|kept| input.iter().position(|r| r == kept).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn totals_and_daily_conserve_record_count() {
    let clean = dedupe(&mixed_records());

    let totals: usize = totals_by_teacher(&clean).iter().map(|t| t.counts.total()).sum();
    let daily: usize = daily_stats(&clean).iter().map(|d| d.counts.total()).sum();

    assert_eq!(totals, clean.len());
    assert_eq!(daily, clean.len());
    assert_eq!(school_summary(&clean).counts.total(), clean.len());
}

#[test]
fn grade_filter_is_a_subset_with_matching_grade() {
    let clean = dedupe(&mixed_records());

    for teacher_id in ["T001", "T002", "T003"] {
        let all = query_teacher(&clean, teacher_id, &TeacherFilter::default()).unwrap();
        for grade in 6..=9 {
            let filtered = query_teacher(&clean, teacher_id, &TeacherFilter::grade(grade)).unwrap();
            assert!(filtered.activities.iter().all(|a| a.grade == grade));
            assert!(filtered.activities.iter().all(|a| all.activities.contains(a)));
            assert_eq!(filtered.counts.total(), filtered.activities.len());
            assert_eq!(filtered.teacher_name, all.teacher_name);
        }
    }
}

#[test]
fn unknown_teacher_is_not_found() {
    let snapshot = ActivitySnapshot::seeded().unwrap();
    assert!(snapshot.query_teacher("T999", &TeacherFilter::default()).is_none());
}

#[test]
fn seeded_teacher_grade_query() {
    let snapshot = ActivitySnapshot::seeded().unwrap();

    let all = snapshot.query_teacher("T005", &TeacherFilter::default()).unwrap();
    assert_eq!(all.teacher_name, "Neha Kapoor");
    assert_eq!(all.activities.len(), 10);

    let grade_nine = snapshot.query_teacher("T005", &TeacherFilter::grade(9)).unwrap();
    assert_eq!(grade_nine.counts.lessons, 3);
    assert_eq!(grade_nine.counts.quizzes, 0);
    assert_eq!(grade_nine.counts.question_papers, 0);
}

#[test]
fn csv_snapshot_matches_in_memory_pipeline() {
    let data = "teacher_id,teacher_name,grade,subject,activity_type,created_at\n\
                T1,Vikas Nair,9,Social Studies,Quiz,2026-02-12T19:07:41\n\
                T1,Vikas Nair,9,Social Studies,Quiz,2026-02-12T19:07:41\n\
                T1,Vikas Nair,10,Social Studies,Lesson Plan,2026-02-11T19:15:55\n";
    let records = read_csv(data.as_bytes()).unwrap();
    let snapshot = ActivitySnapshot::new(records.clone(), DedupPolicy::KeepFirst).unwrap();

    let totals = snapshot.teacher_totals();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].counts.lessons, 1);
    assert_eq!(totals[0].counts.quizzes, 1);

    let daily = snapshot.daily_stats();
    assert_eq!(daily[0].date.to_string(), "2026-02-11");
    assert_eq!(daily[1].date.to_string(), "2026-02-12");

    let detail = snapshot.query_teacher("T1", &TeacherFilter::grade(9)).unwrap();
    assert_eq!(detail.counts.quizzes, 1);
    assert_eq!(detail.counts.lessons, 0);
    assert_eq!(detail.activities, vec![records[0].clone()]);

    assert!(ActivitySnapshot::new(records, DedupPolicy::Reject).is_err());
}

#[test]
fn detail_serializes_with_camel_case_fields() {
    let snapshot = ActivitySnapshot::seeded().unwrap();
    let detail = snapshot.query_teacher("T004", &TeacherFilter::grade(10)).unwrap();
    let value = serde_json::to_value(&detail).unwrap();

    assert_eq!(value["teacherId"], "T004");
    assert_eq!(value["teacherName"], "Vikas Nair");
    assert_eq!(value["quizzes"], 2);
    assert_eq!(value["activities"][0]["activityType"], "Quiz");
    assert_eq!(value["activities"][0]["createdAt"], "2026-02-12T19:07:41");
}
