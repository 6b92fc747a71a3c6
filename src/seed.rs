use crate::error::Result;
use crate::models::{parse_timestamp, ActivityRecord};

type SeedRow = (&'static str, &'static str, u32, &'static str, &'static str, &'static str);

// The last three rows repeat earlier uploads.
const SEED_ROWS: &[SeedRow] = &[
    ("T004", "Vikas Nair", 10, "Social Studies", "Quiz", "2026-02-12T19:07:41"),
    ("T004", "Vikas Nair", 10, "Social Studies", "Lesson Plan", "2026-02-11T19:15:55"),
    ("T004", "Vikas Nair", 9, "Social Studies", "Question Paper", "2026-02-15T16:51:32"),
    ("T004", "Vikas Nair", 9, "Social Studies", "Quiz", "2026-02-16T19:12:33"),
    ("T004", "Vikas Nair", 9, "Social Studies", "Lesson Plan", "2026-02-11T13:06:29"),
    ("T004", "Vikas Nair", 10, "Social Studies", "Quiz", "2026-02-15T15:59:00"),
    ("T004", "Vikas Nair", 9, "Social Studies", "Lesson Plan", "2026-02-15T16:32:23"),
    ("T003", "Pooja Mehta", 7, "English", "Question Paper", "2026-02-13T15:31:51"),
    ("T003", "Pooja Mehta", 6, "English", "Quiz", "2026-02-14T15:22:29"),
    ("T003", "Pooja Mehta", 6, "English", "Question Paper", "2026-02-17T19:07:47"),
    ("T003", "Pooja Mehta", 7, "English", "Lesson Plan", "2026-02-16T15:41:50"),
    ("T003", "Pooja Mehta", 6, "English", "Quiz", "2026-02-15T11:36:03"),
    ("T003", "Pooja Mehta", 6, "English", "Question Paper", "2026-02-18T09:12:05"),
    ("T003", "Pooja Mehta", 6, "English", "Question Paper", "2026-02-12T17:47:58"),
    ("T003", "Pooja Mehta", 6, "English", "Lesson Plan", "2026-02-14T19:49:54"),
    ("T003", "Pooja Mehta", 6, "English", "Lesson Plan", "2026-02-16T15:33:27"),
    ("T001", "Anita Sharma", 7, "Mathematics", "Lesson Plan", "2026-02-17T20:35:33"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Question Paper", "2026-02-16T11:26:52"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Lesson Plan", "2026-02-17T19:19:56"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Question Paper", "2026-02-13T09:16:06"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Question Paper", "2026-02-16T11:44:31"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Lesson Plan", "2026-02-18T18:45:43"),
    ("T001", "Anita Sharma", 7, "Mathematics", "Question Paper", "2026-02-14T10:36:09"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Lesson Plan", "2026-02-18T16:32:47"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Quiz", "2026-02-14T15:43:38"),
    ("T002", "Rahul Verma", 9, "Science", "Quiz", "2026-02-17T09:21:32"),
    ("T002", "Rahul Verma", 9, "Science", "Question Paper", "2026-02-12T11:38:24"),
    ("T002", "Rahul Verma", 8, "Science", "Quiz", "2026-02-14T13:57:07"),
    ("T002", "Rahul Verma", 8, "Science", "Question Paper", "2026-02-12T18:01:59"),
    ("T002", "Rahul Verma", 8, "Science", "Lesson Plan", "2026-02-15T13:31:36"),
    ("T002", "Rahul Verma", 8, "Science", "Quiz", "2026-02-14T09:54:01"),
    ("T002", "Rahul Verma", 9, "Science", "Lesson Plan", "2026-02-12T18:27:09"),
    ("T002", "Rahul Verma", 8, "Science", "Lesson Plan", "2026-02-18T15:48:08"),
    ("T002", "Rahul Verma", 9, "Science", "Lesson Plan", "2026-02-16T13:31:34"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Quiz", "2026-02-12T12:26:22"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Lesson Plan", "2026-02-11T17:53:57"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Question Paper", "2026-02-11T17:54:16"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Quiz", "2026-02-15T13:31:42"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Question Paper", "2026-02-12T19:19:44"),
    ("T005", "Neha Kapoor", 9, "Mathematics", "Lesson Plan", "2026-02-18T16:26:04"),
    ("T005", "Neha Kapoor", 9, "Mathematics", "Lesson Plan", "2026-02-16T17:14:47"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Quiz", "2026-02-18T14:05:20"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Quiz", "2026-02-14T11:55:18"),
    ("T005", "Neha Kapoor", 9, "Mathematics", "Lesson Plan", "2026-02-18T11:51:37"),
    ("T004", "Vikas Nair", 10, "Social Studies", "Quiz", "2026-02-12T19:07:41"),
    ("T001", "Anita Sharma", 8, "Mathematics", "Lesson Plan", "2026-02-17T19:19:56"),
    ("T005", "Neha Kapoor", 10, "Mathematics", "Quiz", "2026-02-12T12:26:22"),
];

/// The built-in dataset used when no data file is configured.
pub fn activities() -> Result<Vec<ActivityRecord>> {
    SEED_ROWS
        .iter()
        .map(|&(teacher_id, teacher_name, grade, subject, activity_type, created_at)| -> Result<ActivityRecord> {
            Ok(ActivityRecord {
                teacher_id: teacher_id.to_string(),
                teacher_name: teacher_name.to_string(),
                grade,
                subject: subject.to_string(),
                activity_type: activity_type.parse()?,
                created_at: parse_timestamp(created_at)?,
            })
        })
        .collect()
}
