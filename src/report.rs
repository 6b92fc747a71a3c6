use std::fmt::Write;

use crate::analytics::{grades, recent_activities, subjects};
use crate::models::{DailyStats, SchoolSummary, TeacherDetail, TeacherTotals};

const RECENT_LIMIT: usize = 8;

pub fn build_school_report(
    summary: &SchoolSummary,
    totals: &[TeacherTotals],
    daily: &[DailyStats],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# School Activity Report");
    let _ = writeln!(
        output,
        "{} activities from {} teachers across {} active days",
        summary.counts.total(),
        summary.teachers,
        summary.active_days
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## School Totals");
    let _ = writeln!(output, "- Lesson plans: {}", summary.counts.lessons);
    let _ = writeln!(output, "- Quizzes: {}", summary.counts.quizzes);
    let _ = writeln!(output, "- Question papers: {}", summary.counts.question_papers);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Teachers");

    if totals.is_empty() {
        let _ = writeln!(output, "No teacher activity recorded.");
    } else {
        for teacher in totals {
            let _ = writeln!(
                output,
                "- {} ({}): {} lesson plans, {} quizzes, {} question papers",
                teacher.teacher_name,
                teacher.teacher_id,
                teacher.counts.lessons,
                teacher.counts.quizzes,
                teacher.counts.question_papers
            );
        }
    }

    write_daily_section(&mut output, daily);
    output
}

pub fn build_teacher_report(detail: &TeacherDetail, grade: Option<u32>) -> String {
    let mut output = String::new();
    let scope = match grade {
        Some(grade) => format!("grade {grade}"),
        None => "all grades".to_string(),
    };

    let _ = writeln!(output, "# {} ({})", detail.teacher_name, detail.teacher_id);
    let _ = writeln!(output, "Activity for {}", scope);

    let subjects = subjects(&detail.activities);
    if !subjects.is_empty() {
        let _ = writeln!(output, "Subjects: {}", subjects.join(", "));
    }

    let grades = grades(&detail.activities);
    if !grades.is_empty() {
        let labels: Vec<String> = grades.iter().map(u32::to_string).collect();
        let _ = writeln!(output, "Grades: {}", labels.join(", "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Totals");
    let _ = writeln!(output, "- Lesson plans: {}", detail.counts.lessons);
    let _ = writeln!(output, "- Quizzes: {}", detail.counts.quizzes);
    let _ = writeln!(output, "- Question papers: {}", detail.counts.question_papers);
    let _ = writeln!(output, "- Total: {}", detail.counts.total());

    let _ = writeln!(output);
    let _ = writeln!(output, "## Grade Breakdown");

    let breakdown = detail.grade_breakdown();
    if breakdown.is_empty() {
        let _ = writeln!(output, "No activity for this selection.");
    } else {
        for row in breakdown {
            let _ = writeln!(
                output,
                "- Grade {}: {} lesson plans, {} quizzes, {} question papers",
                row.grade, row.counts.lessons, row.counts.quizzes, row.counts.question_papers
            );
        }
    }

    write_daily_section(&mut output, &detail.daily_stats());

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Activity");

    let recent = recent_activities(&detail.activities, RECENT_LIMIT);
    if recent.is_empty() {
        let _ = writeln!(output, "No activity for this selection.");
    } else {
        for activity in recent {
            let _ = writeln!(
                output,
                "- {} {} (grade {}, {})",
                activity.created_at.format("%Y-%m-%d %H:%M"),
                activity.activity_type,
                activity.grade,
                activity.subject
            );
        }
    }

    output
}

fn write_daily_section(output: &mut String, daily: &[DailyStats]) {
    let _ = writeln!(output);
    let _ = writeln!(output, "## Daily Trend");

    if daily.is_empty() {
        let _ = writeln!(output, "No activity recorded.");
        return;
    }

    for day in daily {
        let _ = writeln!(
            output,
            "- {}: {} lessons, {} quizzes, {} papers",
            day.date, day.counts.lessons, day.counts.quizzes, day.counts.question_papers
        );
    }
}
