use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "Lesson Plan", alias = "LessonPlan")]
    LessonPlan,
    #[serde(rename = "Quiz")]
    Quiz,
    #[serde(rename = "Question Paper", alias = "QuestionPaper")]
    QuestionPaper,
}

impl ActivityType {
    pub fn label(self) -> &'static str {
        match self {
            ActivityType::LessonPlan => "Lesson Plan",
            ActivityType::Quiz => "Quiz",
            ActivityType::QuestionPaper => "Question Paper",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Lesson Plan" | "LessonPlan" => Ok(ActivityType::LessonPlan),
            "Quiz" => Ok(ActivityType::Quiz),
            "Question Paper" | "QuestionPaper" => Ok(ActivityType::QuestionPaper),
            other => Err(DashboardError::UnknownActivityType(other.to_string())),
        }
    }
}

/// One logged action by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub teacher_id: String,
    pub teacher_name: String,
    pub grade: u32,
    pub subject: String,
    pub activity_type: ActivityType,
    pub created_at: NaiveDateTime,
}

impl ActivityRecord {
    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

/// Timestamps are stored without an offset; fractional seconds are optional.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, DashboardError> {
    value
        .trim()
        .parse::<NaiveDateTime>()
        .map_err(|source| DashboardError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounts {
    pub lessons: usize,
    pub quizzes: usize,
    pub question_papers: usize,
}

impl ActivityCounts {
    pub fn record(&mut self, activity_type: ActivityType) {
        match activity_type {
            ActivityType::LessonPlan => self.lessons += 1,
            ActivityType::Quiz => self.quizzes += 1,
            ActivityType::QuestionPaper => self.question_papers += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.lessons + self.quizzes + self.question_papers
    }

    pub fn add(&mut self, other: &ActivityCounts) {
        self.lessons += other.lessons;
        self.quizzes += other.quizzes;
        self.question_papers += other.question_papers;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTotals {
    pub teacher_id: String,
    pub teacher_name: String,
    #[serde(flatten)]
    pub counts: ActivityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: ActivityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBreakdown {
    pub grade: u32,
    #[serde(flatten)]
    pub counts: ActivityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSummary {
    pub teachers: usize,
    pub active_days: usize,
    #[serde(flatten)]
    pub counts: ActivityCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDetail {
    pub teacher_id: String,
    pub teacher_name: String,
    #[serde(flatten)]
    pub counts: ActivityCounts,
    pub activities: Vec<ActivityRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    pub grade: Option<u32>,
}

impl TeacherFilter {
    pub fn grade(grade: u32) -> Self {
        Self { grade: Some(grade) }
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        self.grade.map_or(true, |grade| record.grade == grade)
    }
}
