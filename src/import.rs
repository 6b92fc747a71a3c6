use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::models::{parse_timestamp, ActivityRecord};

#[derive(serde::Deserialize)]
struct CsvRow {
    teacher_id: String,
    teacher_name: String,
    grade: u32,
    subject: String,
    activity_type: String,
    created_at: String,
}

impl CsvRow {
    fn into_record(self) -> Result<ActivityRecord> {
        Ok(ActivityRecord {
            activity_type: self.activity_type.parse()?,
            created_at: parse_timestamp(&self.created_at)?,
            teacher_id: self.teacher_id.trim().to_string(),
            teacher_name: self.teacher_name,
            grade: self.grade,
            subject: self.subject,
        })
    }
}

pub fn load_csv(path: &Path) -> Result<Vec<ActivityRecord>> {
    debug!(path = %path.display(), "loading activities");
    let file = std::fs::File::open(path)?;
    let records = read_csv(file)?;
    info!(path = %path.display(), records = records.len(), "activities loaded");
    Ok(records)
}

/// Parses every row or fails on the first bad one; nothing is coerced.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<ActivityRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(input);
    let mut records = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        let record = result
            .map_err(DashboardError::from)
            .and_then(CsvRow::into_record)
            .map_err(|err| DashboardError::InvalidRow {
                row,
                message: err.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}
