use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unknown activity type {0:?}")]
    UnknownActivityType(String),
    #[error("invalid teacher id {0:?}: expected T followed by three digits")]
    InvalidTeacherId(String),
    #[error(
        "duplicate activity {teacher_id}/{activity_type} at {created_at} \
         (record {position} repeats record {first_position})"
    )]
    DuplicateActivity {
        teacher_id: String,
        activity_type: String,
        created_at: String,
        first_position: usize,
        position: usize,
    },
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
