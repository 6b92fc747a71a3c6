use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use teacher_pulse::config::{Config, DEFAULT_LOG_FILTER};
use teacher_pulse::dedup::find_duplicates;
use teacher_pulse::models::{ActivityRecord, TeacherFilter};
use teacher_pulse::snapshot::ActivitySnapshot;
use teacher_pulse::teacher::validate_teacher_id;
use teacher_pulse::{import, report, seed, DedupPolicy};

#[derive(Parser)]
#[command(name = "teacher-pulse")]
#[command(about = "Teacher activity analytics for school principals", long_about = None)]
struct Cli {
    /// CSV file of activities; the built-in dataset is used when absent
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Fail on duplicate activities instead of keeping the first
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-teacher activity totals
    Teachers {
        #[arg(long)]
        json: bool,
    },
    /// Activity counts per day
    Daily {
        #[arg(long)]
        json: bool,
    },
    /// School-wide totals
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// One teacher's activities, optionally for a single grade
    Teacher {
        teacher_id: String,
        #[arg(long)]
        grade: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report
    Report {
        #[arg(long)]
        teacher: Option<String>,
        #[arg(long, requires = "teacher")]
        grade: Option<u32>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Load the data and report duplicates
    Validate,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.data, cli.strict);

    let records = match &config.data_path {
        Some(path) => import::load_csv(path)
            .with_context(|| format!("failed to load activities from {}", path.display()))?,
        None => seed::activities().context("built-in dataset is malformed")?,
    };

    // validate lists duplicates itself, so it never builds a strict snapshot
    let policy = match cli.command {
        Commands::Validate => DedupPolicy::KeepFirst,
        _ => config.dedup_policy,
    };
    let snapshot = ActivitySnapshot::new(records, policy)?;

    match cli.command {
        Commands::Teachers { json } => {
            let totals = snapshot.teacher_totals();
            if json {
                return print_json(&totals);
            }
            if totals.is_empty() {
                println!("No teacher activity recorded.");
                return Ok(());
            }
            println!("Teacher activity totals:");
            for teacher in &totals {
                println!(
                    "- {} ({}) {} lesson plans, {} quizzes, {} question papers",
                    teacher.teacher_name,
                    teacher.teacher_id,
                    teacher.counts.lessons,
                    teacher.counts.quizzes,
                    teacher.counts.question_papers
                );
            }
        }
        Commands::Daily { json } => {
            let daily = snapshot.daily_stats();
            if json {
                return print_json(&daily);
            }
            if daily.is_empty() {
                println!("No activity recorded.");
                return Ok(());
            }
            println!("Daily activity:");
            for day in &daily {
                println!(
                    "- {} {} lessons, {} quizzes, {} papers",
                    day.date, day.counts.lessons, day.counts.quizzes, day.counts.question_papers
                );
            }
        }
        Commands::Summary { json } => {
            let summary = snapshot.school_summary();
            if json {
                return print_json(&summary);
            }
            println!(
                "{} activities from {} teachers over {} days: {} lesson plans, {} quizzes, {} question papers",
                summary.counts.total(),
                summary.teachers,
                summary.active_days,
                summary.counts.lessons,
                summary.counts.quizzes,
                summary.counts.question_papers
            );
        }
        Commands::Teacher {
            teacher_id,
            grade,
            json,
        } => {
            validate_teacher_id(&teacher_id)?;
            let filter = TeacherFilter { grade };
            let Some(detail) = snapshot.query_teacher(&teacher_id, &filter) else {
                bail!("Teacher not found: {teacher_id}");
            };
            if json {
                return print_json(&detail);
            }
            println!("{} ({})", detail.teacher_name, detail.teacher_id);
            println!(
                "{} lesson plans, {} quizzes, {} question papers",
                detail.counts.lessons, detail.counts.quizzes, detail.counts.question_papers
            );
            for activity in &detail.activities {
                println!(
                    "- {} {} grade {} ({})",
                    activity.created_at, activity.activity_type, activity.grade, activity.subject
                );
            }
        }
        Commands::Report {
            teacher,
            grade,
            out,
        } => {
            let markdown = match teacher {
                Some(teacher_id) => {
                    validate_teacher_id(&teacher_id)?;
                    let Some(detail) = snapshot.query_teacher(&teacher_id, &TeacherFilter { grade }) else {
                        bail!("Teacher not found: {teacher_id}");
                    };
                    report::build_teacher_report(&detail, grade)
                }
                None => report::build_school_report(
                    &snapshot.school_summary(),
                    &snapshot.teacher_totals(),
                    &snapshot.daily_stats(),
                ),
            };
            std::fs::write(&out, markdown)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "report written");
            println!("Report written to {}.", out.display());
        }
        Commands::Validate => validate(snapshot.raw(), config.dedup_policy)?,
    }

    Ok(())
}

fn validate(records: &[ActivityRecord], policy: DedupPolicy) -> anyhow::Result<()> {
    let duplicates = find_duplicates(records);
    for duplicate in &duplicates {
        let record = &records[duplicate.position];
        warn!(
            teacher_id = %record.teacher_id,
            activity_type = %record.activity_type,
            created_at = %record.created_at,
            first = duplicate.first_position + 1,
            duplicate = duplicate.position + 1,
            "duplicate activity"
        );
    }

    println!(
        "{} records, {} duplicates, {} distinct.",
        records.len(),
        duplicates.len(),
        records.len() - duplicates.len()
    );

    if policy == DedupPolicy::Reject && !duplicates.is_empty() {
        bail!("duplicate activities found in strict mode");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
