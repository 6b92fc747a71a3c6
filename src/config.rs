use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::dedup::DedupPolicy;

pub const DATA_ENV: &str = "DASHBOARD_DATA";
pub const STRICT_ENV: &str = "DASHBOARD_STRICT_DEDUP";
pub const DEFAULT_LOG_FILTER: &str = "teacher_pulse=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub dedup_policy: DedupPolicy,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(DATA_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let dedup_policy = match lookup(STRICT_ENV) {
            Some(value) if parse_flag(&value)? => DedupPolicy::Reject,
            _ => DedupPolicy::KeepFirst,
        };

        Ok(Self {
            data_path,
            dedup_policy,
        })
    }

    pub fn with_overrides(mut self, data: Option<PathBuf>, strict: bool) -> Self {
        if data.is_some() {
            self.data_path = data;
        }
        if strict {
            self.dedup_policy = DedupPolicy::Reject;
        }
        self
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid {STRICT_ENV}: {other}"),
    }
}
