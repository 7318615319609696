use anyhow::Context;
use std::path::PathBuf;
use std::str::FromStr;

pub const START_FLOOR_ENV: &str = "LOOK_START_FLOOR";
pub const REQUESTS_ENV: &str = "LOOK_REQUESTS";
pub const REPORTER_ENV: &str = "LOOK_REPORTER";

pub const DEFAULT_START_FLOOR: i32 = 5;

/// Requests used when no request file is configured.
pub const DEMO_REQUESTS: [(i32, i32); 6] = [(3, 6), (7, 2), (8, 3), (2, 8), (12, 1), (1, 10)];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    #[default]
    Console,
    Tracing,
}

impl FromStr for ReporterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(ReporterKind::Console),
            "tracing" => Ok(ReporterKind::Tracing),
            other => anyhow::bail!("unknown reporter '{other}', expected 'console' or 'tracing'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub start_floor: i32,
    /// `None` runs the built-in demonstration list.
    pub requests: Option<PathBuf>,
    pub reporter: ReporterKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            start_floor: DEFAULT_START_FLOOR,
            requests: None,
            reporter: ReporterKind::default(),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SimConfig::default();

        if let Some(raw) = lookup(START_FLOOR_ENV) {
            config.start_floor = raw
                .trim()
                .parse()
                .context(format!("{START_FLOOR_ENV}='{raw}' is not a floor number"))?;
        }
        if let Some(raw) = lookup(REQUESTS_ENV).filter(|p| !p.trim().is_empty()) {
            config.requests = Some(PathBuf::from(raw.trim()));
        }
        if let Some(raw) = lookup(REPORTER_ENV) {
            config.reporter = raw.parse().context(format!("invalid {REPORTER_ENV}"))?;
        }

        Ok(config)
    }

    pub fn demo_lines() -> Vec<String> {
        DEMO_REQUESTS
            .iter()
            .map(|(pickup, dropoff)| format!("{pickup},{dropoff}"))
            .collect()
    }
}
