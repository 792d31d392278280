use anyhow::{Context, Result};

use crate::screening::catalog::SkillCatalog;

pub const DEFAULT_JOB_DESCRIPTION: &str = "python machine learning flask sql data science";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub job_description: String,
    pub skill_catalog: SkillCatalog,
    pub max_upload_bytes: usize,
    pub enable_prediction: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let skill_catalog = match optional_env("SKILL_CATALOG") {
            Some(list) => SkillCatalog::parse_list(&list).context("SKILL_CATALOG is invalid")?,
            None => SkillCatalog::default(),
        };

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            job_description: optional_env("JOB_DESCRIPTION")
                .unwrap_or_else(|| DEFAULT_JOB_DESCRIPTION.to_string()),
            skill_catalog,
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            enable_prediction: match optional_env("ENABLE_PREDICTION") {
                Some(v) => parse_flag(&v)
                    .with_context(|| format!("ENABLE_PREDICTION must be true or false, got '{v}'"))?,
                None => true,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            job_description: DEFAULT_JOB_DESCRIPTION.to_string(),
            skill_catalog: SkillCatalog::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_prediction: true,
        }
    }
}

/// Unset and blank variables both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
