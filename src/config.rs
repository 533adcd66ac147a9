use std::env;
use std::path::Path;

use crate::utils::parse_flag;

// Default configuration constants
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_OUTPUT: OutputFormat = OutputFormat::Table;

pub const LOG_ENV: &str = "CPI_PROPS_LOG";
pub const OUTPUT_ENV: &str = "CPI_PROPS_OUTPUT";
pub const NO_COLOR_ENV: &str = "CPI_PROPS_NO_COLOR";

/// How decoded properties are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_log_filter() -> String {
    env::var(LOG_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn get_output_format() -> OutputFormat {
    env::var(OUTPUT_ENV)
        .map(|v| parse_output_format(&v))
        .unwrap_or(DEFAULT_OUTPUT)
}

pub fn get_no_color() -> bool {
    parse_flag(env::var(NO_COLOR_ENV).ok().as_deref(), false)
}

/// Unrecognised values fall back to the default format.
pub fn parse_output_format(raw: &str) -> OutputFormat {
    match raw.trim().to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "table" => OutputFormat::Table,
        _ => DEFAULT_OUTPUT,
    }
}
