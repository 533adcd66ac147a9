use cpi_props::config::{self, OutputFormat};
use std::env;

#[test]
fn test_parse_output_format_json() {
    assert_eq!(config::parse_output_format("json"), OutputFormat::Json);
    assert_eq!(config::parse_output_format("  JSON "), OutputFormat::Json);
}

#[test]
fn test_parse_output_format_table() {
    assert_eq!(config::parse_output_format("table"), OutputFormat::Table);
}

#[test]
fn test_parse_output_format_unknown_uses_default() {
    assert_eq!(config::parse_output_format("yaml"), config::DEFAULT_OUTPUT);
    assert_eq!(config::parse_output_format(""), config::DEFAULT_OUTPUT);
}

#[test]
fn test_get_output_format_from_env() {
    env::set_var(config::OUTPUT_ENV, "json");
    assert_eq!(config::get_output_format(), OutputFormat::Json);

    env::remove_var(config::OUTPUT_ENV);
    assert_eq!(config::get_output_format(), config::DEFAULT_OUTPUT);
}

#[test]
fn test_get_log_filter() {
    env::set_var(config::LOG_ENV, " cpi_props=debug ");
    assert_eq!(config::get_log_filter(), "cpi_props=debug");

    // Blank values fall back to the default
    env::set_var(config::LOG_ENV, "   ");
    assert_eq!(config::get_log_filter(), config::DEFAULT_LOG_FILTER);

    env::remove_var(config::LOG_ENV);
    assert_eq!(config::get_log_filter(), config::DEFAULT_LOG_FILTER);
}

#[test]
fn test_get_no_color() {
    env::set_var(config::NO_COLOR_ENV, "yes");
    assert!(config::get_no_color());

    env::set_var(config::NO_COLOR_ENV, "0");
    assert!(!config::get_no_color());

    env::remove_var(config::NO_COLOR_ENV);
    assert!(!config::get_no_color());
}
