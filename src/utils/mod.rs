// Parsing utilities
pub mod parse_flag;

// Output helpers
pub mod property_display;

// Re-export all utilities for convenient access
pub use parse_flag::parse_flag;
pub use property_display::{display_property, render_json};
