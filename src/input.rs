//! Reading raw property maps from files or stdin.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::PropertiesError;

/// Parse raw cloud properties from a string. Empty input reads as `{}`.
pub fn parse_raw(contents: &str) -> Result<Value, PropertiesError> {
    if contents.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(contents)?)
}

/// Read raw cloud properties from `path`, or from stdin when `None`.
pub fn read_raw(path: Option<&Path>) -> Result<Value, PropertiesError> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| PropertiesError::Io { path: "<stdin>".into(), source })?;
            buf
        }
    };
    parse_raw(&contents)
}
