//! JSON and YAML output formatters

use serde::Serialize;

use crate::error::{Result, SigmaError};

/// Pretty-printed JSON
pub fn render_json<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// YAML without the trailing newline
pub fn render_yaml<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    let yaml = serde_yml::to_string(value)
        .map_err(|e| SigmaError::Yaml(format!("Error serializing to YAML: {}", e)))?;
    Ok(yaml.trim_end().to_string())
}
