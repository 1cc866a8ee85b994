//! API key lookup
//!
//! Keys live in a flat JSON object keyed by service name:
//!
//! ```json
//! { "shodan": "KEY", "virustotal": "KEY" }
//! ```

use crate::console;
use crate::errors::{AppError, AppResult};
use crate::fsutil;
use serde_json::Value;
use std::path::Path;

/// Read the API key file and return the key for `service`
///
/// A missing (or empty) key file is reported on the console and yields
/// `Ok(None)`, as does an unknown service. Non-string values are returned
/// as their JSON text.
pub fn get_apikey(path: impl AsRef<Path>, service: &str) -> AppResult<Option<String>> {
    let path = path.as_ref();

    let data = match fsutil::load_json(path)? {
        Some(data) => data,
        None => {
            console::error(&format!("cannot find API keys file: {}", path.display()));
            return Ok(None);
        }
    };

    let keys = data.as_object().ok_or_else(|| {
        AppError::InvalidData(format!(
            "API keys file {} is not a JSON object",
            path.display()
        ))
    })?;

    Ok(keys.get(service).map(|value| match value {
        Value::String(key) => key.clone(),
        other => other.to_string(),
    }))
}
