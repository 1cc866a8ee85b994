//! Gathering input values for batch commands

use crate::errors::{AppError, AppResult};
use crate::fsutil;
use std::io::{self, BufRead};
use std::path::Path;

/// Collect values from positional arguments, else a file, else stdin
///
/// Lines are trimmed and blank lines dropped.
pub fn collect_values(values: &[String], file: Option<&Path>) -> AppResult<Vec<String>> {
    if !values.is_empty() {
        return Ok(normalise(values.iter().map(String::as_str)));
    }

    if let Some(path) = file {
        let lines = fsutil::read_lines(path)?.ok_or_else(|| {
            AppError::InvalidData(format!("input file is missing or empty: {}", path.display()))
        })?;
        return Ok(normalise(lines.iter().map(String::as_str)));
    }

    let stdin = io::stdin();
    let lines = stdin.lock().lines().collect::<Result<Vec<_>, _>>()?;
    Ok(normalise(lines.iter().map(String::as_str)))
}

fn normalise<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
