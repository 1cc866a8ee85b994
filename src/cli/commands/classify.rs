use super::input::collect_values;
use crate::classify::{self, ExtractedIndicator, Indicator};
use crate::cli::{parse_format, OutputFormat};
use crate::console::{self, END_COLOR, PURPLE};
use crate::errors::{AppError, AppResult};
use crate::fsutil;
use crate::utils::time::timestamp;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Classify individual values
#[derive(Args)]
pub struct ClassifyCommand {
    /// Values to classify (reads --file or stdin when omitted)
    pub values: Vec<String>,

    /// File with one value per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedValue {
    pub value: String,
    pub indicator: Option<Indicator>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ClassifiedValue>,
}

/// Classify each value in order
pub fn classify_values(values: Vec<String>) -> ClassifyReport {
    let results = values
        .into_iter()
        .map(|value| ClassifiedValue {
            indicator: classify::classify(&value),
            value,
        })
        .collect();

    ClassifyReport {
        generated_at: Utc::now(),
        results,
    }
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        let values = collect_values(&self.values, self.file.as_deref())?;
        info!("Classifying {} values", values.len());

        let report = classify_values(values);

        match parse_format(&self.format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                for item in &report.results {
                    let kind = item
                        .indicator
                        .map(|i| i.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    println!("{}{:<14}{} {}", PURPLE, kind, END_COLOR, item.value);
                }
            }
        }

        Ok(())
    }
}

/// Extract indicators from free text
#[derive(Args)]
pub struct ExtractCommand {
    /// Text file to scan
    pub file: PathBuf,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ExtractCommand {
    pub fn run(&self) -> AppResult<()> {
        let data = fsutil::read_file(&self.file)?.ok_or_else(|| {
            AppError::InvalidData(format!(
                "input file is missing or empty: {}",
                self.file.display()
            ))
        })?;
        let text = String::from_utf8_lossy(&data);

        let found = classify::extract_indicators(&text);
        info!(
            "Extracted {} indicators from {}",
            found.len(),
            self.file.display()
        );

        match parse_format(&self.format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
            OutputFormat::Text => print_extracted(&found),
        }

        Ok(())
    }
}

fn print_extracted(found: &[ExtractedIndicator]) {
    if found.is_empty() {
        console::warning("no indicators found");
        return;
    }
    for item in found {
        println!(
            "{}{:<14}{} {} (offset {})",
            PURPLE, item.indicator, END_COLOR, item.value, item.offset
        );
    }
    console::success(&format!(
        "{} indicators extracted at {}",
        found.len(),
        timestamp()
    ));
}
