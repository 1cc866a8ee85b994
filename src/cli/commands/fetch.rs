use crate::config::AppConfig;
use crate::console;
use crate::errors::{AppError, AppResult};
use crate::http::{HttpClient, HttpOutcome};
use clap::Args;
use serde_json::Value;
use tracing::info;

/// Fetch a URL
#[derive(Args)]
pub struct FetchCommand {
    /// URL to request
    pub url: String,

    /// Send a POST with this body instead of a GET (JSON bodies are sent as JSON)
    #[arg(long)]
    pub post: Option<String>,

    /// Query parameter as key=value (repeatable, GET only)
    #[arg(long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Request timeout in seconds (overrides config.toml)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print only the status line, not the body
    #[arg(long)]
    pub status_only: bool,
}

/// Split `key=value` pairs
pub fn parse_query(pairs: &[String]) -> AppResult<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    AppError::InvalidData(format!("query parameter must be KEY=VALUE: {}", pair))
                })
        })
        .collect()
}

impl FetchCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let mut http_config = config.http;
        if let Some(timeout) = self.timeout {
            http_config.timeout_seconds = timeout.max(1);
        }

        let client = HttpClient::new(&http_config)?;
        info!("Fetching {}", self.url);
        console::running(&format!("requesting {}", self.url));

        let outcome = match &self.post {
            Some(body) => match serde_json::from_str::<Value>(body) {
                Ok(json) => client.post_json(&self.url, &json).await,
                Err(_) => client.post_raw(&self.url, body.clone()).await,
            },
            None => {
                let query = parse_query(&self.query)?;
                let query: Vec<(&str, &str)> = query
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                client.get(&self.url, &query).await
            }
        };

        match &outcome {
            HttpOutcome::Success(resp) => {
                console::success(&format!("{} {}", resp.status, resp.url))
            }
            HttpOutcome::Status(resp) => {
                console::warning(&format!("{} {}", resp.status, resp.url))
            }
            HttpOutcome::Failed(reason) => {
                console::error(&format!("request failed: {}", reason));
                return Err(AppError::Http(reason.clone()));
            }
        }

        if !self.status_only {
            if let Some(resp) = outcome.response() {
                println!("{}", resp.body);
            }
        }

        Ok(())
    }
}
