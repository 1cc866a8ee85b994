use crate::apikeys;
use crate::config::AppConfig;
use crate::console;
use crate::errors::AppResult;
use crate::fsutil;
use clap::Args;
use std::path::PathBuf;

/// Look up an API key
#[derive(Args)]
pub struct ApiKeyCommand {
    /// Service name as it appears in the key file
    pub service: String,

    /// API keys JSON file (overrides config.toml)
    #[arg(long)]
    pub keys_file: Option<PathBuf>,
}

impl ApiKeyCommand {
    pub fn run(&self) -> AppResult<()> {
        let path = match &self.keys_file {
            Some(path) => path.clone(),
            None => AppConfig::get_defaults().paths.apikeys,
        };

        match apikeys::get_apikey(&path, &self.service)? {
            Some(key) => println!("{}", key),
            None => console::warning(&format!("no API key for service: {}", self.service)),
        }

        Ok(())
    }
}

/// List files in a directory
#[derive(Args)]
pub struct ListCommand {
    /// Directory to walk
    pub directory: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> AppResult<()> {
        let files = fsutil::list_dir(&self.directory)?;
        for file in &files {
            println!("{}", file.display());
        }
        console::info(&format!(
            "{} files under {}",
            files.len(),
            self.directory.display()
        ));
        Ok(())
    }
}
