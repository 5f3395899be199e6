use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

pub struct Config {
    pub api_key: String,
}

impl Config {
    /// API key from `VIDQ_API_KEY`, falling back to an `api_key` file in the
    /// per-user config directory.
    pub fn load() -> Result<Config> {
        if let Ok(key) = std::env::var("VIDQ_API_KEY") {
            return Ok(Config { api_key: key });
        }

        let path = Config::key_file()?;
        let key = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "No API key: set VIDQ_API_KEY or create {}",
                path.display()
            )
        })?;
        Ok(Config {
            api_key: key.trim().to_string(),
        })
    }

    fn key_file() -> Result<PathBuf> {
        let pd = ProjectDirs::from("uk.co", "dbrweb", "vidq")
            .context("Unable to determine configuration directories")?;
        Ok(pd.config_dir().join("api_key"))
    }
}
