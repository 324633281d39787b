//! Run configuration.
//!
//! Defaults reproduce the fixed behaviour of the tool: read `cities.txt`,
//! query Wikidata in Russian and write `city_parser.xlsx`. A TOML file may
//! override any subset of the fields.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
pub const DEFAULT_INPUT: &str = "cities.txt";
pub const DEFAULT_OUTPUT: &str = "city_parser.xlsx";
pub const DEFAULT_LANGUAGE: &str = "ru";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!(
    "city-parser/",
    env!("CARGO_PKG_VERSION"),
    " (Wikidata subdivision and metro export)"
);

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// SPARQL endpoint queried with GET
    pub endpoint: String,
    /// Newline-delimited list of city names
    pub input: PathBuf,
    /// Workbook written at the end of the run
    pub output: PathBuf,
    /// Language tag used for the city literals and every label
    pub language: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse the endpoint, rejecting anything that is not an absolute http(s) URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid SPARQL endpoint: {}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Unsupported endpoint scheme: {}", url.scheme());
        }
        Ok(url)
    }
}
