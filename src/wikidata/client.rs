//! Wikidata SPARQL client.

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Failure of a single SPARQL request. Nothing is retried.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Ошибка при запросе к Wikidata: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Ошибка при запросе к Wikidata: HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Ошибка при разборе ответа Wikidata: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub results: SparqlResults,
}

#[derive(Debug, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub bindings: Vec<SparqlBinding>,
}

/// One result row: variable name → bound value. Unbound OPTIONAL
/// variables are simply absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct SparqlBinding(pub HashMap<String, SparqlValue>);

#[derive(Debug, Clone, Deserialize)]
pub struct SparqlValue {
    pub value: String,
    #[serde(rename = "xml:lang")]
    pub lang: Option<String>,
}

impl SparqlBinding {
    /// Value bound to `var`, if any.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.0.get(var).map(|v| v.value.as_str())
    }
}

/// Issues SPARQL GET requests against one endpoint.
pub struct SparqlClient {
    client: Client,
    endpoint: Url,
}

impl SparqlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one query and decode the JSON result set.
    pub async fn execute(&self, query: &str) -> Result<SparqlResponse, QueryError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("query", query);
        debug!("SPARQL GET {} ({} bytes of query)", self.endpoint, query.len());

        let response = self
            .client
            .get(url)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        let data: SparqlResponse = response.json().await.map_err(QueryError::Decode)?;
        debug!("Received {} bindings", data.results.bindings.len());
        Ok(data)
    }
}
