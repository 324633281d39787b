//! The end-to-end run: city list in, workbook out.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::input::load_cities;
use crate::spreadsheet::{build_tables, write_workbook};
use crate::wikidata::{
    aggregate_metro, aggregate_subdivisions, SparqlClient, SparqlQueries, SparqlResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input held no city names; nothing was queried or written.
    NoCities,
    Written { path: PathBuf, sheets: usize },
}

/// Load cities, run both queries one after the other, aggregate, and write
/// the workbook. Any failure ends the run before the workbook is created.
pub async fn run_pipeline(config: &Config, show_progress: bool) -> Result<Outcome> {
    let cities = load_cities(&config.input)?;
    if cities.is_empty() {
        debug!("No city names in {}", config.input.display());
        return Ok(Outcome::NoCities);
    }
    info!("Querying Wikidata for {} cities", cities.len());

    let queries = SparqlQueries::build(&cities, &config.language);
    let client = SparqlClient::new(config)?;

    let subdivision_results =
        run_query(&client, "subdivisions", &queries.subdivisions, show_progress).await?;
    let metro_results = run_query(&client, "metro stations", &queries.metro, show_progress).await?;

    let subdivisions = aggregate_subdivisions(&cities, &subdivision_results.results.bindings)
        .context("Failed to aggregate subdivision results")?;
    let metro = aggregate_metro(&cities, &metro_results.results.bindings)
        .context("Failed to aggregate metro results")?;

    let tables = build_tables(&cities, &subdivisions, &metro);
    write_workbook(&config.output, &tables)?;

    Ok(Outcome::Written {
        path: config.output.clone(),
        sheets: tables.len(),
    })
}

async fn run_query(
    client: &SparqlClient,
    what: &str,
    query: &str,
    show_progress: bool,
) -> Result<SparqlResponse> {
    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(format!("Fetching {} from {}", what, client.endpoint()));

    let result = client.execute(query).await;
    spinner.finish_and_clear();

    let response = result.with_context(|| format!("Failed to fetch {}", what))?;
    info!("Fetched {} rows of {}", response.results.bindings.len(), what);
    Ok(response)
}
