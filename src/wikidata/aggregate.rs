//! Reshape SPARQL bindings into per-city lists.
//!
//! Rows are keyed by the `cityLabel` the label service returns. That label is
//! looked up verbatim among the input names: a city Wikidata labels
//! differently from the input line is reported, not guessed at.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use super::client::SparqlBinding;
use crate::models::{MetroMap, Subdivision, SubdivisionMap, NO_DATA, NO_METRO};

const CITY_LABEL: &str = "cityLabel";
const SUBDIVISION_LABEL: &str = "subdivisionLabel";
const DISTRICT_LABEL: &str = "districtLabel";
const METRO_LABEL: &str = "metroLabel";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("result row {row} has no cityLabel")]
    MissingCityLabel { row: usize },
    #[error("result row {row} names city {label:?}, which is not in the input list")]
    UnknownCity { row: usize, label: String },
}

/// Group subdivision rows by city.
///
/// Every city starts with a single sentinel pair, replaced by the first real
/// row for that city.
pub fn aggregate_subdivisions(
    cities: &[String],
    bindings: &[SparqlBinding],
) -> Result<SubdivisionMap, AggregateError> {
    aggregate(cities, bindings, Subdivision::sentinel(), |row| {
        Subdivision::new(
            row.get(SUBDIVISION_LABEL).unwrap_or(NO_DATA),
            row.get(DISTRICT_LABEL).unwrap_or(NO_DATA),
        )
    })
}

/// Group metro station rows by city.
pub fn aggregate_metro(
    cities: &[String],
    bindings: &[SparqlBinding],
) -> Result<MetroMap, AggregateError> {
    aggregate(cities, bindings, NO_METRO.to_string(), |row| {
        row.get(METRO_LABEL).unwrap_or(NO_METRO).to_string()
    })
}

fn aggregate<T, F>(
    cities: &[String],
    bindings: &[SparqlBinding],
    sentinel: T,
    extract: F,
) -> Result<HashMap<String, Vec<T>>, AggregateError>
where
    T: Clone + PartialEq,
    F: Fn(&SparqlBinding) -> T,
{
    let mut data: HashMap<String, Vec<T>> = cities
        .iter()
        .map(|city| (city.clone(), vec![sentinel.clone()]))
        .collect();

    for (row, binding) in bindings.iter().enumerate() {
        let label = binding
            .get(CITY_LABEL)
            .ok_or(AggregateError::MissingCityLabel { row })?;
        let entries = data
            .get_mut(label)
            .ok_or_else(|| AggregateError::UnknownCity {
                row,
                label: label.to_string(),
            })?;

        // A lone sentinel means nothing real has been seen for this city yet.
        if entries.len() == 1 && entries[0] == sentinel {
            entries.clear();
        }
        entries.push(extract(binding));
    }

    debug!("Aggregated {} rows for {} cities", bindings.len(), data.len());
    Ok(data)
}
