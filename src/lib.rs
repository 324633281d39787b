//! City Parser - Wikidata subdivision and metro export
//!
//! Reads city names, queries Wikidata over SPARQL and writes one worksheet
//! per city. The `city-parser` binary wires these modules together.

pub mod config;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod spreadsheet;
pub mod wikidata;

pub use config::Config;
pub use models::{CityTable, Subdivision};
pub use pipeline::{run_pipeline, Outcome};
