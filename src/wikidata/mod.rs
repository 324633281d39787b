//! Wikidata SPARQL queries, transport and result aggregation.

mod aggregate;
mod client;
mod query;

pub use aggregate::{aggregate_metro, aggregate_subdivisions, AggregateError};
pub use client::{QueryError, SparqlBinding, SparqlClient, SparqlResponse, SparqlValue};
pub use query::{values_clause, SparqlQueries};
