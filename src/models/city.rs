//! Per-city records aggregated from SPARQL results.

use std::collections::HashMap;

/// Placeholder for a missing subdivision or district label.
pub const NO_DATA: &str = "Нет данных";
/// Placeholder for a city without any metro station.
pub const NO_METRO: &str = "метро нет";

/// First-level subdivision of a city together with one of its own
/// subdivisions (the "district of a district").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdivision {
    pub name: String,
    pub district: String,
}

impl Subdivision {
    pub fn new(name: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
        }
    }

    /// The pair used when a city has no subdivision rows at all.
    pub fn sentinel() -> Self {
        Self::new(NO_DATA, NO_DATA)
    }
}

/// City → subdivision pairs
pub type SubdivisionMap = HashMap<String, Vec<Subdivision>>;

/// City → metro station labels
pub type MetroMap = HashMap<String, Vec<String>>;
