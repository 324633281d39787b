//! Core data models for the city export.

pub mod city;
pub mod table;

pub use city::{MetroMap, Subdivision, SubdivisionMap, NO_DATA, NO_METRO};
pub use table::{CityTable, COLUMN_HEADERS};
