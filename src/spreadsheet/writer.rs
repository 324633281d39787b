use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use tracing::{debug, info};

use super::sheet_name::SheetNames;
use crate::models::{CityTable, MetroMap, SubdivisionMap, COLUMN_HEADERS};

/// One table per city, in input order.
pub fn build_tables(
    cities: &[String],
    subdivisions: &SubdivisionMap,
    metro: &MetroMap,
) -> Vec<CityTable> {
    cities
        .iter()
        .map(|city| {
            let subs = subdivisions.get(city).map(Vec::as_slice).unwrap_or(&[]);
            let stations = metro.get(city).map(Vec::as_slice).unwrap_or(&[]);
            CityTable::build(city, subs, stations)
        })
        .collect()
}

/// Write every table to its own sheet and save the workbook once.
pub fn write_workbook(path: &Path, tables: &[CityTable]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_fmt = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let mut names = SheetNames::new();

    for (position, table) in tables.iter().enumerate() {
        let name = names.assign(&table.city, position);
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&name)
            .with_context(|| format!("Invalid sheet name {:?}", name))?;

        for (col, header) in COLUMN_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_fmt)?;
        }
        for (i, row) in table.rows().enumerate() {
            for (col, value) in row.iter().enumerate() {
                sheet.write_string(i as u32 + 1, col as u16, *value)?;
            }
        }
        debug!("Sheet {:?}: {} rows", name, table.len());
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook {}", path.display()))?;
    info!("Wrote {} sheets to {}", tables.len(), path.display());
    Ok(())
}
