//! Workbook output: one sheet per city.

mod sheet_name;
mod writer;

pub use sheet_name::{sheet_name, SheetNames, MAX_SHEET_NAME_LEN};
pub use writer::{build_tables, write_workbook};
