use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load city names from a newline-delimited file.
///
/// Lines are trimmed, blank lines dropped, and repeated names removed keeping
/// the first occurrence. A missing file is an error; an empty result is not.
pub fn load_cities(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        anyhow::bail!("Файл не найден: {}", path.display());
    }

    info!("Loading cities from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read city list {}", path.display()))?;

    let cities = parse_cities(&content);
    debug!("Loaded {} unique cities", cities.len());
    Ok(cities)
}

/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn parse_cities(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    content
        .split(&['\n', '\r'][..])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}
