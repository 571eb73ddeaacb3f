// src/scrape.rs
use anyhow::{Context, Result};
use scraper::Html;
use std::{fs, path::Path};
use tracing::{info, instrument};

use crate::config::TableConfig;
use crate::table::{build_data_map, check_alignment, get_cols_from_table, DataMap};

/// Parse a saved observation page into a data map tagged with `location`.
#[instrument(level = "info", skip(html, config), fields(bytes = html.len()))]
pub fn parse_table(html: &str, location: &str, config: &TableConfig) -> Result<DataMap> {
    let doc = Html::parse_document(html);
    let rows = config.row_selector()?;

    let cols = get_cols_from_table(doc.select(&rows), location, config)?;
    let off = check_alignment(&cols, config);
    info!(columns = cols.len(), misaligned = off, "built columns");

    build_data_map(&cols, config)
}

#[instrument(level = "info", skip(path, config), fields(path = %path.as_ref().display()))]
pub fn parse_table_file<P: AsRef<Path>>(
    path: P,
    location: &str,
    config: &TableConfig,
) -> Result<DataMap> {
    let html = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read HTML file: {:?}", path.as_ref()))?;
    parse_table(&html, location, config)
        .with_context(|| format!("Failed to parse table in {:?}", path.as_ref()))
}
