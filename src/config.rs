// src/config.rs
use anyhow::{anyhow, Context, Result};
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DATE_HEADER: &str = "Date";
pub const LOCATION_HEADER: &str = "location";
pub const ROWS_PER_HALF: usize = 24;

/// Layout of the scraped observation table.
///
/// The defaults describe the two-halves-side-by-side page: every row of
/// `<font>` cells is one logical column, and the location column goes in
/// front of each half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// CSS selector for the row elements, relative to the document.
    pub row_selector: String,
    /// CSS selector for the cells inside a row.
    pub cell_selector: String,
    pub location_header: String,
    /// Data values per column in one table half.
    pub rows_per_half: usize,
    /// Where the location column is inserted, applied in order.
    pub location_positions: Vec<usize>,
    /// Headers that must be present and get forward-filled.
    pub fill_headers: Vec<String>,
    /// Rows hold records rather than columns; swap them before building columns.
    pub transpose: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_selector: "tr".into(),
            cell_selector: "font".into(),
            location_header: LOCATION_HEADER.into(),
            rows_per_half: ROWS_PER_HALF,
            location_positions: vec![1, 19],
            fill_headers: vec![DATE_HEADER.into()],
            transpose: false,
        }
    }
}

impl TableConfig {
    /// Read a JSON config; missing fields fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading table config {:?}", path))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing table config {:?}", path))
    }

    pub fn row_selector(&self) -> Result<Selector> {
        parse_selector(&self.row_selector)
    }

    pub fn cell_selector(&self) -> Result<Selector> {
        parse_selector(&self.cell_selector)
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    // scraper's error borrows the input, so flatten it to a string
    Selector::parse(css).map_err(|e| anyhow!("invalid CSS selector {:?}: {:?}", css, e))
}
