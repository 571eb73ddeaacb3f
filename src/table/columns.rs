// src/table/columns.rs
use anyhow::{bail, Result};
use scraper::{ElementRef, Selector};
use tracing::{debug, instrument, trace, warn};

use crate::config::TableConfig;

/// One header label plus its data values, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// `None` when the row had no cells at all.
    pub header: Option<String>,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(header: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            header: Some(header.into()),
            values,
        }
    }

    /// First cell is the header, the rest are values.
    /// No cells at all gives a headerless, empty column.
    pub fn from_cells(cells: Vec<String>) -> Self {
        let mut it = cells.into_iter();
        let header = it.next();
        Self {
            header,
            values: it.collect(),
        }
    }
}

/// Text of every `cell` match inside each row, in document order.
pub fn extract_cells<'a, I>(rows: I, cell: &Selector) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    rows.into_iter()
        .map(|row| {
            row.select(cell)
                .map(|el| el.text().collect::<String>())
                .collect()
        })
        .collect()
}

/// Swap rows and columns of a rectangular grid.
///
/// Use this when the table is laid out the usual way round (one record per
/// row); `get_cols_from_table` applies it when `TableConfig::transpose` is set.
pub fn transpose(grid: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
    let width = grid.first().map_or(0, Vec::len);
    if let Some((idx, row)) = grid.iter().enumerate().find(|(_, r)| r.len() != width) {
        bail!(
            "cannot transpose ragged table: row {} has {} cells, expected {}",
            idx,
            row.len(),
            width
        );
    }

    let mut out: Vec<Vec<String>> = (0..width)
        .map(|_| Vec::with_capacity(grid.len()))
        .collect();
    for row in grid {
        for (j, cell) in row.into_iter().enumerate() {
            out[j].push(cell);
        }
    }
    Ok(out)
}

/// The synthetic column tagging one table half with its location.
pub fn location_column(location: &str, config: &TableConfig) -> Column {
    Column::new(
        config.location_header.clone(),
        vec![location.to_string(); config.rows_per_half],
    )
}

/// Wrap already extracted cell text into columns and splice in the
/// location column at each configured position, one after another.
pub fn columns_from_cells(
    grid: Vec<Vec<String>>,
    location: &str,
    config: &TableConfig,
) -> Vec<Column> {
    let mut cols: Vec<Column> = grid
        .into_iter()
        .enumerate()
        .map(|(idx, cells)| {
            if cells.is_empty() {
                warn!(row = idx, "row has no cells; columns after it will be misaligned");
            }
            Column::from_cells(cells)
        })
        .collect();

    let loc = location_column(location, config);
    for &pos in &config.location_positions {
        // past-the-end positions append, like a list insert
        let at = pos.min(cols.len());
        trace!(requested = pos, at, "inserting location column");
        cols.insert(at, loc.clone());
    }
    cols
}

/// Columns from a list of `<tr>` elements.
///
/// By default the rows are taken as they come: each one is one logical
/// column of the final table (the page shows the table in landscape
/// orientation). With `config.transpose` the grid is swapped first.
#[instrument(level = "debug", skip(rows, config))]
pub fn get_cols_from_table<'a, I>(
    rows: I,
    location: &str,
    config: &TableConfig,
) -> Result<Vec<Column>>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let cell = config.cell_selector()?;
    let mut grid = extract_cells(rows, &cell);
    debug!(rows = grid.len(), "extracted cells");
    if config.transpose {
        grid = transpose(grid)?;
        trace!(columns = grid.len(), "transposed");
    }
    Ok(columns_from_cells(grid, location, config))
}

/// Warns about every column whose value count does not fit one table half.
/// Returns how many columns were off.
pub fn check_alignment(columns: &[Column], config: &TableConfig) -> usize {
    let mut off = 0;
    for (idx, col) in columns.iter().enumerate() {
        if col.values.len() != config.rows_per_half {
            warn!(
                column = idx,
                header = ?col.header,
                values = col.values.len(),
                expected = config.rows_per_half,
                "column length does not match table half"
            );
            off += 1;
        }
    }
    off
}
