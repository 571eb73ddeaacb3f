// src/table/data_map.rs
use anyhow::{anyhow, bail, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument, warn};

use crate::config::{TableConfig, DATE_HEADER};
use crate::fill::ff_slice;
use crate::table::Column;

/// Header label → every value seen under it, halves concatenated.
pub type DataMap = BTreeMap<String, Vec<String>>;

/// Merge columns by header and forward-fill the `Date` series.
pub fn get_dict(columns: &[Column]) -> Result<DataMap> {
    fill_required(merge_columns(columns)?, &[DATE_HEADER])
}

/// Same as [`get_dict`], with the filled headers taken from `config`.
#[instrument(level = "debug", skip_all, fields(columns = columns.len()))]
pub fn build_data_map(columns: &[Column], config: &TableConfig) -> Result<DataMap> {
    let headers: Vec<&str> = config.fill_headers.iter().map(String::as_str).collect();
    fill_required(merge_columns(columns)?, &headers)
}

/// First column under a header starts the series, later ones extend it.
/// A column without a header cell is an error.
fn merge_columns(columns: &[Column]) -> Result<DataMap> {
    let mut map = DataMap::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (idx, col) in columns.iter().enumerate() {
        let Some(header) = col.header.as_deref() else {
            bail!("column {} has no header cell", idx);
        };
        let count = seen.entry(header).or_insert(0);
        *count += 1;
        if *count > 2 {
            warn!(header, occurrence = *count, "header appears more than twice");
        }
        map.entry(header.to_string())
            .or_insert_with(Vec::new)
            .extend(col.values.iter().cloned());
    }
    debug!(headers = map.len(), "merged columns");
    Ok(map)
}

fn fill_required(mut map: DataMap, headers: &[&str]) -> Result<DataMap> {
    for &header in headers {
        let series = map
            .get_mut(header)
            .ok_or_else(|| anyhow!("missing required column {:?}", header))?;
        ff_slice(series);
    }
    Ok(map)
}
