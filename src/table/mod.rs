pub mod columns;
pub mod data_map;

pub use columns::{
    check_alignment, columns_from_cells, extract_cells, get_cols_from_table, location_column,
    transpose, Column,
};
pub use data_map::{build_data_map, get_dict, DataMap};
