pub mod config;
pub mod fill;
pub mod scrape;
pub mod table;

pub use config::TableConfig;
pub use fill::{ff_copied, ff_list, ff_slice, Missing};
pub use scrape::{parse_table, parse_table_file};
pub use table::{get_cols_from_table, get_dict, Column, DataMap};
