pub mod csv_table;
pub mod frame;
pub mod polars_utils;

pub use csv_table::{CsvTable, read_csv_table};
pub use frame::{read_customer_frame, table_to_frame};
pub use polars_utils::{
    any_to_f64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
};
