//! Output formatting for allocation results.
//!
//! This module handles formatting and outputting allocations:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Table output with colors
//! - [`json`] - JSON document

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row, print_csv};
pub use json::{print_json, to_json};
pub use terminal::{format_field, print_table, table_lines, unassigned_summary};
