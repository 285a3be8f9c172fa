//! CSV output formatting for allocation results.

use crate::models::AllocatedSubnet;
use crate::processing::Allocation;
use colored::Colorize;

use super::terminal::format_field;

/// Header line matching [`csv_row`].
pub fn csv_header() -> String {
    [
        format_field("cnt", 6),
        format_field("name", 24),
        format_field("subnet_cidr", 20),
        format_field("mask", 18),
        format_field("broadcast", 18),
        format_field("hosts", 12),
    ]
    .join(",")
}

/// A single quoted, right-aligned CSV row.
pub fn csv_row(j: usize, s: &AllocatedSubnet) -> String {
    format!(
        r#"{j},{name},{subnet_cidr},{mask},{broadcast},{hosts}"#,
        j = format_field(j, 6),
        name = format_field(&s.name, 24),
        subnet_cidr = format_field(format!("{}/{}", s.network_address, s.prefix), 20),
        mask = format_field(s.mask, 18),
        broadcast = format_field(s.broadcast_address, 18),
        hosts = format_field(s.usable_host_count, 12),
    )
}

/// Print the allocation as CSV to stdout.
pub fn print_csv(allocation: &Allocation) {
    log::info!(
        "#Start print_csv() {} subnets in {}",
        allocation.subnets.len(),
        allocation.parent
    );
    println!("{}", csv_header());
    for (i, s) in allocation.subnets.iter().enumerate() {
        println!("{}", csv_row(i + 1, s));
    }

    if allocation.overflow {
        // stderr keeps the CSV on stdout clean
        eprintln!(
            "#{}# The subnets do not fit into {}",
            "WARNING".on_red(),
            allocation.parent
        );
    }
}
