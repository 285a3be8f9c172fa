//! Terminal output utilities.
//!
//! Plain table rendering of an allocation, the overflow warning and the
//! unassigned-address summary.

use crate::models::MAX_LENGTH;
use crate::processing::Allocation;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Table rows for an allocation, header first.
pub fn table_lines(allocation: &Allocation) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<16} {:<18} {:<16} {:<16} {:>6}",
        "name", "network", "mask", "broadcast", "hosts"
    )];
    for s in &allocation.subnets {
        lines.push(format!(
            "{:<16} {:<18} {:<16} {:<16} {:>6}",
            s.name,
            format!("{}/{}", s.network_address, s.prefix),
            s.mask.to_string(),
            s.broadcast_address.to_string(),
            s.usable_host_count
        ));
    }
    lines
}

/// Leftover parent addresses as a formula, e.g. `2^(32-24) - 2^(32-27) = 224`.
pub fn unassigned_summary(allocation: &Allocation) -> String {
    let mut summary = format!("2^({MAX_LENGTH}-{})", allocation.parent.prefix());
    for s in allocation.by_prefix() {
        summary.push_str(&format!(" - 2^({MAX_LENGTH}-{})", s.prefix));
    }
    summary.push_str(&format!(" = {}", allocation.unassigned_addresses()));
    summary
}

/// Print the allocation as a table to stdout.
pub fn print_table(allocation: &Allocation) {
    log::info!(
        "#Start print_table() {} subnets in {}",
        allocation.subnets.len(),
        allocation.parent
    );
    for (i, line) in table_lines(allocation).iter().enumerate() {
        if i == 0 {
            println!("{}", line.as_str().bold());
        } else {
            println!("{line}");
        }
    }

    if allocation.overflow {
        println!(
            "\n#{}# The subnets do not fit into {}\n",
            "WARNING".on_red(),
            allocation.parent
        );
    }

    println!("\nUnassigned addresses after the subnets:");
    println!("{}", unassigned_summary(allocation));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NetworkBlock, SortOrder, SubnetRequest};
    use crate::processing::calculate_subnets;

    fn sample() -> Allocation {
        let parent = NetworkBlock::parse("192.168.0.0", "24", false).unwrap();
        let reqs = vec![SubnetRequest::new("lan", 100), SubnetRequest::new("p2p", 2)];
        calculate_subnets(&parent, &reqs, SortOrder::Desc).unwrap()
    }

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_table_lines() {
        let lines = table_lines(&sample());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("name"));
        assert!(lines[1].starts_with("lan"));
        assert!(lines[1].contains("192.168.0.0/25"));
        assert!(lines[1].contains("255.255.255.128"));
        assert!(lines[2].contains("192.168.0.128/30"));
        assert!(lines[2].trim_end().ends_with('2'));
    }

    #[test]
    fn test_unassigned_summary() {
        assert_eq!(
            unassigned_summary(&sample()),
            "2^(32-24) - 2^(32-25) - 2^(32-30) = 124"
        );
    }
}
