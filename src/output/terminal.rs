//! Terminal output utilities.
//!
//! Renders a [`CidrReport`] as one labelled line per value.

use super::report::CidrReport;
use colored::Colorize;
use std::net::Ipv4Addr;

/// Width the labels are padded to, including the trailing colon.
const LABEL_WIDTH: usize = 28;

/// Format a value behind a left-aligned, bold label.
///
/// # Arguments
/// * `label` - Text shown before the colon
/// * `value` - The value to print
/// * `width` - The minimum width of the label column
pub fn format_line<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{:<width$}", format!("{label}:"));
    format!("{} {}", label.bold(), value.to_string())
}

fn optional_addr(addr: Option<Ipv4Addr>) -> String {
    addr.map_or_else(|| "none".to_string(), |a| a.to_string())
}

/// Render the whole report, one line per field, no trailing newline.
pub fn render_report(report: &CidrReport) -> String {
    let private = if report.private {
        "true".green()
    } else {
        "false".yellow()
    };
    [
        format_line("IP address", report.ip_address, LABEL_WIDTH),
        format_line("Network Address", report.network_address, LABEL_WIDTH),
        format_line("Broadcast Address", report.broadcast_address, LABEL_WIDTH),
        format_line("Binary Subnet Mask", &report.subnet_mask, LABEL_WIDTH),
        format_line(
            "First usable host IP",
            optional_addr(report.first_usable),
            LABEL_WIDTH,
        ),
        format_line(
            "Penultimate usable host IP",
            optional_addr(report.last_usable),
            LABEL_WIDTH,
        ),
        format_line("Number of usable Hosts", report.usable_hosts, LABEL_WIDTH),
        format_line("IP class", report.ip_class, LABEL_WIDTH),
        format_line("IP type private", private, LABEL_WIDTH),
    ]
    .join("\n")
}
