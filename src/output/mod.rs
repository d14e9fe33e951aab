//! Output formatting for CIDR reports.
//!
//! This module handles building and rendering the derived record:
//! - [`report`] - The [`CidrReport`] record
//! - [`terminal`] - Labelled terminal output with colors
//! - [`json`] - JSON output

mod json;
mod report;
mod terminal;

pub use json::render_json;
pub use report::CidrReport;
pub use terminal::{format_line, render_report};
