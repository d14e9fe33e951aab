//! IPv4 CIDR calculator.
//!
//! Validates an `A.B.C.D/P` string and derives network, broadcast, mask,
//! usable host range, host count, address class and private status.
//!
//! ```
//! use cidr_calc::calculate;
//! use cidr_calc::models::NARROW_PRIVATE_RANGES;
//! let report = calculate("192.168.1.10/24", NARROW_PRIVATE_RANGES).unwrap();
//! assert_eq!(report.usable_hosts, 254);
//! ```

pub mod config;
pub mod error;
mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::io::{BufRead, Write};

pub use error::CidrError;
pub use logging::init_logging;
use models::PrivateRange;
use output::CidrReport;

/// Validate `raw` and derive its report. Nothing is derived on invalid input.
pub fn calculate(raw: &str, private_ranges: &[PrivateRange]) -> Result<CidrReport, CidrError> {
    let block = processing::parse_cidr(raw).map_err(|e| {
        log::info!("Rejected input '{}': {}", raw.trim(), e);
        e
    })?;
    Ok(CidrReport::new(&block, private_ranges))
}

/// Write `prompt`, then read one line from `input`.
pub fn prompt_address<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    prompt: &str,
) -> std::io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
