//! Command line and environment configuration.

use crate::models::{PrivateRange, NARROW_PRIVATE_RANGES, RFC1918_PRIVATE_RANGES};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cidr-calc")]
#[command(about = "IPv4 CIDR calculator.")]
pub struct Config {
    /// Address in A.B.C.D/P form. Prompted for when omitted.
    pub address: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat all of 172.16.0.0/12 as private, not only 172.16.x.x
    #[arg(long)]
    pub rfc1918: bool,

    /// log4rs YAML configuration file
    #[arg(long, env = "CIDR_CALC_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Private range set selected by the flags.
    pub fn private_ranges(&self) -> &'static [PrivateRange] {
        if self.rfc1918 {
            RFC1918_PRIVATE_RANGES
        } else {
            NARROW_PRIVATE_RANGES
        }
    }
}
