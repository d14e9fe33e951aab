use cidr_calc::config::Config;
use cidr_calc::output::{render_json, render_report};
use cidr_calc::{calculate, init_logging, prompt_address};
use colored::Colorize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse_args();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let raw = match config.address.clone() {
        Some(address) => address,
        None => prompt_address(
            std::io::stdin().lock(),
            std::io::stdout(),
            "Enter raw address: ",
        )?,
    };

    let report = match calculate(&raw, config.private_ranges()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if config.json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(())
}
