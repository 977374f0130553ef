//! Prints the cost maps of the four demo scenarios.
//!
//! Run: cargo run --bin marching [-- config.json]
//! Set `RUST_LOG=debug` to follow the propagation.

use std::io::{self, Write};

use marching_demos::{DemoConfig, DemoError, Scenario, write_grid};

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    log::debug!("config: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for scenario in Scenario::ALL {
        let costs = scenario.run(&config)?;
        writeln!(out, "{}", scenario.title())?;
        write_grid(&mut out, &costs, config.bounds(), config.step)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
