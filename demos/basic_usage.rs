// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the tomlcfg crate.
//!
//! This example demonstrates:
//! - Declaring settings with defaults on the default registry
//! - Declaring settings on a separate registry
//! - Loading a TOML file over the defaults
//! - Reporting load errors
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- /path/to/myconfig.conf
//! ```

use std::time::Duration;
use tomlcfg::prelude::*;

const SAMPLE: &str = r#"
country = "USA"

[atlanta]
enabled = true
population = 432427
temperature = 99.6

[network]
timeout = "2s"
"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== tomlcfg: Basic Usage ===\n");

    let country = tomlcfg::declare_string("country", "Unknown");
    let atlanta_enabled = tomlcfg::declare_bool("atlanta.enabled", false);
    let atlanta_population = tomlcfg::declare_int("atlanta.population", 0);
    let atlanta_temperature = tomlcfg::declare_float64("atlanta.temperature", 0.0);
    let timeout = tomlcfg::declare_duration("network.timeout", Duration::from_secs(30));

    // Use the file named on the command line, or write the sample document
    let path = match std::env::args().nth(1) {
        Some(path) => std::path::PathBuf::from(path),
        None => {
            let path = std::env::temp_dir().join("tomlcfg-basic-usage.conf");
            std::fs::write(&path, SAMPLE)?;
            path
        }
    };

    if let Err(err) = tomlcfg::parse(&path) {
        eprintln!("Could not load {}: {}", path.display(), err);
        return Err(err.into());
    }

    println!("country             = {}", country.get());
    println!("atlanta.enabled     = {}", atlanta_enabled.get());
    println!("atlanta.population  = {}", atlanta_population.get());
    println!("atlanta.temperature = {}", atlanta_temperature.get());
    println!("network.timeout     = {:?}", timeout.get());

    // A separate registry only knows its own settings
    println!("\n--- Separate registry ---");
    let network = Registry::new("network settings", ErrorPolicy::ContinueOnError);
    network.declare_duration("network.timeout", Duration::from_secs(30));

    match network.parse(&path) {
        Ok(()) => println!("network settings loaded"),
        Err(err) => println!("network settings rejected the file: {}", err),
    }

    println!("\n--- All settings ---");
    tomlcfg::default_registry().visit(|setting| {
        println!(
            "{:<20} {:<8} default={:<10} current={}",
            setting.key().as_str(),
            setting.kind().to_string(),
            setting.default_value().as_str(),
            setting.current_value()
        );
    });

    Ok(())
}
