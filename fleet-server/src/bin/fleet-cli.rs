//! Interactive command-line front end for the stop calculator.

use std::collections::HashMap;
use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_server::fleet::Distance;
use fleet_server::stops::{StopPlanner, deadline_after, sorted_rows};
use fleet_server::swapi::{DEFAULT_BASE_URL, SwapiClient, SwapiConfig};

#[derive(Parser)]
#[command(name = "fleet-cli")]
#[command(about = "Calculate resupply stops for every known starship")]
struct Cli {
    /// Distance to cover, in MGLT (prompts when omitted)
    distance: Option<String>,

    /// Base URL of the starship data source
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Whole-fetch deadline in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let input = match cli.distance {
        Some(distance) => distance,
        None => match prompt_for_distance() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: failed to read input: {e}");
                std::process::exit(1);
            }
        },
    };

    let distance = match Distance::parse(input.trim()) {
        Ok(distance) => distance,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Please enter a valid positive number.");
            std::process::exit(1);
        }
    };

    println!();
    println!("Calculating stops for distance: {distance} MGLT...");

    let config = SwapiConfig::new().with_base_url(cli.base_url);
    let client = match SwapiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let planner = StopPlanner::new(&client);
    let deadline = deadline_after(std::time::Duration::from_secs(cli.timeout));
    let counts = match planner.plan(distance, deadline).await {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("Error calculating stops: {e}");
            std::process::exit(1);
        }
    };

    if counts.is_empty() {
        println!();
        println!("No starships found!");
        std::process::exit(1);
    }

    print_results(distance, &counts);
}

/// Prompt on stdout and read one line from stdin.
fn prompt_for_distance() -> std::io::Result<String> {
    print!("\nEnter distance in mega lights (MGLT): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// Print the sorted results as an aligned table.
fn print_results(distance: Distance, counts: &HashMap<String, i64>) {
    let rows = sorted_rows(counts);
    let max_name = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let rule = "=".repeat(max_name + 20);

    println!();
    println!("Results for {distance} MGLT:");
    println!("{rule}");

    if rows.iter().all(|r| r.stops == 0) {
        println!();
        println!("Note: Distance is too short for any ship to require a resupply stop.");
        println!("All ships can complete this journey without stopping.");
        println!();
    }

    for row in &rows {
        let label = if row.stops == 1 { "stop" } else { "stops" };
        println!("{:<max_name$} | {} {label}", row.name, row.stops);
    }

    println!("{rule}");
}
