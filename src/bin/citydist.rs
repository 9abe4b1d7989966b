//! Command-line front end: load a distance file, optionally reduce it, and
//! print either one distance or the whole table.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use u_citydist::loader::load_table;
use u_citydist::render::render_with_width;
use u_citydist::render::FIELD_WIDTH;

/// Query and print triangular city distance tables
#[derive(Parser, Debug)]
#[command(name = "citydist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Distance table file
    file: PathBuf,

    /// Keep only the cities with these initials, in this order
    #[arg(short, long, conflicts_with = "cities")]
    filter: Option<String>,

    /// Keep only these cities, in this order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    cities: Vec<String>,

    /// Print the distance between two cities instead of the table
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
    distance: Vec<String>,

    /// Emit JSON instead of the text grid
    #[arg(long)]
    json: bool,

    /// Field width of the text grid
    #[arg(short, long, default_value_t = FIELD_WIDTH)]
    width: usize,
}

fn run(cli: Cli) -> Result<()> {
    let mut table = load_table(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    info!(cities = table.len(), "table loaded");

    if let Some(filter) = &cli.filter {
        table = table
            .filtered(filter)
            .with_context(|| format!("cannot filter by {filter:?}"))?;
    } else if !cli.cities.is_empty() {
        table = table
            .reduced(&cli.cities)
            .context("cannot reduce to the given cities")?;
    }

    match cli.distance.as_slice() {
        [] => {}
        [from, to] => {
            let d = table
                .distance(from, to)
                .with_context(|| format!("no distance between {from} and {to}"))?;
            if cli.json {
                let out = serde_json::json!({ "from": from, "to": to, "distance": d });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{d}");
            }
            return Ok(());
        }
        _ => bail!("--distance takes exactly two cities"),
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render_with_width(&table, cli.width));
    }
    Ok(())
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
