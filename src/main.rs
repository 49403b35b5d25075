use chrono::Local;
use clap::Parser;
use log::info;
use serde_json::json;

use life_weeks::{
    ContextStats, compute_from_str, generate_summary, parse_reference, render_week_grid,
};

/// Visualize a life in weeks from a single birthdate
#[derive(Parser, Debug)]
#[command(name = "life-weeks", version, about)]
struct Cli {
    /// Birthdate as an ISO-8601 date (YYYY-MM-DD)
    #[arg(long, short = 'b')]
    birthdate: String,

    /// Reference instant treated as "now" (YYYY-MM-DD or RFC 3339);
    /// defaults to the current local time
    #[arg(long)]
    now: Option<String>,

    /// Emit the computed statistics as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the week-grid rendering
    #[arg(long)]
    no_grid: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let reference = match &cli.now {
        Some(raw) => parse_reference(raw)?,
        None => Local::now().naive_local(),
    };

    info!(
        "Computing life statistics for birthdate {} at reference instant {}",
        cli.birthdate, reference
    );

    let stats = compute_from_str(&cli.birthdate, reference)?;
    let context = ContextStats::derive(&stats);

    if cli.json {
        let output = json!({ "stats": stats, "context": context });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Life in weeks");
    println!("A simple visualization to reflect on the passage of time");
    println!();
    if !cli.no_grid {
        println!("{}", render_week_grid(&stats));
        println!();
    }
    println!("{}", generate_summary(&stats, &context));

    Ok(())
}
