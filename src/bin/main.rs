use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_tracker::console::Console;
use portfolio_tracker::export::{self, ExportFormat};
use portfolio_tracker::portfolio;
use portfolio_tracker::prices::PriceTable;
use portfolio_tracker::summary::summarize;

/// Interactive stock portfolio tracker.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_tracker=warn")),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut console = Console::stdio();
    run(&mut console)
}

fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let prices = PriceTable::new();

    console.println("Stock Portfolio Tracker")?;
    console.println("Listed prices:")?;
    for (symbol, price) in prices.iter() {
        console.println(format!("  {} : ${price:.2}", symbol.cyan()))?;
    }

    let portfolio = portfolio::collect(console, &prices)?;
    if portfolio.is_empty() {
        console.println("\nNo holdings entered, nothing to do.")?;
        return Ok(());
    }
    debug!("collected {}", portfolio);

    let summary = summarize(&portfolio);
    console.println(format!("\n--- Portfolio Summary ---\n{summary}"))?;

    if console.confirm("\nSave the summary to a file? (y/N): ")? {
        let format = prompt_format(console)?;
        let path = export::write_summary(&summary, format, Path::new("."))?;
        console.println(format!("Saved {} to {}", format, path.display()))?;
    }

    Ok(())
}

fn prompt_format<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<ExportFormat> {
    loop {
        let input = console.prompt("Format (csv/txt) [csv]: ")?;
        if input.is_empty() {
            return Ok(ExportFormat::Csv);
        }
        match input.parse::<ExportFormat>() {
            Ok(format) => return Ok(format),
            Err(_) => console.println("Unknown format, choose csv or txt.")?,
        }
    }
}
