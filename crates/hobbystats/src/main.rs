mod bootstrap;
mod chart;
mod printer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hobby_stats::registry::Computation;
use printer::StatPrinter;

/// Compute trip, mileage, and calendar-gap statistics from a directory of
/// personal hobby activity logs.
#[derive(Debug, Parser)]
#[command(name = "hobbystats", version)]
struct Cli {
    /// Directory holding one CSV log per hobby.
    #[arg(long, default_value = "logs")]
    logdir: PathBuf,

    /// Run only the computation at this registry index (see --list).
    #[arg(long)]
    stat: Option<usize>,

    /// Render the computation at this registry index as a bar chart.
    #[arg(long, conflicts_with = "stat")]
    chart: Option<usize>,

    /// List the computation registry and exit.
    #[arg(long)]
    list: bool,

    /// Diagnostic verbosity (error, warn, info, debug).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    if cli.list {
        for (index, comp) in Computation::ALL.iter().enumerate() {
            println!("{:2}  {}", index, comp.label());
        }
        return Ok(());
    }

    tracing::info!("Ingesting logs from {}", cli.logdir.display());
    let store = hobby_data::reader::ingest(&cli.logdir)?;
    let printer = StatPrinter;

    if let Some(index) = cli.stat {
        let comp = lookup(index)?;
        printer.print_kv_stats(comp.label(), &comp.run(&store)?);
        return Ok(());
    }

    if let Some(index) = cli.chart {
        let comp = lookup(index)?;
        let data = comp.run(&store)?;
        chart::draw_bar_chart(&data, comp.label(), "Key", "Value");
        return Ok(());
    }

    // Default: the full report. A computation whose precondition fails (an
    // all-tripcount log set has no mileage, for instance) is reported in
    // place and the rest of the report still prints.
    for comp in Computation::ALL {
        match comp.run(&store) {
            Ok(data) => printer.print_kv_stats(comp.label(), &data),
            Err(err) => printer.print_error(&err),
        }
    }

    Ok(())
}

fn lookup(index: usize) -> Result<Computation> {
    Computation::ALL
        .get(index)
        .copied()
        .with_context(|| {
            format!(
                "No computation at index {} (registry has {} entries; use --list)",
                index,
                Computation::ALL.len()
            )
        })
}
