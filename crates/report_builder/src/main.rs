//! Report Builder CLI
//!
//! Roster JSON export -> HTML report.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Render a tabletop roster export into an HTML report", long_about = None)]
struct Cli {
    /// Input roster JSON file path
    input: PathBuf,

    /// Output HTML file path
    #[arg(long, default_value = "out.html")]
    out: PathBuf,

    /// Also print an unstyled render to stdout
    #[arg(long, default_value = "false")]
    print: bool,

    /// Omit the embedded stylesheet from the written report
    #[arg(long, default_value = "false")]
    no_css: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print {
        print!("{}", report_builder::render_roster_file(&cli.input, false)?);
    }
    report_builder::write_report(&cli.input, &cli.out, !cli.no_css)?;
    println!("Report written: {}", cli.out.display());
    Ok(())
}
