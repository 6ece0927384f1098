use clap::Parser;
use std::path::PathBuf;

use badgegen::registry::portfolio_companies;
use badgegen::runner;

#[derive(Parser)]
#[command(name = "badgegen")]
#[command(about = "Generate placeholder logo badges for portfolio companies")]
struct Cli {
    /// Output directory for generated logos
    #[arg(long, value_name = "DIR", default_value = "client/public/logos")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let entries = portfolio_companies();
    let summary = runner::run(&entries, &args.out)?;

    println!(
        "\nDone: {} created, {} skipped, {} failed",
        summary.created, summary.skipped, summary.failed
    );
    Ok(())
}
