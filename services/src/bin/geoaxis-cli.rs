use clap::{Parser, Subcommand};
use geoaxis_services::cli::{CompareDirections, SortAxes, compare_directions, sort_axes};
use geoaxis_services::logging::init_logging;

/// CLI for ordering coordinate system axes
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Brings axes into canonical order
    Sort(SortAxes),

    /// Compares two axis directions
    Compare(CompareDirections),
}

impl Commands {
    fn execute(self) -> Result<(), anyhow::Error> {
        match self {
            Commands::Sort(params) => sort_axes(params),
            Commands::Compare(params) => compare_directions(params),
        }
    }
}

fn run(cli: Cli) -> Result<(), anyhow::Error> {
    init_logging()?;
    cli.command.execute()
}

#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
