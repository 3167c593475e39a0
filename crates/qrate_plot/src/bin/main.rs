use anyhow::Context;
use clap::Parser;
use qrate_plot::{SpecPlotOptions, plot_dir};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_DEFAULT: &str = "warn,qrate_plot=info,qrate_io_fs=info,qrate_io_xlsx=info";

#[derive(Parser)]
#[command(name = "qrate-plot")]
#[command(version)]
#[command(about = "Collect *.out benchmark files in the current directory into plot.xlsx")]
#[command(long_about = "Collect *.out benchmark files in the current directory into plot.xlsx

Each file becomes one worksheet named after the file. For every line, tokens
1 and 2 (0-based) are the row and column, token 4 is the value:

  DATAOUT 4 8 1000000 12.34 3.08   ->   (4,8)=12.34, (0,8)=8, (4,0)=4

Cell (1,1) of every sheet is seeded with 0. The first malformed line aborts
the run and no workbook is written. Parsed tokens are echoed to stdout;
diagnostics go to stderr and honour RUST_LOG.")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| LOG_FILTER_DEFAULT.into()),
        )
        .init();

    let options = SpecPlotOptions::default();
    let report = plot_dir(&options).with_context(|| {
        format!(
            "failed to build {}",
            options.resolve_file_out().display()
        )
    })?;
    info!("{report}");
    Ok(())
}
