pub mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_plan, print_output};

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let plan = parse_plan(&args)?;
    let result = plan.execute()?;

    print_output(&result.summary(), &args)?;

    Ok(())
}
