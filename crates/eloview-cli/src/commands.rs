use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use eloview_runtime::Config;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.log_level.to_string());

    match cli.command {
        Commands::Parse { input, output } => handlers::parse::handle(&input, output.as_deref()),

        Commands::Convert {
            input,
            match_details,
            output,
        } => {
            let config = Config::load(cli.data_dir.as_deref())?;
            handlers::convert::handle(&config, &input, &match_details, output.as_deref())
        }
    }
}

// RUST_LOG wins over --log-level when set
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
