use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eloview")]
#[command(about = "Convert captured Elo logs into calibrated baseviews", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace holding config.toml (defaults to ELOVIEW_PATH or the data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify a capture log and write its events as JSON")]
    Parse {
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(about = "Calibrate a capture log against match details and build a baseview")]
    Convert {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long = "md")]
        match_details: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
