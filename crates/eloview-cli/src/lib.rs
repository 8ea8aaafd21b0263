mod args;
mod commands;
pub mod handlers;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
