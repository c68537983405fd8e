mod args;
mod commands;
mod duration;
pub mod record;
pub mod types;
pub mod views;

pub use args::Cli;
pub use commands::run;
