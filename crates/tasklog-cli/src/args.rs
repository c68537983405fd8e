use crate::types::ColorMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tasklog")]
#[command(about = "Render structured task results as readable, timestamped logs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File of JSON task-result records, one per line. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Also print result trees for successful tasks
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Skip the per-host recap at the end of the stream
    #[arg(long)]
    pub no_recap: bool,
}
