use std::path::PathBuf;

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "vroum-cli")]
#[clap(about = "Generate and inspect per-identity images", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        help = "JSON config file (defaults apply when omitted)"
    )]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Commands,
}
