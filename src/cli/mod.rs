//! Command-line surface.

pub mod output;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ca",
    version,
    about = "Career Advisor - score professional profiles against a built-in career catalog"
)]
pub struct Cli {
    /// Run the scripted demonstration instead of the interactive menu
    #[arg(long)]
    pub demo: bool,

    /// Machine-readable JSON output (demo results and errors)
    #[arg(long)]
    pub robot: bool,

    /// How many careers a recommendation shows
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub top: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,
}
