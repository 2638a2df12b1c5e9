mod estimate;

use clap::{Parser, Subcommand};

pub use self::estimate::EstimateArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the household consumption and render the report.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the energy saving tips.
    #[clap(name = "tips")]
    Tips,
}
