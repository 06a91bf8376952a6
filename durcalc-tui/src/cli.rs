use clap::{Parser, Subcommand};
use durcalc::{Mode, Operation};

#[derive(Debug, Parser)]
#[command(name = "durcalc")]
#[command(about = "Terminal calculator for durations and dates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive calculator (default)
    Run,
    /// Compute one result and print it
    Eval {
        /// durations, duration-to-date or date-difference
        mode: Mode,
        /// First operand: a duration, or a date for the date modes
        a: String,
        /// Second operand: a duration, or a date for date-difference
        b: String,
        /// Operation to apply (ignored for date-difference)
        #[arg(long, default_value_t = Operation::Plus)]
        operation: Operation,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
