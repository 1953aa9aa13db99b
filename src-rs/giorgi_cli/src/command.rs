use clap::{ArgAction, Parser, Subcommand};

/// giorgi units CLI
#[derive(Parser)]
#[command(name = "giorgi")]
#[command(version, about = "Convert and inspect physical quantities", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Number of decimal places in printed values
    #[arg(long, short, global = true, default_value_t = 3)]
    pub precision: usize,

    /// Log more details (-v for debug, -vv for trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// The value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Symbol or name of the unit the value is in
        from: String,

        /// Symbol or name of the unit to convert to
        to: String,
    },
    /// List the units of a dimension, or of every dimension
    Units {
        /// Name of the dimension, such as `length` or `magnetic_flux`
        dimension: Option<String>,
    },
    /// List the predefined dimensions and their main units
    Dimensions,
    /// Print a value in the prefixed unit that reads best
    BestFit {
        /// The value to print
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Symbol or name of the unit the value is in
        unit: String,
    },
}
