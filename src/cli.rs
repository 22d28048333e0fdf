use clap::Parser;

use crate::dispatch::IdentifierStyle;

/// Command-line arguments for the fuzzling target binary.
#[derive(Debug, Parser)]
#[command(
    name = "fuzzling",
    version,
    about = "A deterministic multi-path target for exercising fuzzing harnesses.",
    long_about = None
)]
pub struct Args {
    /// Input string that steers the decision tree.
    ///
    /// Harnesses feed arbitrary strings, so hyphen-leading values are
    /// accepted here rather than rejected as unknown flags.
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Report each visited node to the log output.
    #[arg(long)]
    pub trace: bool,

    /// Print terminal identifiers in lowercase.
    #[arg(long)]
    pub lowercase: bool,
}

impl Args {
    pub fn style(&self) -> IdentifierStyle {
        if self.lowercase {
            IdentifierStyle::Lowercase
        } else {
            IdentifierStyle::Uppercase
        }
    }
}
