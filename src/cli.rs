use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  sp500-return             Display S&P 500 return
  sp500-return --json      Output as JSON
  sp500-return --no-color  Disable colors";

/// Displays the S&P 500 one-year return from Yahoo Finance.
#[derive(Parser)]
#[command(version, after_help = EXAMPLES)]
pub struct Cli {
    /// Outputs data as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Disables colored output
    #[arg(long)]
    pub no_color: bool,
}
