// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On missing or extra positionals, unknown flags or `--help`, clap prints
/// usage (to stderr for errors) and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
