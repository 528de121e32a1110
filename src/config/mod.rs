pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "staff-setup-guide")]
#[command(about = "Print the manual setup steps for the test staff accounts")]
pub struct CliConfig {
    /// TOML file with [[accounts]] entries, replaces the built-in accounts
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
