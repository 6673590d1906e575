pub mod layout;

pub use layout::LayoutConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "modimage")]
#[command(about = "Builds the per-tier module/package sections of a runtime image")]
pub struct CliConfig {
    /// Path to the TOML image layout file
    #[arg(long)]
    pub layout: String,

    /// Directory the tier sections are written into
    #[arg(long, default_value = "./image-out")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
