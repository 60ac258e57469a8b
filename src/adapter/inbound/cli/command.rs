//! Command-line interface definitions.
//!
//! Defines the CLI structure for catascan using `clap`: find nearby eye
//! care facilities, scan an eye image, and manage the signed-in user.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Find eye care facilities nearby and scan eye images for cataracts
#[derive(Parser, Debug)]
#[command(name = "catascan")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.catascan/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the catascan CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List eye care facilities around you, nearest first
    Nearby(NearbyArgs),

    /// Upload an eye image and run the cataract prediction
    Scan(ScanArgs),

    /// Remember the user ID sent with scans
    Login(LoginArgs),

    /// Forget the stored user ID
    Logout,
}

/// Arguments for `catascan nearby`.
#[derive(clap::Args, Debug)]
pub struct NearbyArgs {
    /// Search around this latitude instead of the configured source
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Search around this longitude instead of the configured source
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Search radius in meters [default: from config, 10000]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub radius: Option<u32>,
}

/// Arguments for `catascan scan`.
#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Image file to scan
    pub path: PathBuf,
}

/// Arguments for `catascan login`.
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// User identifier issued at sign-up
    pub user_id: String,
}
