use std::path::PathBuf;

use clap::Parser;

use crate::format::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "license-compat",
    about = "Report dependency licenses and check them against your project license",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Project license; overrides config and manifest discovery
    #[arg(short, long, value_name = "LICENSE")]
    pub license: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "simple", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Config file [default: ./.license-compat/config.toml, fallback ~/.config/license-compat/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress status lines and the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
