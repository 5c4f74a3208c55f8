use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A tool to generate per-pitcher spray chart reports from batted-ball data."
)]
pub struct Cli {
    /// CSV file name inside the `Data/combined_data` directory.
    #[arg(required = true)]
    pub file: PathBuf,

    /// Project root holding `Data/`, `Resources/` and `Reports/`.
    #[arg(long, env = "SPRAY_CHARTS_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Team code whose pitchers get a report.
    #[arg(long, default_value = crate::config::DEFAULT_TEAM)]
    pub team: String,

    /// Where to write the report document.
    /// Defaults to `Reports/pitcher_spray_chart_fall.html` under the base directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print debug info about detected columns and enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
