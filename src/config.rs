//! Resolution of every path the report run touches.
//!
//! The directory layout under the base directory is fixed; only the base
//! directory, the team code and the output path can be overridden from the
//! command line.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEAM: &str = "CAL_MAT";
pub const DATA_DIR: [&str; 2] = ["Data", "combined_data"];
pub const IMAGES_DIR: [&str; 2] = ["Resources", "images"];
pub const REPORTS_DIR: &str = "Reports";
pub const REPORT_FILE_NAME: &str = "pitcher_spray_chart_fall.html";
pub const LOGO_FILE_NAME: &str = "logo.png";
pub const WATERMARK_FILE_NAME: &str = "logo_transparent.png";

/// Everything a run needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// The resolved CSV path.
    pub input_path: PathBuf,
    /// Opaque logo drawn in the page header.
    pub logo_path: PathBuf,
    /// Transparent logo drawn as a centre-field watermark.
    pub watermark_path: PathBuf,
    /// The multi-page report document.
    pub output_path: PathBuf,
    /// Only rows whose `PitcherTeam` equals this code are reported.
    pub team: String,
}

impl ReportConfig {
    pub fn new(base_dir: &Path, file: &Path, team: &str) -> Self {
        let data_dir = DATA_DIR.iter().fold(base_dir.to_path_buf(), |p, d| p.join(d));
        let images_dir = IMAGES_DIR
            .iter()
            .fold(base_dir.to_path_buf(), |p, d| p.join(d));

        Self {
            input_path: data_dir.join(file),
            logo_path: images_dir.join(LOGO_FILE_NAME),
            watermark_path: images_dir.join(WATERMARK_FILE_NAME),
            output_path: base_dir.join(REPORTS_DIR).join(REPORT_FILE_NAME),
            team: team.to_string(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::new(&cli.base_dir, &cli.file, &cli.team);
        if let Some(output) = &cli.output {
            config.output_path = output.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_paths_resolve_under_base_dir() {
        let config = ReportConfig::new(Path::new("/season"), Path::new("fall.csv"), DEFAULT_TEAM);
        assert_eq!(
            config.input_path,
            Path::new("/season/Data/combined_data/fall.csv")
        );
        assert_eq!(
            config.logo_path,
            Path::new("/season/Resources/images/logo.png")
        );
        assert_eq!(
            config.watermark_path,
            Path::new("/season/Resources/images/logo_transparent.png")
        );
        assert_eq!(
            config.output_path,
            Path::new("/season/Reports/pitcher_spray_chart_fall.html")
        );
        assert_eq!(config.team, "CAL_MAT");
    }

    #[test]
    fn cli_overrides_team_and_output() {
        let cli = Cli::parse_from([
            "spray-charts",
            "fall.csv",
            "--base-dir",
            "/season",
            "--team",
            "UCLA",
            "-o",
            "/tmp/out.html",
        ]);
        let config = ReportConfig::from_cli(&cli);
        assert_eq!(config.team, "UCLA");
        assert_eq!(config.output_path, Path::new("/tmp/out.html"));
        assert_eq!(
            config.input_path,
            Path::new("/season/Data/combined_data/fall.csv")
        );
    }
}
