//! Page rendering and the multi-page report document.
//!
//! The document is a single self-contained HTML file: one letter-sized
//! `.page` section per page, charts inlined as SVG and logos embedded as
//! PNG data URIs. Printing it yields one sheet per page.

use crate::assets::Logos;
use crate::error::AppError;
use crate::events::{BattedBall, BatterSide, DateRange};
use crate::field::draw_field;
use crate::geometry::FieldGeometry;
use crate::layout;
use crate::spray::draw_spray;
use crate::surface::ChartSurface;
use hypertext::{html_elements, maud, GlobalAttributes, PreEscaped as Raw};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const DOCUMENT_TITLE: &str = "Pitcher Spray Charts";

const STYLESHEET: &str = r#"
@page { size: 8.5in 11in; margin: 0; }
body { margin: 0; background: #7f7f7f; font-family: "DejaVu Sans", Helvetica, Arial, sans-serif; }
.page { position: relative; width: 8.5in; height: 11in; margin: 0 auto 0.25in; background: white; overflow: hidden; break-after: page; page-break-after: always; }
.logo { position: absolute; width: 1.5in; height: 1.5in; z-index: 10; }
.title { position: absolute; top: 0.22in; left: 0; right: 0; padding-top: 1.2em; text-align: center; font-size: 16pt; font-weight: bold; line-height: 1.2; color: black; z-index: 5; }
.chart { position: absolute; }
@media print { body { background: none; } .page { margin: 0; } }
"#;

/// One finished page of the report.
#[derive(Debug, Clone)]
pub struct ReportPage {
    pub pitcher: String,
    pub side: BatterSide,
    pub date_range: DateRange,
    pub chart_svg: String,
    /// Number of plotted balls in play.
    pub points: usize,
    /// Number of outcome categories in the legend.
    pub legend_entries: usize,
}

impl ReportPage {
    pub fn title_lines(&self) -> [String; 3] {
        [
            self.pitcher.clone(),
            format!("Spray Chart vs {} Hitters", self.side.label()),
            self.date_range.to_string(),
        ]
    }
}

/// Draws the field and then the spray points of `events` on a fresh
/// surface.
pub fn render_page(
    pitcher: &str,
    side: BatterSide,
    events: &[&BattedBall],
    date_range: DateRange,
    geometry: &FieldGeometry,
    logos: &Logos,
) -> ReportPage {
    let mut surface = ChartSurface::new();
    draw_field(&mut surface, geometry, &logos.watermark);
    let layers = draw_spray(&mut surface, geometry, events);

    ReportPage {
        pitcher: pitcher.to_string(),
        side,
        date_range,
        chart_svg: surface.into_svg(),
        points: layers.iter().map(|l| l.points.len()).sum(),
        legend_entries: layers.len(),
    }
}

/// Streams pages into the report file as they are rendered.
pub struct DocumentWriter {
    path: PathBuf,
    out: BufWriter<File>,
    header_logo: String,
    pages: usize,
}

impl DocumentWriter {
    /// Creates the report file (and its directory) and writes the document
    /// head.
    pub fn create(path: &Path, logos: &Logos) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);

        let head: String = maud! {
            head {
                meta charset="utf-8";
                title { (DOCUMENT_TITLE) }
                style { (Raw(STYLESHEET)) }
            }
        }
        .render().into_string();
        write!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n{head}\n<body>\n")?;

        Ok(Self {
            path: path.to_path_buf(),
            out,
            header_logo: logos.header.data_uri.clone(),
            pages: 0,
        })
    }

    /// Appends one page: header logo, title and chart.
    pub fn append_page(&mut self, page: &ReportPage) -> Result<(), AppError> {
        let (logo_left, logo_top) = layout::header_logo_in();
        let logo_style = format!("left: {logo_left:.2}in; top: {logo_top:.2}in;");
        let (left, top, width, height) = layout::chart_box_in();
        let chart_style =
            format!("left: {left:.3}in; top: {top:.3}in; width: {width:.3}in; height: {height:.3}in;");
        let [name, matchup, dates] = page.title_lines();

        let header_logo = self.header_logo.as_str();
        let markup: String = maud! {
            div class="page" {
                img class="logo" src=(header_logo) alt="Team logo" style=(logo_style.as_str());
                div class="title" {
                    div { (name.as_str()) }
                    div { (matchup.as_str()) }
                    div { (dates.as_str()) }
                }
                div class="chart" style=(chart_style.as_str()) {
                    (Raw(page.chart_svg.as_str()))
                }
            }
        }
        .render().into_string();

        writeln!(self.out, "{markup}")?;
        self.pages += 1;
        log::debug!(
            "page {}: {} vs {} hitters, {} points",
            self.pages,
            page.pitcher,
            page.side.label(),
            page.points
        );
        Ok(())
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Closes the document and returns where it was written.
    pub fn finish(mut self) -> Result<PathBuf, AppError> {
        write!(self.out, "</body>\n</html>\n")?;
        self.out.flush()?;
        Ok(self.path)
    }
}
