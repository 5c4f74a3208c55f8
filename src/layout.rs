//! Page dimensions and the conversion between typographic points and field
//! units.
//!
//! A page is a US letter sheet at 100 px per inch. The chart region covers
//! the figure fraction `[0.05, 0.05, 0.9, 0.95]` (left, bottom, width,
//! height) and the field is scaled to fit its width.

use crate::geometry::Rect;

pub const DPI: f64 = 100.0;
pub const PAGE_WIDTH_IN: f64 = 8.5;
pub const PAGE_HEIGHT_IN: f64 = 11.0;
pub const PAGE_WIDTH_PX: f64 = PAGE_WIDTH_IN * DPI;
pub const PAGE_HEIGHT_PX: f64 = PAGE_HEIGHT_IN * DPI;

/// Chart region as fractions of the page: left, bottom, width, height.
pub const CHART_REGION: [f64; 4] = [0.05, 0.05, 0.9, 0.95];

/// Header logo size in pixels and its offset from the bottom-left corner.
pub const HEADER_LOGO_PX: u32 = 150;
pub const HEADER_LOGO_OFFSET_PX: (f64, f64) = (40.0, 980.0);

pub const TITLE_FONT_PT: f64 = 16.0;

const POINTS_PER_INCH: f64 = 72.0;

/// Pixels on the page per field unit once the view is fitted into the
/// chart region with equal x/y scale.
pub fn pixels_per_unit(view: &Rect) -> f64 {
    let region_w = CHART_REGION[2] * PAGE_WIDTH_PX;
    let region_h = CHART_REGION[3] * PAGE_HEIGHT_PX;
    (region_w / view.width()).min(region_h / view.height())
}

/// Converts a length in points (line widths, font sizes) to field units.
pub fn points_to_units(points: f64, view: &Rect) -> f64 {
    points * DPI / POINTS_PER_INCH / pixels_per_unit(view)
}

/// CSS box of the chart region, in inches from the top-left of the page.
pub fn chart_box_in() -> (f64, f64, f64, f64) {
    let [left, bottom, width, height] = CHART_REGION;
    let top = 1.0 - bottom - height;
    (
        left * PAGE_WIDTH_IN,
        top * PAGE_HEIGHT_IN,
        width * PAGE_WIDTH_IN,
        height * PAGE_HEIGHT_IN,
    )
}

/// CSS position of the header logo, in inches from the top-left of the
/// page. The logo may hang off the top edge.
pub fn header_logo_in() -> (f64, f64) {
    let (x, y) = HEADER_LOGO_OFFSET_PX;
    let top_px = PAGE_HEIGHT_PX - y - f64::from(HEADER_LOGO_PX);
    (x / DPI, top_px / DPI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FieldGeometry;
    use approx::assert_relative_eq;

    #[test]
    fn field_is_fitted_by_width() {
        let view = FieldGeometry::default().view;
        assert_relative_eq!(pixels_per_unit(&view), 765.0 / 720.0, epsilon = 1e-9);
    }

    #[test]
    fn seventy_two_points_is_one_inch() {
        let view = FieldGeometry::default().view;
        let units = points_to_units(72.0, &view);
        assert_relative_eq!(units * pixels_per_unit(&view), DPI, epsilon = 1e-9);
    }

    #[test]
    fn chart_box_sits_at_the_bottom_of_the_page() {
        let (left, top, width, height) = chart_box_in();
        assert_relative_eq!(left, 0.425, epsilon = 1e-9);
        assert_relative_eq!(top, 0.0, epsilon = 1e-9);
        assert_relative_eq!(width, 7.65, epsilon = 1e-9);
        assert_relative_eq!(height, 10.45, epsilon = 1e-9);
    }

    #[test]
    fn header_logo_hangs_over_the_top_edge() {
        let (left, top) = header_logo_in();
        assert_relative_eq!(left, 0.4);
        assert_relative_eq!(top, -0.3, epsilon = 1e-9);
    }
}
