//! Ball-in-play points over the field, one scatter layer per outcome.

use crate::events::{BattedBall, PlayResult};
use crate::geometry::{polar_to_cart, FieldGeometry, Point, Rect};
use crate::surface::{ChartSurface, ShapeStyle, TextAnchor};

/// Bearings outside this range (degrees, inclusive) are not plotted.
pub const BEARING_MIN: f64 = -40.0;
pub const BEARING_MAX: f64 = 50.0;

pub const LEGEND_TITLE: &str = "Hit Type";

/// Marker area in square points.
const MARKER_AREA_PT2: f64 = 30.0;
const MARKER_EDGE_PT: f64 = 1.0;

/// Lower-left corner of the legend as a fraction of the view.
const LEGEND_ANCHOR: (f64, f64) = (0.08, 0.03);
const LEGEND_FONT_PT: f64 = 8.0;
const LEGEND_TITLE_FONT_PT: f64 = 9.0;
const LEGEND_FRAME: ShapeStyle = ShapeStyle {
    fill: "white",
    stroke: "#cccccc",
    stroke_width: 0.8,
    opacity: 0.9,
};
/// Rough advance width of a glyph relative to the font size.
const GLYPH_WIDTH_EM: f64 = 0.6;

/// Points of one outcome category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayer {
    pub result: PlayResult,
    pub points: Vec<Point>,
}

pub fn in_bearing_range(bearing: f64) -> bool {
    (BEARING_MIN..=BEARING_MAX).contains(&bearing)
}

/// Landing point of a ball hit `distance` feet at `bearing` degrees.
pub fn spray_point(distance: f64, bearing: f64) -> Point {
    polar_to_cart(distance, bearing)
}

/// Hits get their own colour with a black edge; outs, errors and fielder's
/// choices are black with a white edge.
pub fn marker_style(result: PlayResult) -> ShapeStyle {
    let fill = match result {
        PlayResult::Single => "#1f77b4",
        PlayResult::Double => "#ff7f0e",
        PlayResult::Triple => "#2ca02c",
        PlayResult::HomeRun => "#d62728",
        PlayResult::Out | PlayResult::Error | PlayResult::FieldersChoice => "#000000",
    };
    let edge = if result.is_hit() { "black" } else { "white" };
    ShapeStyle::filled(fill, edge, MARKER_EDGE_PT)
}

/// Splits the plottable events into per-outcome layers.
///
/// Layers come in `PlayResult::ALL` order and empty categories are left out,
/// so the legend only lists outcomes that actually appear.
pub fn scatter_layers(events: &[&BattedBall]) -> Vec<ScatterLayer> {
    PlayResult::ALL
        .into_iter()
        .filter_map(|result| {
            let points: Vec<Point> = events
                .iter()
                .filter(|e| e.play_result == Some(result))
                .filter_map(|e| match (e.bearing, e.distance) {
                    (Some(bearing), Some(distance)) if in_bearing_range(bearing) => {
                        Some(spray_point(distance, bearing))
                    }
                    _ => None,
                })
                .collect();
            (!points.is_empty()).then_some(ScatterLayer { result, points })
        })
        .collect()
}

/// Draws the events of one pitcher against one batter side on top of the
/// field and returns the layers that were drawn.
pub fn draw_spray(
    surface: &mut ChartSurface,
    geometry: &FieldGeometry,
    events: &[&BattedBall],
) -> Vec<ScatterLayer> {
    surface.set_view(geometry.view);
    surface.set_equal_aspect(true);

    let layers = scatter_layers(events);
    let radius_pt = MARKER_AREA_PT2.sqrt() / 2.0;
    for layer in &layers {
        let style = marker_style(layer.result);
        for &point in &layer.points {
            surface.marker(point, radius_pt, &style, "spray-point");
        }
    }

    if !layers.is_empty() {
        draw_legend(surface, &layers);
    }
    layers
}

fn draw_legend(surface: &mut ChartSurface, layers: &[ScatterLayer]) {
    let view = surface.view();
    let font = surface.units(LEGEND_FONT_PT);
    let title_font = surface.units(LEGEND_TITLE_FONT_PT);
    let pad = 0.4 * font;
    let handle = 2.0 * font;
    let handle_gap = 0.8 * font;
    let row = 1.5 * font;
    let title_row = 1.4 * title_font;

    let label_width = layers
        .iter()
        .map(|l| l.result.as_str().len() as f64 * GLYPH_WIDTH_EM * font)
        .fold(0.0, f64::max);
    let title_width = LEGEND_TITLE.len() as f64 * GLYPH_WIDTH_EM * title_font;
    let width = 2.0 * pad + title_width.max(handle + handle_gap + label_width);
    let height = 2.0 * pad + title_row + row * layers.len() as f64;

    let x0 = view.min.0 + LEGEND_ANCHOR.0 * view.width();
    let y0 = view.min.1 + LEGEND_ANCHOR.1 * view.height();
    let top = y0 + height;
    surface.rectangle(
        Rect {
            min: (x0, y0),
            max: (x0 + width, top),
        },
        &LEGEND_FRAME,
        "legend-frame",
    );

    surface.text(
        (x0 + width / 2.0, top - pad - title_font),
        LEGEND_TITLE,
        LEGEND_TITLE_FONT_PT,
        false,
        TextAnchor::Middle,
        "legend-title",
    );

    let radius_pt = MARKER_AREA_PT2.sqrt() / 2.0;
    for (i, layer) in layers.iter().enumerate() {
        let center_y = top - pad - title_row - row * (i as f64 + 0.5);
        surface.marker(
            (x0 + pad + handle / 2.0, center_y),
            radius_pt,
            &marker_style(layer.result),
            "legend-marker",
        );
        surface.text(
            (x0 + pad + handle + handle_gap, center_y - 0.35 * font),
            layer.result.as_str(),
            LEGEND_FONT_PT,
            false,
            TextAnchor::Start,
            "legend-entry",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ball(result: PlayResult, bearing: f64, distance: f64) -> BattedBall {
        BattedBall {
            play_result: Some(result),
            bearing: Some(bearing),
            distance: Some(distance),
            ..Default::default()
        }
    }

    #[test]
    fn bearing_range_is_inclusive() {
        assert!(in_bearing_range(-40.0));
        assert!(in_bearing_range(50.0));
        assert!(in_bearing_range(0.0));
        assert!(!in_bearing_range(-41.0));
        assert!(!in_bearing_range(51.0));
    }

    #[test]
    fn straight_away_lands_on_the_y_axis() {
        let (x, y) = spray_point(375.0, 0.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 375.0);

        let (x, y) = spray_point(200.0, 30.0);
        assert_relative_eq!(x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(y, 200.0 * 3f64.sqrt() / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn boundary_bearings_are_filtered() {
        let events = [
            ball(PlayResult::Single, -41.0, 200.0),
            ball(PlayResult::Single, -40.0, 200.0),
            ball(PlayResult::Single, 50.0, 200.0),
            ball(PlayResult::Single, 51.0, 200.0),
        ];
        let refs: Vec<&BattedBall> = events.iter().collect();
        let layers = scatter_layers(&refs);
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].points.len(), 2);
    }

    #[test]
    fn layers_follow_category_order_and_skip_unknowns() {
        let events = [
            ball(PlayResult::Out, 5.0, 150.0),
            ball(PlayResult::HomeRun, -10.0, 410.0),
            ball(PlayResult::Single, 20.0, 180.0),
            BattedBall {
                bearing: Some(0.0),
                distance: Some(100.0),
                ..Default::default()
            },
            BattedBall {
                play_result: Some(PlayResult::Double),
                bearing: Some(0.0),
                ..Default::default()
            },
        ];
        let refs: Vec<&BattedBall> = events.iter().collect();
        let order: Vec<PlayResult> = scatter_layers(&refs).iter().map(|l| l.result).collect();
        assert_eq!(
            order,
            [PlayResult::Single, PlayResult::HomeRun, PlayResult::Out]
        );
    }

    #[test]
    fn outs_are_black_with_white_edges() {
        for result in [PlayResult::Out, PlayResult::Error, PlayResult::FieldersChoice] {
            let style = marker_style(result);
            assert_eq!((style.fill, style.stroke), ("#000000", "white"));
        }
        assert_eq!(marker_style(PlayResult::Triple).fill, "#2ca02c");
        assert_eq!(marker_style(PlayResult::Triple).stroke, "black");
    }

    #[test]
    fn legend_lists_only_present_categories() {
        let events = [
            ball(PlayResult::Double, 0.0, 300.0),
            ball(PlayResult::Double, 10.0, 310.0),
            ball(PlayResult::Error, -20.0, 90.0),
        ];
        let refs: Vec<&BattedBall> = events.iter().collect();
        let mut surface = ChartSurface::new();
        let layers = draw_spray(&mut surface, &FieldGeometry::default(), &refs);
        assert_eq!(layers.len(), 2);

        let svg = surface.into_svg();
        assert_eq!(svg.matches("class=\"spray-point\"").count(), 3);
        assert_eq!(svg.matches("class=\"legend-entry\"").count(), 2);
        assert_eq!(svg.matches("class=\"legend-title\"").count(), 1);
        assert!(svg.contains("Double") && svg.contains("Error"));
    }

    #[test]
    fn no_plottable_points_means_no_legend() {
        let events = [ball(PlayResult::Single, 80.0, 300.0)];
        let refs: Vec<&BattedBall> = events.iter().collect();
        let mut surface = ChartSurface::new();
        let layers = draw_spray(&mut surface, &FieldGeometry::default(), &refs);
        assert!(layers.is_empty());
        assert!(surface.is_empty());
    }
}
