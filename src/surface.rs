//! A vector drawing surface in field coordinates.
//!
//! Shapes are recorded in call order, which is also their stacking order,
//! and serialized to an SVG fragment. Field y grows toward centre field, so
//! every coordinate is mirrored on the way out.

use crate::geometry::{FieldGeometry, Point, Rect};
use crate::layout;
use svg::node::element::{Circle, Element, Image, Polygon, Rectangle};
use svg::node::Text as TextNode;
use svg::{Document, Node};

/// Fill and edge of a shape. Edge widths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl ShapeStyle {
    pub const fn filled(fill: &'static str, stroke: &'static str, stroke_width: f64) -> Self {
        Self {
            fill,
            stroke,
            stroke_width,
            opacity: 1.0,
        }
    }
}

/// Horizontal anchor of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

pub struct ChartSurface {
    view: Rect,
    equal_aspect: bool,
    nodes: Vec<Box<dyn Node>>,
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface {
    /// An empty surface showing the default field view.
    pub fn new() -> Self {
        Self {
            view: FieldGeometry::default().view,
            equal_aspect: false,
            nodes: Vec::new(),
        }
    }

    pub fn set_view(&mut self, view: Rect) {
        self.view = view;
    }

    pub fn view(&self) -> Rect {
        self.view
    }

    /// Forces one field unit to cover the same distance on both axes.
    pub fn set_equal_aspect(&mut self, equal: bool) {
        self.equal_aspect = equal;
    }

    /// Number of shapes drawn so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Converts points to field units at the current view.
    pub fn units(&self, points: f64) -> f64 {
        layout::points_to_units(points, &self.view)
    }

    pub fn polygon(&mut self, points: &[Point], style: &ShapeStyle, class: &str) {
        let points = points
            .iter()
            .map(|&p| {
                let (x, y) = flip(p);
                format!("{x:.3},{y:.3}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let polygon = Polygon::new()
            .set("class", class)
            .set("points", points)
            .set("fill", style.fill)
            .set("fill-opacity", style.opacity)
            .set("stroke", style.stroke)
            .set("stroke-width", self.units(style.stroke_width))
            .set("stroke-linejoin", "round");
        self.nodes.push(Box::new(polygon));
    }

    /// A circle whose radius is given in field units.
    pub fn circle(&mut self, center: Point, radius: f64, style: &ShapeStyle, class: &str) {
        let (cx, cy) = flip(center);
        let circle = Circle::new()
            .set("class", class)
            .set("cx", cx)
            .set("cy", cy)
            .set("r", radius)
            .set("fill", style.fill)
            .set("fill-opacity", style.opacity)
            .set("stroke", style.stroke)
            .set("stroke-width", self.units(style.stroke_width));
        self.nodes.push(Box::new(circle));
    }

    /// A circle whose radius is given in points, so it keeps its printed
    /// size whatever the view.
    pub fn marker(&mut self, center: Point, radius_pt: f64, style: &ShapeStyle, class: &str) {
        let radius = self.units(radius_pt);
        self.circle(center, radius, style, class);
    }

    pub fn rectangle(&mut self, rect: Rect, style: &ShapeStyle, class: &str) {
        let (x, y) = flip((rect.min.0, rect.max.1));
        let rectangle = Rectangle::new()
            .set("class", class)
            .set("x", x)
            .set("y", y)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", style.fill)
            .set("fill-opacity", style.opacity)
            .set("stroke", style.stroke)
            .set("stroke-width", self.units(style.stroke_width));
        self.nodes.push(Box::new(rectangle));
    }

    /// Places an image (usually a data URI) stretched over `rect`.
    pub fn image(&mut self, rect: Rect, href: &str, opacity: f64, class: &str) {
        let (x, y) = flip((rect.min.0, rect.max.1));
        let image = Image::new()
            .set("class", class)
            .set("href", href)
            .set("x", x)
            .set("y", y)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("opacity", opacity)
            .set("preserveAspectRatio", "none");
        self.nodes.push(Box::new(image));
    }

    /// Writes `content` with its baseline at `origin`.
    pub fn text(
        &mut self,
        origin: Point,
        content: &str,
        size_pt: f64,
        bold: bool,
        anchor: TextAnchor,
        class: &str,
    ) {
        let (x, y) = flip(origin);
        let mut text = Element::new("text");
        text.assign("class", class);
        text.assign("x", x);
        text.assign("y", y);
        text.assign("font-family", "DejaVu Sans, Helvetica, Arial, sans-serif");
        text.assign("font-size", self.units(size_pt));
        if bold {
            text.assign("font-weight", "bold");
        }
        if anchor == TextAnchor::Middle {
            text.assign("text-anchor", "middle");
        }
        text.append(TextNode::new(content));
        self.nodes.push(Box::new(text));
    }

    /// Serializes everything drawn so far. The surface is consumed so its
    /// shapes are released as soon as the page has been written.
    pub fn into_svg(self) -> String {
        let view = self.view;
        let aspect = if self.equal_aspect {
            "xMidYMid meet"
        } else {
            "none"
        };

        let mut document = Document::new()
            .set("viewBox", (view.min.0, -view.max.1, view.width(), view.height()))
            .set("width", "100%")
            .set("height", "100%")
            .set("preserveAspectRatio", aspect);
        for node in self.nodes {
            document = document.add(node);
        }
        document.to_string()
    }
}

fn flip((x, y): Point) -> Point {
    (x, -y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: ShapeStyle = ShapeStyle::filled("#ffffff", "black", 1.0);

    #[test]
    fn view_box_is_mirrored_vertically() {
        let mut surface = ChartSurface::new();
        surface.set_equal_aspect(true);
        let svg = surface.into_svg();
        assert!(svg.contains(r#"viewBox="-360 -410 720 417""#));
        assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));
    }

    #[test]
    fn shapes_keep_call_order() {
        let mut surface = ChartSurface::new();
        surface.polygon(&[(0.0, 5.0), (10.0, 20.0), (-10.0, 20.0)], &STYLE, "first");
        surface.circle((0.0, 60.5), 9.0, &STYLE, "second");
        assert_eq!(surface.len(), 2);

        let svg = surface.into_svg();
        let first = svg.find("first").unwrap();
        let second = svg.find("second").unwrap();
        assert!(first < second);
        assert!(svg.contains(r#"points="0.000,-5.000 10.000,-20.000 -10.000,-20.000""#));
        assert!(svg.contains(r#"cy="-60.5""#));
    }

    #[test]
    fn centred_bold_text() {
        let mut surface = ChartSurface::new();
        surface.text((0.0, 20.0), "Hit Type", 9.0, true, TextAnchor::Middle, "label");
        let svg = surface.into_svg();
        assert!(svg.contains("Hit Type"));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"y="-20""#));
    }
}
