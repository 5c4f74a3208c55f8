//! Draws the fixed ballpark background.

use crate::assets::EmbeddedImage;
use crate::geometry::FieldGeometry;
use crate::surface::{ChartSurface, ShapeStyle};

const OUTFIELD: ShapeStyle = ShapeStyle::filled("#9fd19f", "black", 1.2);
const INFIELD_DIRT: ShapeStyle = ShapeStyle::filled("#efe3cf", "black", 1.2);
const INFIELD_GRASS: ShapeStyle = ShapeStyle::filled("#9fd39b", "black", 1.2);
const MOUND: ShapeStyle = ShapeStyle::filled("#d2b48c", "black", 1.2);
const BAG: ShapeStyle = ShapeStyle::filled("white", "black", 1.3);

/// Draws the field onto `surface`, back to front: outfield, watermark,
/// infield dirt, infield grass, mound, bases, home plate.
///
/// The result depends only on `geometry` and the watermark, so drawing the
/// same field twice yields the same shapes. Also fixes the view to the
/// field limits with equal x/y scale; no axes are ever drawn.
pub fn draw_field(surface: &mut ChartSurface, geometry: &FieldGeometry, watermark: &EmbeddedImage) {
    surface.polygon(&geometry.outfield_outline(), &OUTFIELD, "outfield");

    surface.image(
        geometry.watermark_rect(watermark.aspect_ratio()),
        &watermark.data_uri,
        geometry.watermark_alpha,
        "watermark",
    );

    surface.polygon(&geometry.infield_dirt(), &INFIELD_DIRT, "infield-dirt");
    surface.polygon(&geometry.grass_diamond(), &INFIELD_GRASS, "infield-grass");
    surface.circle(geometry.mound_center, geometry.mound_radius, &MOUND, "mound");

    for base in geometry.bases() {
        surface.polygon(&base.corners(), &BAG, "base");
    }
    surface.polygon(&geometry.home_plate(), &BAG, "home-plate");

    surface.set_view(geometry.view);
    surface.set_equal_aspect(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watermark() -> EmbeddedImage {
        EmbeddedImage {
            data_uri: "data:image/png;base64,AAAA".to_string(),
            width: 150,
            height: 41,
        }
    }

    fn drawn_field() -> String {
        let mut surface = ChartSurface::new();
        draw_field(&mut surface, &FieldGeometry::default(), &watermark());
        assert_eq!(surface.len(), 9);
        surface.into_svg()
    }

    #[test]
    fn layers_are_stacked_back_to_front() {
        let svg = drawn_field();
        let order = [
            "outfield",
            "watermark",
            "infield-dirt",
            "infield-grass",
            "mound",
            "class=\"base\"",
            "home-plate",
        ];
        let positions: Vec<usize> = order.iter().map(|c| svg.find(c).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(svg.matches("class=\"base\"").count(), 3);
    }

    #[test]
    fn watermark_is_translucent() {
        let svg = drawn_field();
        assert!(svg.contains("opacity=\"0.4\""));
        assert!(svg.contains("data:image/png;base64,AAAA"));
    }

    #[test]
    fn drawing_is_deterministic() {
        assert_eq!(drawn_field(), drawn_field());
    }
}
