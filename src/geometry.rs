//! The ballpark outline as an immutable table of field-distance constants.
//!
//! Coordinates are in feet with home plate at the origin and centre field
//! straight up the positive y axis.

use std::f64::consts::SQRT_2;

/// A point in field coordinates.
pub type Point = (f64, f64);

/// Converts a (radius, bearing in degrees) pair to field coordinates.
///
/// A bearing of 0 points at centre field, so `polar_to_cart(d, 0.0)` is
/// `(0.0, d)`.
pub fn polar_to_cart(radius: f64, bearing_deg: f64) -> Point {
    let theta = bearing_deg.to_radians();
    (radius * theta.sin(), radius * theta.cos())
}

/// Outfield wall as (distance, bearing) pairs from the left to the right
/// foul pole.
pub const OUTFIELD_WALL: &[(f64, f64)] = &[
    (330.0, -45.0),
    (330.0, -40.0),
    (335.0, -35.0),
    (340.0, -31.0),
    (345.0, -28.0),
    (350.0, -25.5),
    (355.0, -23.5),
    (360.0, -21.5),
    (365.0, -19.5),
    (370.0, -18.0),
    (375.0, -16.5),
    (380.0, -15.5),
    (385.0, -14.0),
    (387.0, -13.5),
    (390.0, -13.0),
    (392.0, -12.3),
    (394.0, -11.0),
    (396.0, -9.0),
    (397.0, -7.0),
    (398.0, -5.0),
    (399.0, -3.0),
    (400.0, 0.0),
    (399.0, 3.0),
    (398.0, 5.0),
    (397.0, 7.0),
    (396.0, 10.0),
    (394.0, 10.5),
    (392.0, 11.0),
    (390.0, 11.44),
    (385.0, 12.6),
    (380.0, 13.8),
    (375.0, 15.0),
    (370.0, 16.44),
    (365.0, 17.9),
    (360.0, 19.5),
    (355.0, 21.27),
    (350.0, 23.2),
    (345.0, 25.4),
    (340.0, 28.0),
    (335.0, 31.0),
    (330.0, 35.0),
    (325.0, 40.0),
    (325.0, 45.0),
];

/// Centre and size of one base bag, drawn as a square rotated 45 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base {
    pub center: Point,
    pub size: f64,
}

impl Base {
    /// Corners in drawing order: left, top, right, bottom.
    pub fn corners(&self) -> [Point; 4] {
        let (cx, cy) = self.center;
        let s = self.size / 2.0;
        [(cx - s, cy), (cx, cy + s), (cx + s, cy), (cx, cy - s)]
    }
}

/// Axis-aligned rectangle in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> f64 {
        self.max.1 - self.min.1
    }
}

/// Every fixed dimension of the drawn field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGeometry {
    pub outfield_wall: &'static [(f64, f64)],
    pub infield_radius: f64,
    /// Number of samples along the infield dirt arc.
    pub infield_arc_samples: usize,
    /// Bearing of the foul lines, the arc spans `-foul_line..=foul_line`.
    pub foul_line_deg: f64,
    pub grass_size: f64,
    pub base_distance: f64,
    pub base_size: f64,
    pub first_base_deg: f64,
    pub third_base_deg: f64,
    pub plate_y_offset: f64,
    pub plate_half_width: f64,
    pub plate_side_depth: f64,
    pub plate_tip_depth: f64,
    pub mound_center: Point,
    pub mound_radius: f64,
    pub watermark_center: Point,
    pub watermark_height: f64,
    pub watermark_alpha: f64,
    /// Visible region of the chart.
    pub view: Rect,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            outfield_wall: OUTFIELD_WALL,
            infield_radius: 160.0,
            infield_arc_samples: 300,
            foul_line_deg: 45.0,
            grass_size: 90.0,
            base_distance: 90.0,
            base_size: 18.0,
            first_base_deg: -45.0,
            third_base_deg: 45.0,
            plate_y_offset: 6.0,
            plate_half_width: 9.0,
            plate_side_depth: 7.0,
            plate_tip_depth: 13.0,
            mound_center: (0.0, 60.5),
            mound_radius: 9.0,
            watermark_center: (0.0, 260.0),
            watermark_height: 40.0,
            watermark_alpha: 0.4,
            view: Rect {
                min: (-360.0, -7.0),
                max: (360.0, 410.0),
            },
        }
    }
}

impl FieldGeometry {
    /// Outfield wall closed back to home plate.
    pub fn outfield_outline(&self) -> Vec<Point> {
        self.outfield_wall
            .iter()
            .map(|&(r, deg)| polar_to_cart(r, deg))
            .chain(std::iter::once((0.0, 0.0)))
            .collect()
    }

    /// Infield dirt: home plate, the arc from foul line to foul line, home
    /// plate again.
    pub fn infield_dirt(&self) -> Vec<Point> {
        let n = self.infield_arc_samples.max(2);
        let start = -self.foul_line_deg;
        let step = 2.0 * self.foul_line_deg / (n - 1) as f64;

        let mut points = Vec::with_capacity(n + 2);
        points.push((0.0, 0.0));
        points.extend((0..n).map(|i| polar_to_cart(self.infield_radius, start + step * i as f64)));
        points.push((0.0, 0.0));
        points
    }

    /// Infield grass diamond with its bottom corner on home plate.
    pub fn grass_diamond(&self) -> [Point; 4] {
        let size = self.grass_size;
        let half = size / 2.0;
        [(-half, half), (0.0, size), (half, half), (0.0, 0.0)]
    }

    /// First, second and third base.
    ///
    /// First and third sit on the foul lines, pulled toward the middle by
    /// half a bag so their outer corner lands on the base-distance circle.
    /// Second is straight ahead at `base_distance * sqrt(2)`.
    pub fn bases(&self) -> [Base; 3] {
        let half = self.base_size / 2.0;
        let corner_base = |deg: f64| {
            let (x, y) = polar_to_cart(self.base_distance, deg);
            let inward = if x > 0.0 { -1.0 } else { 1.0 };
            Base {
                center: (x + inward * half, y),
                size: self.base_size,
            }
        };

        [
            corner_base(self.first_base_deg),
            Base {
                center: (0.0, self.base_distance * SQRT_2),
                size: self.base_size,
            },
            corner_base(self.third_base_deg),
        ]
    }

    /// Home plate pentagon, point facing the backstop.
    pub fn home_plate(&self) -> [Point; 5] {
        let y = self.plate_y_offset;
        let w = self.plate_half_width;
        [
            (-w, y),
            (w, y),
            (w, y - self.plate_side_depth),
            (0.0, y - self.plate_tip_depth),
            (-w, y - self.plate_side_depth),
        ]
    }

    /// Placement of the centre-field watermark for an image of the given
    /// width/height ratio.
    pub fn watermark_rect(&self, aspect_ratio: f64) -> Rect {
        let (cx, cy) = self.watermark_center;
        let h = self.watermark_height;
        let w = h * aspect_ratio;
        Rect {
            min: (cx - w / 2.0, cy - h / 2.0),
            max: (cx + w / 2.0, cy + h / 2.0),
        }
    }
}
