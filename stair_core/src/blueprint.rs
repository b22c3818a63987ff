//! # Blueprint Geometry
//!
//! Builds the closed polygon outline of a stair stringer as it would be
//! marked on the board for cutting: the riser/tread zig-zag along the top,
//! closed by the parallel bottom edge of the board. Pure coordinate
//! geometry; rendering to SVG is a separate step so hosts that draw the
//! polygon themselves can consume the raw points.
//!
//! Coordinates follow screen convention: Y increases downward, with the toe
//! of the stringer at `(0, total_rise)` and the top of the flight at `y = 0`.

use serde::{Deserialize, Serialize};

/// Margin added around the polygon when computing the viewport, in the same
/// inch-units as the path itself.
const VIEWPORT_MARGIN: f64 = 20.0;

/// A 2D point in inch-units, screen-oriented (Y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Bounding rectangle for fitting the rendered polygon, margin included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// The closed stringer outline plus its viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintPath {
    /// Polygon vertices in drawing order; the shape closes back to the
    /// first point
    pub points: Vec<Point>,
    pub viewport: Viewport,
}

impl BlueprintPath {
    /// Render the polygon as an SVG path `d` attribute string.
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{} {:.3} {:.3} ", cmd, p.x, p.y));
        }
        d.push('Z');
        d
    }
}

/// Build the stringer cut profile.
///
/// Starts at the toe `(0, total_rise)` and alternates riser-up and
/// tread-right cuts for each step; the final step cuts its tread too so the
/// top of the profile reads correctly against the deck. The board's bottom
/// edge runs parallel to the rake line through the first inner corner,
/// offset perpendicular by the board width, and closes the polygon.
///
/// Geometry only - no division by the step count happens here, so a
/// one-step stair is fine.
///
/// # Example
///
/// ```rust
/// use stair_core::blueprint::build_blueprint_path;
///
/// let path = build_blueprint_path(7.714, 10.0, 14, 11.25);
/// // toe + 2 points per step + 2 bottom-edge corners
/// assert_eq!(path.points.len(), 1 + 14 * 2 + 2);
/// ```
pub fn build_blueprint_path(
    rise_per_step_in: f64,
    run_per_step_in: f64,
    number_of_steps: u32,
    stringer_width_in: f64,
) -> BlueprintPath {
    let total_rise = rise_per_step_in * number_of_steps as f64;

    let mut points = Vec::with_capacity(3 + number_of_steps as usize * 2);

    // Toe of the stringer, resting on the floor
    let mut x = 0.0;
    let mut y = total_rise;
    points.push(Point::new(x, y));

    // Zig-zag cut line: riser up, then tread right, per step. Y-down
    // coordinates, so "up" subtracts.
    for _ in 0..number_of_steps {
        y -= rise_per_step_in;
        points.push(Point::new(x, y));
        x += run_per_step_in;
        points.push(Point::new(x, y));
    }

    // Board width is measured perpendicular to the rake, so the bottom edge
    // is the zig-zag endpoints shifted by (w sin theta, w cos theta).
    let theta = (rise_per_step_in / run_per_step_in).atan();
    let dx = stringer_width_in * theta.sin();
    let dy = stringer_width_in * theta.cos();

    // Bottom-back corner under the top of the flight, then bottom-front
    // corner under the first inner corner; the close back to the toe is the
    // bottom heel cut.
    points.push(Point::new(x + dx, y + dy));
    points.push(Point::new(dx, (total_rise - rise_per_step_in) + dy));

    let viewport = bounding_viewport(&points);

    BlueprintPath { points, viewport }
}

fn bounding_viewport(points: &[Point]) -> Viewport {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Viewport {
        min_x: min_x - VIEWPORT_MARGIN,
        min_y: min_y - VIEWPORT_MARGIN,
        width: (max_x - min_x) + VIEWPORT_MARGIN * 2.0,
        height: (max_y - min_y) + VIEWPORT_MARGIN * 2.0,
    }
}

/// Render the blueprint as a standalone SVG document.
///
/// One inch maps to one SVG user unit; the viewBox carries the scaling so
/// the host can size the image however it likes.
pub fn render_svg(path: &BlueprintPath) -> String {
    let vb = path.viewport;
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "viewBox=\"{:.3} {:.3} {:.3} {:.3}\">\n",
            "  <path d=\"{}\" fill=\"#efe0cd\" stroke=\"#8d6e63\" stroke-width=\"0.5\"/>\n",
            "</svg>\n"
        ),
        vb.min_x,
        vb.min_y,
        vb.width,
        vb.height,
        path.to_path_data()
    )
}
