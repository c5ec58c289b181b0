//! Named points of interest anchored to passable cells.

use std::f64::consts::PI;

use warren_core::color::color_name;
use warren_core::Point;
use warren_space::Grid;

/// A named, coloured point of interest on the maze.
///
/// The marker manager keeps coordinates off wall cells after every
/// generation pass; external mutation of the grid can leave a marker on
/// a wall until [`fix_positions`] (or
/// [`Maze::fix_markers_position`](crate::Maze::fix_markers_position))
/// next runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Identifier used for lookup.
    pub id: String,
    /// Row coordinate.
    pub x: i32,
    /// Column coordinate.
    pub y: i32,
    /// Colour name or hex value used by renderers.
    pub color: String,
}

impl Marker {
    /// Create a marker.
    pub fn new(id: impl Into<String>, x: i32, y: i32, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            color: color.into(),
        }
    }

    /// The marker's location as a [`Point`].
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Synthesize one marker per id, spaced evenly around an ellipse at 80%
/// of the grid's half-extents, coloured from the active palette by
/// index (wrapping).
///
/// On very small grids the rounded ellipse can land outside the grid or
/// on walls; run [`fix_positions`] afterwards, as the maze constructor
/// does.
pub fn place_around(ids: &[String], width: u32, height: u32) -> Vec<Marker> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let n = ids.len();
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let angle = (i as f64 / n as f64) * 360.0 * (PI / 180.0);
            let x = (cx - angle.cos() * cx * 0.8).round() as i32;
            let y = (cy + angle.sin() * cy * 0.8).round() as i32;
            Marker::new(id.clone(), x, y, color_name(i))
        })
        .collect()
}

/// Move every wall-sitting marker to the first passable orthogonal
/// neighbour, falling back to the first passable diagonal neighbour.
///
/// A marker with no passable neighbour in either ring stays where it is
/// — on a carved maze the probability of that is effectively zero, and
/// leaving it in place is preferable to failing. Markers outside the
/// grid are treated as wall-sitting and pulled to the nearest in-bounds
/// opening the same way.
pub fn fix_positions(grid: &Grid, markers: &mut [Marker]) {
    for marker in markers.iter_mut() {
        let point = marker.point();
        let on_wall = !grid.in_bounds(point) || grid.is_wall(point);
        if !on_wall {
            continue;
        }

        let target = grid
            .neighbors4_by_value(point, false)
            .first()
            .copied()
            .or_else(|| {
                grid.neighbors_diagonal4_by_value(point, false)
                    .first()
                    .copied()
            });
        if let Some(p) = target {
            marker.x = p.x;
            marker.y = p.y;
        }
    }
}
