//! Planar predicates over lat/lon coordinates.
//!
//! Coordinates are treated as plane points with `x = lat`, `y = lon`. No
//! projection is applied.

use serde::{Deserialize, Serialize};

use crate::polyline::Coordinate;

/// A closed polygon boundary. The last vertex connects back to the first;
/// no closing duplicate is stored.
///
/// Rings with fewer than 3 vertices are not valid polygons. The predicates
/// below do not check for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    vertices: Vec<Coordinate>,
}

impl Ring {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than 3 vertices.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Boundary edges `(v[k], v[k + 1])`, ending with `(v[n - 1], v[0])`.
    pub fn edges(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
    }

    /// Even-odd containment. See [`point_in_polygon`].
    pub fn contains(&self, point: &Coordinate) -> bool {
        point_in_polygon(point, self)
    }
}

impl From<Vec<(f64, f64)>> for Ring {
    fn from(vertices: Vec<(f64, f64)>) -> Self {
        Self::new(vertices.into_iter().map(Coordinate::from).collect())
    }
}

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// True when segment `a1-a2` and segment `b1-b2` cross at a point strictly
/// inside both.
///
/// Parallel and collinear pairs (zero determinant) are never reported, even
/// when they overlap. Touching at an endpoint is not a proper intersection.
pub fn segments_properly_intersect(
    a1: &Coordinate,
    a2: &Coordinate,
    b1: &Coordinate,
    b2: &Coordinate,
) -> bool {
    let (rx, ry) = (a2.lat - a1.lat, a2.lon - a1.lon);
    let (sx, sy) = (b2.lat - b1.lat, b2.lon - b1.lon);

    let det = cross(rx, ry, sx, sy);
    if det == 0.0 {
        return false;
    }

    let (qx, qy) = (b1.lat - a1.lat, b1.lon - a1.lon);
    // a1 + lambda * r == b1 + gamma * s
    let lambda = cross(qx, qy, sx, sy) / det;
    let gamma = cross(qx, qy, rx, ry) / det;

    (0.0 < lambda && lambda < 1.0) && (0.0 < gamma && gamma < 1.0)
}

/// Ray-casting point-in-polygon test (even-odd rule).
///
/// A ray is cast from `point` towards +lat; every edge whose lon span
/// straddles the point and whose crossing lies ahead of it flips the result.
/// The straddle check is half-open so a ray through a shared vertex counts
/// once. Points exactly on the boundary may land on either side.
pub fn point_in_polygon(point: &Coordinate, ring: &Ring) -> bool {
    let (px, py) = (point.lat, point.lon);
    let mut inside = false;

    for (prev, current) in ring.edges() {
        let (jx, jy) = (prev.lat, prev.lon);
        let (ix, iy) = (current.lat, current.lon);

        if (iy > py) != (jy > py) {
            let crossing_x = (jx - ix) * (py - iy) / (jy - iy) + ix;
            if px < crossing_x {
                inside = !inside;
            }
        }
    }

    inside
}

/// True when the segment properly intersects any edge of `ring`, including
/// the closing edge.
pub fn segment_intersects_ring(start: &Coordinate, end: &Coordinate, ring: &Ring) -> bool {
    ring.edges()
        .any(|(edge_start, edge_end)| segments_properly_intersect(start, end, edge_start, edge_end))
}
