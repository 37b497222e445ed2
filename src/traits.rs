//! Seams to collaborators outside the decoding and geometry core.

use crate::geometry::Ring;
use crate::polygon_source::PolygonSourceError;

/// Supplies the polygons an encoded path is tested against.
///
/// Rings come back in the source's order; overlap results preserve it.
pub trait PolygonSource {
    fn polygons(&self) -> Result<Vec<Ring>, PolygonSourceError>;
}
