//! Path-vs-polygon overlap.
//!
//! A path overlaps a polygon when one of its segments properly crosses a
//! polygon edge, or when one of its points lies inside the polygon. The second
//! check catches paths that stay entirely inside. Paths that only touch or run
//! along the boundary are not detected.

use rayon::prelude::*;

use crate::geometry::{Ring, point_in_polygon, segment_intersects_ring};
use crate::polyline::{Polyline, decode};
use crate::traits::PolygonSource;
use crate::OverlapError;

#[derive(Debug, Clone)]
pub struct OverlapOptions {
    /// Batches with at least this many polygons are evaluated in parallel.
    pub parallel_threshold: usize,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Whether `polyline` overlaps `ring`.
pub fn overlaps(polyline: &Polyline, ring: &Ring) -> bool {
    polyline
        .segments()
        .any(|(start, end)| segment_intersects_ring(start, end, ring))
        || polyline
            .points()
            .iter()
            .any(|point| point_in_polygon(point, ring))
}

/// Indices of the polygons that `polyline` overlaps, ascending.
pub fn overlapping_indices(
    polyline: &Polyline,
    polygons: &[Ring],
    options: &OverlapOptions,
) -> Vec<usize> {
    let parallel = polygons.len() >= options.parallel_threshold;

    let indices: Vec<usize> = if parallel {
        polygons
            .par_iter()
            .enumerate()
            .filter(|(_, ring)| overlaps(polyline, ring))
            .map(|(index, _)| index)
            .collect()
    } else {
        polygons
            .iter()
            .enumerate()
            .filter(|(_, ring)| overlaps(polyline, ring))
            .map(|(index, _)| index)
            .collect()
    };

    tracing::debug!(
        polygons = polygons.len(),
        hits = indices.len(),
        parallel,
        "evaluated overlap batch"
    );

    indices
}

/// The polygons that `polyline` overlaps, in input order.
pub fn overlapping<'a>(
    polyline: &Polyline,
    polygons: &'a [Ring],
    options: &OverlapOptions,
) -> Vec<&'a Ring> {
    overlapping_indices(polyline, polygons, options)
        .into_iter()
        .map(|index| &polygons[index])
        .collect()
}

/// Decodes `encoded`, fetches polygons from `source` and returns those the
/// path overlaps, in source order.
pub fn find_overlapping<S>(
    encoded: &str,
    source: &S,
    options: &OverlapOptions,
) -> Result<Vec<Ring>, OverlapError>
where
    S: PolygonSource + ?Sized,
{
    let polyline = decode(encoded).inspect_err(|err| {
        tracing::warn!(error = %err, "rejected encoded polyline");
    })?;

    let polygons = source.polygons()?;
    let hits = overlapping(&polyline, &polygons, options)
        .into_iter()
        .cloned()
        .collect();

    Ok(hits)
}
