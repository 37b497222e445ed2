//! Named polygon rings.

#![allow(dead_code)]

use polyline_overlap::Ring;

/// Axis-aligned square spanning lat/lon 10..20.
pub fn square() -> Ring {
    vec![(10.0, 10.0), (10.0, 20.0), (20.0, 20.0), (20.0, 10.0)].into()
}

/// Small block in Camp Hill / Lemoyne, PA, on the Carlisle -> Harrisburg route.
pub fn camp_hill() -> Ring {
    vec![
        (40.22511, -76.91905),
        (40.22511, -76.89905),
        (40.24511, -76.89905),
        (40.24511, -76.91905),
    ]
    .into()
}

/// North of the Carlisle -> Harrisburg route; never reached by it.
pub fn marysville() -> Ring {
    vec![
        (40.33, -77.00),
        (40.33, -76.92),
        (40.36, -76.92),
        (40.36, -77.00),
    ]
    .into()
}

/// Triangle around the Frankfurt test vector.
pub fn frankfurt() -> Ring {
    vec![(50.09, 8.68), (50.11, 8.68), (50.10, 8.71)].into()
}

/// The fixed polygon list used by the service mock.
pub fn mock_polygons() -> Vec<Ring> {
    vec![square(), camp_hill()]
}
