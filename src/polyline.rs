//! Decoded flexible polylines.
//!
//! An encoded polyline is a header (version + metadata word) followed by
//! zigzag-encoded deltas, two or three per point. [`decode`] turns the text
//! into a [`Polyline`] of absolute coordinates.

use serde::{Deserialize, Serialize};

use crate::header::{Header, check_version, parse_header};
use crate::varint::{VarintReader, decode_unsigned_values, to_signed};
use crate::DecodeError;

/// A single decoded position. `z` is present only when the header declares a
/// third dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, z: None }
    }

    pub const fn with_z(lat: f64, lon: f64, z: f64) -> Self {
        Self { lat, lon, z: Some(z) }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// A polyline representing a path as decoded coordinates, in encoding order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    header: Header,
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from already-decoded points.
    pub fn new(header: Header, points: Vec<Coordinate>) -> Self {
        Self { header, points }
    }

    /// Decodes `encoded`. See [`decode`].
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        decode(encoded)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, i.e. the segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> + '_ {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// Decodes an encoded flexible polyline.
///
/// Fails with:
/// - [`DecodeError::MalformedCharacter`] / [`DecodeError::TruncatedVarint`] /
///   [`DecodeError::Overflow`] if the character stream is not a sequence of
///   complete integers;
/// - [`DecodeError::UnsupportedVersion`] if the first value is not 1;
/// - [`DecodeError::MalformedEncoding`] if the header is incomplete;
/// - [`DecodeError::PrematureEnding`] if the last point is incomplete.
pub fn decode(encoded: &str) -> Result<Polyline, DecodeError> {
    let values = decode_unsigned_values(encoded)?;

    let version = *values
        .first()
        .ok_or(DecodeError::MalformedEncoding { values: 0 })?;
    check_version(version)?;
    let [_, encoded_header, body @ ..] = values.as_slice() else {
        return Err(DecodeError::MalformedEncoding {
            values: values.len(),
        });
    };
    let header = parse_header(version, *encoded_header)?;

    let group_size = header.third_dimension.group_size();
    let remaining = body.len() % group_size;
    if remaining != 0 {
        return Err(DecodeError::PrematureEnding {
            remaining,
            group_size,
        });
    }

    let lat_lon_factor = header.lat_lon_factor();
    let z_factor = header.third_dimension_factor();

    let mut last_lat: i64 = 0;
    let mut last_lon: i64 = 0;
    let mut last_z: i64 = 0;
    let mut points = Vec::with_capacity(body.len() / group_size);

    for group in body.chunks_exact(group_size) {
        last_lat = accumulate(last_lat, group[0])?;
        last_lon = accumulate(last_lon, group[1])?;

        let lat = last_lat as f64 / lat_lon_factor;
        let lon = last_lon as f64 / lat_lon_factor;

        let point = match group.get(2) {
            Some(&raw_z) => {
                last_z = accumulate(last_z, raw_z)?;
                Coordinate::with_z(lat, lon, last_z as f64 / z_factor)
            }
            None => Coordinate::new(lat, lon),
        };
        points.push(point);
    }

    tracing::debug!(
        points = points.len(),
        precision = header.precision,
        third_dimension = ?header.third_dimension,
        "decoded polyline"
    );

    Ok(Polyline::new(header, points))
}

/// Reads only the header of an encoded polyline, without decoding the body.
pub fn decode_header(encoded: &str) -> Result<Header, DecodeError> {
    let mut reader = VarintReader::new(encoded);

    let version = reader
        .next()
        .transpose()?
        .ok_or(DecodeError::MalformedEncoding { values: 0 })?;
    check_version(version)?;
    let encoded_header = reader
        .next()
        .transpose()?
        .ok_or(DecodeError::MalformedEncoding { values: 1 })?;

    parse_header(version, encoded_header)
}

fn accumulate(last: i64, raw: u64) -> Result<i64, DecodeError> {
    last.checked_add(to_signed(raw)).ok_or(DecodeError::Overflow)
}
