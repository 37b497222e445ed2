//! Flexible polyline header: format version plus a packed metadata word.

use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// The only format version this crate understands.
pub const FORMAT_VERSION: u64 = 1;

/// Meaning of the optional third value carried by each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThirdDimension {
    /// No third value; points are `(lat, lon)`.
    Absent,
    Level,
    Elevation,
    Reserved3,
    Reserved4,
    Reserved5,
    Custom1,
    Custom2,
}

impl ThirdDimension {
    /// Maps the 3-bit field from the header; higher bits are ignored.
    fn from_bits(bits: u64) -> Self {
        match bits & 0x7 {
            0 => ThirdDimension::Absent,
            1 => ThirdDimension::Level,
            2 => ThirdDimension::Elevation,
            3 => ThirdDimension::Reserved3,
            4 => ThirdDimension::Reserved4,
            5 => ThirdDimension::Reserved5,
            6 => ThirdDimension::Custom1,
            _ => ThirdDimension::Custom2,
        }
    }

    /// Raw 3-bit code as stored in the header.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_present(self) -> bool {
        self != ThirdDimension::Absent
    }

    /// Number of encoded values per point (2 or 3).
    pub fn group_size(self) -> usize {
        if self.is_present() { 3 } else { 2 }
    }
}

/// Decoded header metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub version: u64,
    /// Decimal digits of lat/lon (0-15).
    pub precision: u8,
    pub third_dimension: ThirdDimension,
    /// Decimal digits of the third dimension (0-15).
    pub third_dimension_precision: u8,
}

impl Header {
    /// Divisor turning an accumulated lat/lon integer into degrees.
    pub fn lat_lon_factor(&self) -> f64 {
        10f64.powi(i32::from(self.precision))
    }

    /// Divisor turning an accumulated third-dimension integer into units.
    pub fn third_dimension_factor(&self) -> f64 {
        10f64.powi(i32::from(self.third_dimension_precision))
    }
}

/// Rejects any version other than [`FORMAT_VERSION`].
pub fn check_version(version: u64) -> Result<(), DecodeError> {
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    Ok(())
}

/// Builds a [`Header`] from the first two decoded values.
pub fn parse_header(version: u64, encoded_header: u64) -> Result<Header, DecodeError> {
    check_version(version)?;

    Ok(Header {
        version,
        precision: (encoded_header & 0xF) as u8,
        third_dimension: ThirdDimension::from_bits(encoded_header >> 4),
        third_dimension_precision: ((encoded_header >> 7) & 0xF) as u8,
    })
}
