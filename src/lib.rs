//! polyline-overlap
//!
//! Decodes flexible polylines and tests the decoded path against a set of
//! polygons.

pub mod traits;
pub mod varint;
pub mod header;
pub mod polyline;
pub mod geometry;
pub mod overlap;
pub mod polygon_source;

pub use geometry::Ring;
pub use header::{Header, ThirdDimension};
pub use polyline::{Coordinate, Polyline, decode, decode_header};

/// Failure decoding an encoded polyline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid character {character:?} at byte {position}")]
    MalformedCharacter { character: char, position: usize },

    #[error("encoded string ends in the middle of a value")]
    TruncatedVarint,

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u64),

    #[error("premature ending: {remaining} trailing value(s) for a point of {group_size}")]
    PrematureEnding { remaining: usize, group_size: usize },

    #[error("missing header: found {values} value(s), need 2")]
    MalformedEncoding { values: usize },

    #[error("value does not fit in 64 bits")]
    Overflow,
}

/// Failure answering an overlap query end to end.
#[derive(Debug, thiserror::Error)]
pub enum OverlapError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("polygon source failed: {0}")]
    Source(#[from] polygon_source::PolygonSourceError),
}
