//! Core data types and errors for transit reference data.

use geo::Coord;

use crate::identifiers::*;

// ============================================================================
// Coordinates
// ============================================================================

/// Exact positional equality between two coordinates.
///
/// Station and shape coordinates come from the same source tables, so no
/// tolerance is applied: both longitude and latitude must compare equal.
#[inline]
pub fn same_position(a: Coord, b: Coord) -> bool {
    a.x == b.x && a.y == b.y
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Station not found: {0}")]
    StationNotFound(StationIdentifier),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteIdentifier),

    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl TransitError {
    /// True for the lookup failures caused by an unknown identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StationNotFound(_) | Self::RouteNotFound(_) | Self::ShapeNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TransitError>;
