use std::fmt;

use crate::transit::{RouteIdentifier, StationIdentifier, TransitError};

/// Which end of a leg failed to resolve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Begin,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Begin => f.write_str("begin"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    /// Unknown station, route, or shape identifier
    #[error(transparent)]
    Transit(#[from] TransitError),

    /// An endpoint's coordinate is on none of the route's candidate shapes
    #[error("{endpoint} station {station} does not lie on any shape of route {route}")]
    GeometryResolution {
        endpoint: Endpoint,
        route: RouteIdentifier,
        station: StationIdentifier,
    },

    #[error("No trip for day {0}")]
    NoTripForDay(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid puzzle book: {0}")]
    InvalidPuzzleBook(#[from] serde_json::Error),
}

impl ItineraryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transit(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, ItineraryError>;
