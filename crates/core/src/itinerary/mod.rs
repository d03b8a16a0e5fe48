//! Daily trip itineraries and their map geometry.
//!
//! A trip is always three legs: origin to first transfer, first transfer to
//! second transfer, second transfer to destination. Each transfer has an
//! arrival and a departure station, which may be the same station.

use serde::Deserialize;

use crate::transit::{RouteIdentifier, StationIdentifier};

pub mod assembly;
pub mod export;
pub mod segment;
pub mod stops;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assembly::{assemble_day, resolve_trip, ResolvedTrip, TripSource};
pub use segment::{resolve_leg, select_shape, LineFeature};
pub use stops::{stop_features, StopFeature};

/// One continuous ride on one route
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub route: RouteIdentifier,
    pub begin: StationIdentifier,
    pub end: StationIdentifier,
}

impl Leg {
    pub fn new(
        route: impl Into<RouteIdentifier>,
        begin: impl Into<StationIdentifier>,
        end: impl Into<StationIdentifier>,
    ) -> Self {
        Self {
            route: route.into(),
            begin: begin.into(),
            end: end.into(),
        }
    }
}

/// The six stations of a solved puzzle
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Solution {
    pub origin: StationIdentifier,
    pub first_transfer_arrival: StationIdentifier,
    pub first_transfer_departure: StationIdentifier,
    pub second_transfer_arrival: StationIdentifier,
    pub second_transfer_departure: StationIdentifier,
    pub destination: StationIdentifier,
}

/// A day's puzzle answer: three routes and the stations connecting them
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Trip {
    pub routes: [RouteIdentifier; 3],
    pub solution: Solution,
}

impl Trip {
    /// All six stops in travel order, repeats included
    pub fn stops(&self) -> [StationIdentifier; 6] {
        let s = &self.solution;
        [
            s.origin.clone(),
            s.first_transfer_arrival.clone(),
            s.first_transfer_departure.clone(),
            s.second_transfer_arrival.clone(),
            s.second_transfer_departure.clone(),
            s.destination.clone(),
        ]
    }

    pub fn legs(&self) -> [Leg; 3] {
        let s = &self.solution;
        let [first, second, third] = self.routes.clone();
        [
            Leg {
                route: first,
                begin: s.origin.clone(),
                end: s.first_transfer_arrival.clone(),
            },
            Leg {
                route: second,
                begin: s.first_transfer_departure.clone(),
                end: s.second_transfer_arrival.clone(),
            },
            Leg {
                route: third,
                begin: s.second_transfer_departure.clone(),
                end: s.destination.clone(),
            },
        ]
    }
}
