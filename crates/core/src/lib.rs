//! Map geometry for daily subway puzzle answers.
//!
//! Turns a [`Trip`](itinerary::Trip) into stop markers and one route line per
//! leg, using the reference data of [`subway_transit`].

pub mod error;
pub mod itinerary;
pub mod puzzle;

// Re-export transit from the transit crate
pub use subway_transit as transit;

pub use error::{Endpoint, ItineraryError, Result};
pub use itinerary::{
    assemble_day, resolve_leg, resolve_trip, stop_features, Leg, LineFeature, ResolvedTrip,
    Solution, StopFeature, Trip, TripSource,
};
pub use puzzle::{game_index, PuzzleBook, DEFAULT_EPOCH};
