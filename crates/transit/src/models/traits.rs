//! Core traits for transit entities.
//!
//! These traits define the public interface for transit reference data.
//! Implementations can be in-memory, database-backed, or remote.

use geo::{LineString, Point};
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// A transit route (e.g., "A", "6X")
pub trait Route: Send + Sync {
    fn id(&self) -> &RouteIdentifier;

    /// Display color (e.g., "#0039A6")
    fn color(&self) -> &str;

    /// Optional long name (e.g., "8 Avenue Express")
    fn long_name(&self) -> Option<&str> {
        None
    }

    /// Candidate shapes for this route, in listed order.
    ///
    /// Most routes have exactly one. Branched routes list one per branch.
    fn shape_ids(&self) -> &[ShapeIdentifier];
}

/// A transit station (single boarding location)
pub trait TransitStation: Send + Sync {
    fn id(&self) -> &StationIdentifier;
    fn name(&self) -> &str;
    fn location(&self) -> Point;
}

/// Physical polyline of a route or of one of its branches
pub trait TransitShape: Send + Sync {
    fn id(&self) -> &ShapeIdentifier;
    fn route_id(&self) -> &RouteIdentifier;

    /// Coordinates as x = longitude, y = latitude, in stored order
    fn path(&self) -> &LineString;
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Provider of all transit reference data with lookup methods
pub trait TransitProvider: Send + Sync {
    // ---- Lookups ----
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<dyn TransitStation>>;
    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<dyn Route>>;
    fn get_shape(&self, id: &ShapeIdentifier) -> Option<Arc<dyn TransitShape>>;

    // ---- Collections ----
    fn all_stations(&self) -> Vec<Arc<dyn TransitStation>>;
    fn all_routes(&self) -> Vec<Arc<dyn Route>>;

    // ---- Fallible lookups ----

    /// Like [`get_station`](Self::get_station), failing on unknown ids
    fn station(&self, id: &StationIdentifier) -> Result<Arc<dyn TransitStation>> {
        self.get_station(id)
            .ok_or_else(|| TransitError::StationNotFound(id.clone()))
    }

    /// Like [`get_route`](Self::get_route), failing on unknown ids
    fn route(&self, id: &RouteIdentifier) -> Result<Arc<dyn Route>> {
        self.get_route(id)
            .ok_or_else(|| TransitError::RouteNotFound(id.clone()))
    }

    /// Candidate shapes of a route, in the order the route lists them
    fn shape_candidates(&self, route_id: &RouteIdentifier) -> Result<Vec<Arc<dyn TransitShape>>> {
        self.route(route_id)?
            .shape_ids()
            .iter()
            .map(|id| {
                self.get_shape(id)
                    .ok_or_else(|| TransitError::ShapeNotFound(id.clone()))
            })
            .collect()
    }
}
