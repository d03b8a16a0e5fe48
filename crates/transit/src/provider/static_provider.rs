//! In-memory transit provider backed by static reference tables.
//!
//! Stations, routes, and shapes are loaded once and never mutated, so the
//! provider can be shared freely between threads.

use std::collections::HashMap;
use std::sync::Arc;

use geo::{LineString, Point};

use crate::identifiers::*;
use crate::models::traits::*;
use crate::models::types::{Result, TransitError};

// ============================================================================
// Concrete Implementations of Traits
// ============================================================================

#[derive(Clone, Debug)]
pub struct StationImpl {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub location: Point,
}

impl TransitStation for StationImpl {
    fn id(&self) -> &StationIdentifier {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Point {
        self.location
    }
}

#[derive(Clone, Debug)]
pub struct RouteImpl {
    pub id: RouteIdentifier,
    pub color: Arc<str>,
    pub long_name: Option<Arc<str>>,
    pub shape_ids: Vec<ShapeIdentifier>,
}

impl Route for RouteImpl {
    fn id(&self) -> &RouteIdentifier {
        &self.id
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    fn shape_ids(&self) -> &[ShapeIdentifier] {
        &self.shape_ids
    }
}

#[derive(Clone, Debug)]
pub struct ShapeImpl {
    pub id: ShapeIdentifier,
    pub route_id: RouteIdentifier,
    pub path: LineString,
}

impl TransitShape for ShapeImpl {
    fn id(&self) -> &ShapeIdentifier {
        &self.id
    }

    fn route_id(&self) -> &RouteIdentifier {
        &self.route_id
    }

    fn path(&self) -> &LineString {
        &self.path
    }
}

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory transit provider
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone)]
pub struct StaticTransitProvider {
    // Core data, in load order
    stations: Vec<Arc<StationImpl>>,
    routes: Vec<Arc<RouteImpl>>,

    // Lookup maps
    station_map: HashMap<StationIdentifier, Arc<StationImpl>>,
    route_map: HashMap<RouteIdentifier, Arc<RouteImpl>>,
    shape_map: HashMap<ShapeIdentifier, Arc<ShapeImpl>>,
    // A shared path gets one entry per owning route
    route_shape_map: HashMap<(RouteIdentifier, ShapeIdentifier), Arc<ShapeImpl>>,
}

impl StaticTransitProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            routes: Vec::new(),
            station_map: HashMap::new(),
            route_map: HashMap::new(),
            shape_map: HashMap::new(),
            route_shape_map: HashMap::new(),
        }
    }

    /// Build provider from raw data (used by the reference-data loader)
    pub fn from_data(
        stations: Vec<StationImpl>,
        routes: Vec<RouteImpl>,
        shapes: Vec<ShapeImpl>,
    ) -> Self {
        let stations: Vec<Arc<StationImpl>> = stations.into_iter().map(Arc::new).collect();
        let routes: Vec<Arc<RouteImpl>> = routes.into_iter().map(Arc::new).collect();

        // Build lookup maps
        let station_map: HashMap<_, _> = stations
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect();

        let route_map: HashMap<_, _> = routes
            .iter()
            .map(|r| (r.id.clone(), r.clone()))
            .collect();

        let mut shape_map = HashMap::new();
        let mut route_shape_map = HashMap::new();
        for shape in shapes.into_iter().map(Arc::new) {
            shape_map.entry(shape.id.clone()).or_insert_with(|| shape.clone());
            route_shape_map.insert((shape.route_id.clone(), shape.id.clone()), shape);
        }

        Self {
            stations,
            routes,
            station_map,
            route_map,
            shape_map,
            route_shape_map,
        }
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of (route, shape) pairs
    pub fn shape_count(&self) -> usize {
        self.route_shape_map.len()
    }
}

impl Default for StaticTransitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitProvider for StaticTransitProvider {
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<dyn TransitStation>> {
        self.station_map.get(id).map(|s| s.clone() as Arc<dyn TransitStation>)
    }

    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<dyn Route>> {
        self.route_map.get(id).map(|r| r.clone() as Arc<dyn Route>)
    }

    fn get_shape(&self, id: &ShapeIdentifier) -> Option<Arc<dyn TransitShape>> {
        self.shape_map.get(id).map(|s| s.clone() as Arc<dyn TransitShape>)
    }

    fn shape_candidates(&self, route_id: &RouteIdentifier) -> Result<Vec<Arc<dyn TransitShape>>> {
        let route = self
            .route_map
            .get(route_id)
            .ok_or_else(|| TransitError::RouteNotFound(route_id.clone()))?;

        route
            .shape_ids
            .iter()
            .map(|id| {
                self.route_shape_map
                    .get(&(route_id.clone(), id.clone()))
                    .map(|s| s.clone() as Arc<dyn TransitShape>)
                    .ok_or_else(|| TransitError::ShapeNotFound(id.clone()))
            })
            .collect()
    }

    fn all_stations(&self) -> Vec<Arc<dyn TransitStation>> {
        self.stations
            .iter()
            .map(|s| s.clone() as Arc<dyn TransitStation>)
            .collect()
    }

    fn all_routes(&self) -> Vec<Arc<dyn Route>> {
        self.routes
            .iter()
            .map(|r| r.clone() as Arc<dyn Route>)
            .collect()
    }
}
