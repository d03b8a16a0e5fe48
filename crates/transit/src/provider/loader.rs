//! JSON reference-data loader.
//!
//! Reads the three static tables (stations, routes, shapes) and builds a
//! [`StaticTransitProvider`]. Coordinates are kept exactly as parsed so that
//! station positions compare equal to the shape points they sit on.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use geo::{LineString, Point};
use serde::Deserialize;

use crate::identifiers::*;
use crate::models::types::*;
use crate::provider::static_provider::{RouteImpl, ShapeImpl, StaticTransitProvider, StationImpl};

pub const STATIONS_FILE: &str = "stations.json";
pub const ROUTES_FILE: &str = "routes.json";
pub const SHAPES_FILE: &str = "shapes.json";

fn parse_table<T: serde::de::DeserializeOwned>(table: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| TransitError::SerializationError(format!("{table}: {e}")))
}

#[derive(Clone, Debug, Deserialize)]
pub struct StationRecord {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RouteRecord {
    pub color: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit candidate shapes; derived from the shape table when absent
    #[serde(default)]
    pub shapes: Option<Vec<ShapeIdentifier>>,
}

/// Raw reference tables, keyed by identifier
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    pub stations: BTreeMap<StationIdentifier, StationRecord>,
    pub routes: BTreeMap<RouteIdentifier, RouteRecord>,
    pub shapes: BTreeMap<ShapeIdentifier, Vec<[f64; 2]>>,
}

impl ReferenceData {
    /// Parse the three tables from JSON text
    pub fn from_json_strs(stations: &str, routes: &str, shapes: &str) -> Result<Self> {
        Ok(Self {
            stations: parse_table(STATIONS_FILE, stations)?,
            routes: parse_table(ROUTES_FILE, routes)?,
            shapes: parse_table(SHAPES_FILE, shapes)?,
        })
    }

    /// Read `stations.json`, `routes.json` and `shapes.json` from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|source| TransitError::Io { path, source })
        };

        Self::from_json_strs(&read(STATIONS_FILE)?, &read(ROUTES_FILE)?, &read(SHAPES_FILE)?)
    }

    /// Candidate shapes for a route.
    ///
    /// Order of preference: the route's explicit list, a shape keyed by the
    /// route id itself, then numbered branches (`A1`, `A2`, ...) sorted by
    /// branch number.
    pub fn candidate_ids(&self, route_id: &RouteIdentifier, route: &RouteRecord) -> Result<Vec<ShapeIdentifier>> {
        if let Some(explicit) = &route.shapes {
            if let Some(missing) = explicit.iter().find(|id| !self.shapes.contains_key(*id)) {
                return Err(TransitError::InvalidData(format!(
                    "route {route_id} lists unknown shape {missing}"
                )));
            }
            return Ok(explicit.clone());
        }

        let own = ShapeIdentifier::from(route_id);
        if self.shapes.contains_key(&own) {
            return Ok(vec![own]);
        }

        let mut branches: Vec<(u32, ShapeIdentifier)> = self
            .shapes
            .keys()
            .filter_map(|id| id.variant_of(route_id).map(|n| (n, id.clone())))
            .collect();
        branches.sort_by_key(|(n, _)| *n);

        Ok(branches.into_iter().map(|(_, id)| id).collect())
    }

    /// Build an in-memory provider from the parsed tables
    pub fn into_provider(self) -> Result<StaticTransitProvider> {
        let mut routes = Vec::with_capacity(self.routes.len());
        let mut shapes = Vec::new();
        let mut claimed = HashSet::new();
        let mut built = HashSet::new();

        for (route_id, record) in &self.routes {
            let shape_ids = self.candidate_ids(route_id, record)?;
            if shape_ids.is_empty() {
                tracing::warn!(route = %route_id, "route has no candidate shapes");
            }

            for shape_id in &shape_ids {
                claimed.insert(shape_id.clone());
                // Routes sharing a path each get their own copy
                if !built.insert((route_id.clone(), shape_id.clone())) {
                    continue;
                }
                if let Some(points) = self.shapes.get(shape_id) {
                    shapes.push(ShapeImpl {
                        id: shape_id.clone(),
                        route_id: route_id.clone(),
                        path: points.iter().map(|&[lng, lat]| (lng, lat)).collect::<LineString>(),
                    });
                }
            }

            routes.push(RouteImpl {
                id: route_id.clone(),
                color: record.color.as_str().into(),
                long_name: record.name.as_deref().map(Into::into),
                shape_ids,
            });
        }

        for unused in self.shapes.keys().filter(|id| !claimed.contains(*id)) {
            tracing::debug!(shape = %unused, "shape is not referenced by any route");
        }

        let stations: Vec<StationImpl> = self
            .stations
            .into_iter()
            .map(|(id, record)| StationImpl {
                id,
                name: record.name.into(),
                location: Point::new(record.longitude, record.latitude),
            })
            .collect();

        tracing::info!(
            stations = stations.len(),
            routes = routes.len(),
            shapes = shapes.len(),
            "loaded reference data"
        );

        Ok(StaticTransitProvider::from_data(stations, routes, shapes))
    }
}
