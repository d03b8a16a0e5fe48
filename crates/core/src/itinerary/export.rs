//! GeoJSON export of resolved trips.

use geo::LineString;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::{json, Map};

use crate::itinerary::assembly::ResolvedTrip;
use crate::itinerary::segment::LineFeature;
use crate::itinerary::stops::StopFeature;

fn linestring_to_geojson(line: &LineString) -> Value {
    Value::LineString(line.0.iter().map(|c| vec![c.x, c.y]).collect())
}

fn feature(value: Value, properties: Map<String, serde_json::Value>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

impl StopFeature {
    /// Point feature with `id` and `name` properties
    pub fn to_geojson(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert("id".to_string(), json!(self.id.as_str()));
        properties.insert("name".to_string(), json!(&*self.name));

        feature(
            Value::Point(vec![self.location.x(), self.location.y()]),
            properties,
        )
    }
}

impl LineFeature {
    /// LineString feature with a `color` property
    pub fn to_geojson(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert("color".to_string(), json!(&*self.color));

        feature(linestring_to_geojson(&self.line), properties)
    }
}

impl ResolvedTrip {
    /// Only the stop markers
    pub fn stops_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.stops.iter().map(StopFeature::to_geojson).collect(),
            foreign_members: None,
        }
    }

    /// Stops followed by the three legs, each leg tagged `line-0` .. `line-2`
    pub fn to_geojson(&self) -> GeoJson {
        let mut collection = self.stops_collection();

        for (i, line) in self.lines.iter().enumerate() {
            let mut feature = line.to_geojson();
            if let Some(properties) = feature.properties.as_mut() {
                properties.insert("layer".to_string(), json!(format!("line-{i}")));
            }
            collection.features.push(feature);
        }

        GeoJson::from(collection)
    }
}
