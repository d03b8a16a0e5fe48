//! Small reference network shared by the itinerary tests.
//!
//! ```text
//!  route 1:  S1 - m1 - S2 - S3 - S4
//!  route S:  S1 - x  - S3
//!  route 7:  S4 - m7 - T
//!  route A:  A1 = B1 - T - C
//!            A2 = B2 - T - C
//! ```

use geo::{LineString, Point};

use crate::itinerary::{Solution, Trip};
use crate::transit::*;

pub const S1: (f64, f64) = (-74.0, 40.7);
pub const S2: (f64, f64) = (-73.95, 40.75);
pub const S3: (f64, f64) = (-73.9, 40.8);
pub const S4: (f64, f64) = (-73.85, 40.85);
pub const B1: (f64, f64) = (-73.8, 40.6);
pub const B2: (f64, f64) = (-73.8, 40.9);
pub const T: (f64, f64) = (-73.7, 40.7);
pub const C: (f64, f64) = (-73.6, 40.7);
pub const Z: (f64, f64) = (-70.0, 40.0);

pub const M1: (f64, f64) = (-73.97, 40.72);
pub const X: (f64, f64) = (-73.95, 40.76);
pub const M7: (f64, f64) = (-73.8, 40.85);

fn station(id: &str, name: &str, (lng, lat): (f64, f64)) -> StationImpl {
    StationImpl {
        id: StationIdentifier::new(id),
        name: name.into(),
        location: Point::new(lng, lat),
    }
}

fn route(id: &str, color: &str, shapes: &[&str]) -> RouteImpl {
    RouteImpl {
        id: RouteIdentifier::new(id),
        color: color.into(),
        long_name: None,
        shape_ids: shapes.iter().map(|s| ShapeIdentifier::new(s)).collect(),
    }
}

fn shape(id: &str, route: &str, points: &[(f64, f64)]) -> ShapeImpl {
    ShapeImpl {
        id: ShapeIdentifier::new(id),
        route_id: RouteIdentifier::new(route),
        path: LineString::from(points.to_vec()),
    }
}

pub fn provider() -> StaticTransitProvider {
    let stations = vec![
        station("S1", "South Ferry", S1),
        station("S2", "Canal St", S2),
        station("S3", "14 St", S3),
        station("S4", "Times Sq-42 St", S4),
        station("B1", "Far Rockaway", B1),
        station("B2", "Lefferts Blvd", B2),
        station("T", "Rockaway Blvd", T),
        station("C", "Broad Channel", C),
        station("Z", "Nowhere", Z),
    ];

    let routes = vec![
        route("1", "#EE352E", &["1"]),
        route("S", "#808183", &["S"]),
        route("7", "#B933AD", &["7"]),
        route("A", "#0039A6", &["A1", "A2"]),
    ];

    let shapes = vec![
        shape("1", "1", &[S1, M1, S2, S3, S4]),
        shape("S", "S", &[S1, X, S3]),
        shape("7", "7", &[S4, M7, T]),
        shape("A1", "A", &[B1, T, C]),
        shape("A2", "A", &[B2, T, C]),
    ];

    StaticTransitProvider::from_data(stations, routes, shapes)
}

pub fn trip(routes: [&str; 3], stops: [&str; 6]) -> Trip {
    let [origin, first_arrival, first_departure, second_arrival, second_departure, destination] =
        stops.map(StationIdentifier::new);
    Trip {
        routes: routes.map(RouteIdentifier::new),
        solution: Solution {
            origin,
            first_transfer_arrival: first_arrival,
            first_transfer_departure: first_departure,
            second_transfer_arrival: second_arrival,
            second_transfer_departure: second_departure,
            destination,
        },
    }
}

pub fn coords(points: &[(f64, f64)]) -> Vec<geo::Coord> {
    points.iter().map(|&p| p.into()).collect()
}
