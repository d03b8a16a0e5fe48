//! # subway-transit
//!
//! Static transit reference data: stations, routes, and route shapes.
//!
//! ## Features
//!
//! - **Read-only tables**: everything is loaded once and shared through `Arc`s
//! - **Branched routes**: a route may list several candidate shapes
//! - **JSON loading**: `stations.json`, `routes.json` and `shapes.json` (feature `serde`)
//!
//! ## Example
//!
//! ```
//! use subway_transit::prelude::*;
//! use geo::{LineString, Point};
//!
//! let station = StationImpl {
//!     id: StationIdentifier::new("A27"),
//!     name: "42 St-Port Authority Bus Terminal".into(),
//!     location: Point::new(-73.989938, 40.757308),
//! };
//!
//! let route = RouteImpl {
//!     id: RouteIdentifier::new("E"),
//!     color: "#0039A6".into(),
//!     long_name: None,
//!     shape_ids: vec![ShapeIdentifier::new("E")],
//! };
//!
//! let shape = ShapeImpl {
//!     id: ShapeIdentifier::new("E"),
//!     route_id: RouteIdentifier::new("E"),
//!     path: LineString::from(vec![(-73.989938, 40.757308), (-73.993391, 40.752287)]),
//! };
//!
//! let provider = StaticTransitProvider::from_data(vec![station], vec![route], vec![shape]);
//!
//! let candidates = provider.shape_candidates(&RouteIdentifier::new("E")).unwrap();
//! assert_eq!(candidates.len(), 1);
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::{
        static_provider::StaticTransitProvider,
        RouteImpl, ShapeImpl, StationImpl,
    };
    #[cfg(feature = "serde")]
    pub use crate::provider::ReferenceData;
}

pub use prelude::*;
