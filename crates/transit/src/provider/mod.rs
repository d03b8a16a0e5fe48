//! Transit data providers.

#[cfg(feature = "serde")]
pub mod loader;
pub mod static_provider;

#[cfg(feature = "serde")]
pub use loader::ReferenceData;
pub use static_provider::{RouteImpl, ShapeImpl, StaticTransitProvider, StationImpl};
