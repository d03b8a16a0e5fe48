//! Point features for the stations a trip visits.

use std::sync::Arc;

use geo::Point;
use itertools::Itertools;

use crate::error::Result;
use crate::transit::{StationIdentifier, TransitProvider};

/// A station marker: identifier, display name and position
#[derive(Clone, Debug, PartialEq)]
pub struct StopFeature {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub location: Point,
}

/// Build one feature per distinct station, in order of first appearance.
///
/// Fails on the first identifier missing from the station table.
pub fn stop_features<'a, P>(
    provider: &P,
    stops: impl IntoIterator<Item = &'a StationIdentifier>,
) -> Result<Vec<StopFeature>>
where
    P: TransitProvider + ?Sized,
{
    stops
        .into_iter()
        .unique()
        .map(|id| -> Result<StopFeature> {
            let station = provider.station(id)?;
            Ok(StopFeature {
                id: id.clone(),
                name: station.name().into(),
                location: station.location(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItineraryError;
    use crate::itinerary::fixtures;
    use crate::transit::TransitError;

    fn ids(features: &[StopFeature]) -> Vec<&str> {
        features.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_features_carry_station_data() {
        let provider = fixtures::provider();
        let stops = [StationIdentifier::new("S1"), StationIdentifier::new("T")];

        let features = stop_features(&provider, &stops).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(&*features[0].name, "South Ferry");
        assert_eq!(features[0].location, Point::new(-74.0, 40.7));
        assert_eq!(&*features[1].name, "Rockaway Blvd");
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let provider = fixtures::provider();
        let trip = fixtures::trip(["1", "7", "A"], ["S1", "S4", "S4", "T", "T", "C"]);

        let features = stop_features(&provider, &trip.stops()).unwrap();
        assert_eq!(ids(&features), ["S1", "S4", "T", "C"]);
    }

    #[test]
    fn test_non_adjacent_repeats_are_removed() {
        let provider = fixtures::provider();
        let trip = fixtures::trip(["S", "1", "S"], ["S1", "S3", "S2", "S1", "S1", "S3"]);

        let features = stop_features(&provider, &trip.stops()).unwrap();
        assert_eq!(ids(&features), ["S1", "S3", "S2"]);
    }

    #[test]
    fn test_empty_input() {
        let provider = fixtures::provider();
        let stops: [StationIdentifier; 0] = [];
        let features = stop_features(&provider, &stops).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_unknown_station() {
        let provider = fixtures::provider();
        let stops = [StationIdentifier::new("S1"), StationIdentifier::new("missing")];

        let err = stop_features(&provider, &stops).unwrap_err();
        assert!(matches!(
            err,
            ItineraryError::Transit(TransitError::StationNotFound(ref id)) if id.as_str() == "missing"
        ));
    }
}
