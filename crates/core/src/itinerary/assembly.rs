//! Whole-trip assembly: stop markers plus one line per leg.

use crate::error::{ItineraryError, Result};
use crate::itinerary::segment::{resolve_leg, LineFeature};
use crate::itinerary::stops::{stop_features, StopFeature};
use crate::itinerary::Trip;
use crate::transit::TransitProvider;

/// Supplier of the puzzle answer for a given day index
pub trait TripSource {
    fn trip_for_day(&self, day_index: i64) -> Option<Trip>;
}

/// Geometry for a full trip, ready to hand to a map
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTrip {
    pub stops: Vec<StopFeature>,
    /// One line per leg, in leg order
    pub lines: [LineFeature; 3],
}

/// Resolve the stops and all three legs of a trip.
///
/// Aborts on the first failing leg; no partial trip is returned.
pub fn resolve_trip<P>(provider: &P, trip: &Trip) -> Result<ResolvedTrip>
where
    P: TransitProvider + ?Sized,
{
    let stops = stop_features(provider, &trip.stops())?;

    let [first, second, third] = trip.legs();
    let lines = [
        resolve_leg(provider, &first)?,
        resolve_leg(provider, &second)?,
        resolve_leg(provider, &third)?,
    ];

    Ok(ResolvedTrip { stops, lines })
}

/// Look up the trip for `day_index` and resolve it.
pub fn assemble_day<S, P>(source: &S, provider: &P, day_index: i64) -> Result<ResolvedTrip>
where
    S: TripSource + ?Sized,
    P: TransitProvider + ?Sized,
{
    let trip = source
        .trip_for_day(day_index)
        .ok_or(ItineraryError::NoTripForDay(day_index))?;

    tracing::debug!(day_index, routes = ?trip.routes, "resolving trip");
    resolve_trip(provider, &trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;
    use crate::itinerary::fixtures::{self, *};

    struct Days(Vec<Trip>);

    impl TripSource for Days {
        fn trip_for_day(&self, day_index: i64) -> Option<Trip> {
            usize::try_from(day_index).ok().and_then(|i| self.0.get(i)).cloned()
        }
    }

    fn rockaway_trip() -> Trip {
        fixtures::trip(["1", "7", "A"], ["S1", "S4", "S4", "T", "T", "C"])
    }

    #[test]
    fn test_three_lines_in_leg_order() {
        let resolved = resolve_trip(&fixtures::provider(), &rockaway_trip()).unwrap();

        let routes: Vec<_> = resolved.lines.iter().map(|l| l.route.as_str()).collect();
        assert_eq!(routes, ["1", "7", "A"]);

        assert_eq!(resolved.lines[0].line.0, coords(&[S1, M1, S2, S3, S4]));
        assert_eq!(resolved.lines[1].line.0, coords(&[S4, M7, T]));
        assert_eq!(resolved.lines[2].line.0, coords(&[T, C]));
        assert_eq!(&*resolved.lines[2].color, "#0039A6");
    }

    #[test]
    fn test_stops_deduplicated() {
        let resolved = resolve_trip(&fixtures::provider(), &rockaway_trip()).unwrap();

        let ids: Vec<_> = resolved.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["S1", "S4", "T", "C"]);
    }

    #[test]
    fn test_distinct_transfer_stations() {
        let trip = fixtures::trip(["S", "1", "7"], ["S1", "S3", "S2", "S4", "S4", "T"]);
        let resolved = resolve_trip(&fixtures::provider(), &trip).unwrap();

        assert_eq!(resolved.stops.len(), 5);
        assert_eq!(resolved.lines[1].line.0, coords(&[S2, S3, S4]));
    }

    #[test]
    fn test_failing_leg_aborts_trip() {
        let trip = fixtures::trip(["1", "7", "A"], ["S1", "S4", "S4", "T", "T", "S1"]);
        let err = resolve_trip(&fixtures::provider(), &trip).unwrap_err();

        assert!(matches!(
            err,
            ItineraryError::GeometryResolution { endpoint: Endpoint::End, .. }
        ));
    }

    #[test]
    fn test_assemble_day() {
        let source = Days(vec![rockaway_trip()]);
        let provider = fixtures::provider();

        let resolved = assemble_day(&source, &provider, 0).unwrap();
        assert_eq!(resolved.stops.len(), 4);

        assert!(matches!(
            assemble_day(&source, &provider, 1),
            Err(ItineraryError::NoTripForDay(1))
        ));
        assert!(matches!(
            assemble_day(&source, &provider, -1),
            Err(ItineraryError::NoTripForDay(-1))
        ));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let provider = fixtures::provider();
        let trip = rockaway_trip();

        assert_eq!(
            resolve_trip(&provider, &trip).unwrap(),
            resolve_trip(&provider, &trip).unwrap()
        );
    }
}
