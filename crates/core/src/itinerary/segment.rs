//! Route-segment geometry: the stretch of a route's shape between two
//! stations.
//!
//! Stations sit exactly on shape points, so endpoints are located by exact
//! coordinate equality. The returned line always runs from the leg's begin
//! station to its end station, whatever direction the shape is stored in.

use std::sync::Arc;

use geo::{Coord, LineString};

use crate::error::{Endpoint, ItineraryError, Result};
use crate::itinerary::Leg;
use crate::transit::{same_position, RouteIdentifier, ShapeIdentifier, TransitProvider, TransitShape};

/// Resolved geometry of one leg
#[derive(Clone, Debug, PartialEq)]
pub struct LineFeature {
    pub route: RouteIdentifier,
    pub color: Arc<str>,
    pub shape: ShapeIdentifier,
    pub line: LineString,
}

fn position_of(path: &LineString, target: Coord) -> Option<usize> {
    path.0.iter().position(|&c| same_position(c, target))
}

fn contains(path: &LineString, target: Coord) -> bool {
    position_of(path, target).is_some()
}

/// Pick the candidate shape for a leg.
///
/// A lone candidate is returned as is. Among several, the first one holding
/// both endpoints wins; if none holds both, the last-listed candidate is used.
pub fn select_shape(
    candidates: &[Arc<dyn TransitShape>],
    begin: Coord,
    end: Coord,
) -> Option<&Arc<dyn TransitShape>> {
    match candidates {
        [] => None,
        [only] => Some(only),
        [.., last] => candidates
            .iter()
            .find(|shape| contains(shape.path(), begin) && contains(shape.path(), end))
            .or_else(|| {
                tracing::warn!(
                    route = %last.route_id(),
                    fallback = %last.id(),
                    "no candidate shape holds both endpoints"
                );
                Some(last)
            }),
    }
}

/// Inclusive slice of `path` from index `begin` to index `end`, in that order.
fn slice_between(path: &LineString, begin: usize, end: usize) -> LineString {
    if begin <= end {
        LineString::from(path.0[begin..=end].to_vec())
    } else {
        path.0[end..=begin].iter().rev().copied().collect()
    }
}

/// Resolve a leg to the part of its route's shape between its two stations.
///
/// Station lookups happen before any route or shape lookup. An endpoint that
/// is not on the selected shape is reported as
/// [`ItineraryError::GeometryResolution`], begin endpoint first.
pub fn resolve_leg<P>(provider: &P, leg: &Leg) -> Result<LineFeature>
where
    P: TransitProvider + ?Sized,
{
    let begin = provider.station(&leg.begin)?.location().0;
    let end = provider.station(&leg.end)?.location().0;

    let route = provider.route(&leg.route)?;
    let candidates = provider.shape_candidates(&leg.route)?;

    let missing = |endpoint: Endpoint| {
        let station = match endpoint {
            Endpoint::Begin => leg.begin.clone(),
            Endpoint::End => leg.end.clone(),
        };
        ItineraryError::GeometryResolution {
            endpoint,
            route: leg.route.clone(),
            station,
        }
    };

    let shape = select_shape(&candidates, begin, end).ok_or_else(|| missing(Endpoint::Begin))?;
    let path = shape.path();

    let begin_index = position_of(path, begin).ok_or_else(|| missing(Endpoint::Begin))?;
    let end_index = position_of(path, end).ok_or_else(|| missing(Endpoint::End))?;

    let line = slice_between(path, begin_index, end_index);

    tracing::debug!(
        route = %leg.route,
        shape = %shape.id(),
        begin_index,
        end_index,
        points = line.0.len(),
        "resolved leg"
    );

    Ok(LineFeature {
        route: leg.route.clone(),
        color: route.color().into(),
        shape: shape.id().clone(),
        line,
    })
}
