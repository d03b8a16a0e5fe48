use anyhow::{Context, Result};
use geojson::GeoJson;
use std::io::Write;
use std::path::Path;

use subway_itinerary::ResolvedTrip;

/// What part of a resolved trip to emit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Everything,
    StopsOnly,
}

/// Build the GeoJSON document for a resolved trip
pub fn trip_geojson(trip: &ResolvedTrip, selection: Selection) -> GeoJson {
    match selection {
        Selection::Everything => trip.to_geojson(),
        Selection::StopsOnly => GeoJson::from(trip.stops_collection()),
    }
}

/// Write GeoJSON to a file, or to stdout when no path is given
pub fn write_geojson(geojson: &GeoJson, output_path: Option<&Path>) -> Result<()> {
    let json_string =
        serde_json::to_string_pretty(geojson).context("Failed to serialize GeoJSON")?;

    match output_path {
        Some(path) => {
            std::fs::write(path, json_string)
                .with_context(|| format!("Failed to write GeoJSON to {}", path.display()))?;
            tracing::info!("Output written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json_string}").context("Failed to write GeoJSON to stdout")?;
        }
    }

    Ok(())
}
