use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use subway_itinerary::transit::ReferenceData;
use subway_itinerary::{assemble_day, game_index, PuzzleBook, DEFAULT_EPOCH};

mod output;

use output::{trip_geojson, write_geojson, Selection};

#[derive(Parser, Debug)]
#[command(
    name = "trip-geojson",
    author,
    version,
    about = "Resolve a day's subway puzzle answer into GeoJSON map features",
    long_about = "Loads the station, route and shape tables plus the puzzle book, picks the \
                  trip for the requested day and writes its stops and the three route \
                  segments as a GeoJSON FeatureCollection.\n\n\
                  Without --day or --date the current local date is used."
)]
struct Args {
    /// Directory holding stations.json, routes.json and shapes.json
    #[arg(short = 'd', long, env = "SUBWAY_DATA_DIR")]
    data_dir: PathBuf,

    /// Puzzle book: JSON array of { routes, solution } entries, one per day
    #[arg(short, long, env = "SUBWAY_PUZZLES")]
    puzzles: PathBuf,

    /// Day index to resolve (0 is the epoch)
    #[arg(long, conflicts_with = "date", allow_negative_numbers = true)]
    day: Option<i64>,

    /// Calendar date to resolve, as YYYY-MM-DD
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Date of day index 0
    #[arg(long, env = "SUBWAY_EPOCH", default_value_t = DEFAULT_EPOCH)]
    epoch: NaiveDate,

    /// Output GeoJSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only emit the stop markers
    #[arg(long)]
    stops_only: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn day_index(&self) -> i64 {
        match (self.day, self.date) {
            (Some(day), _) => day,
            (None, Some(date)) => game_index(date, self.epoch),
            (None, None) => game_index(Local::now().date_naive(), self.epoch),
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Validate inputs exist
    if !args.data_dir.is_dir() {
        bail!("Data directory does not exist: {}", args.data_dir.display());
    }
    if !args.puzzles.is_file() {
        bail!("Puzzle book does not exist: {}", args.puzzles.display());
    }

    tracing::info!("Data: {}", args.data_dir.display());
    let provider = ReferenceData::from_dir(&args.data_dir)
        .and_then(ReferenceData::into_provider)
        .context("Failed to load reference data")?;

    let book = PuzzleBook::from_path(&args.puzzles)
        .with_context(|| format!("Failed to load puzzle book {}", args.puzzles.display()))?;
    tracing::info!("Puzzle book: {} days", book.len());

    let day = args.day_index();
    tracing::info!("Resolving day {day}");

    let resolved = assemble_day(&book, &provider, day)
        .with_context(|| format!("Failed to resolve the trip for day {day}"))?;

    let selection = if args.stops_only {
        Selection::StopsOnly
    } else {
        Selection::Everything
    };
    write_geojson(&trip_geojson(&resolved, selection), args.output.as_deref())
}
