//! Day-indexed puzzle answers.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::itinerary::{Trip, TripSource};

/// Default first day of the game (day index 0)
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 29) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Whole days from `epoch` to `today`; negative before the epoch.
pub fn game_index(today: NaiveDate, epoch: NaiveDate) -> i64 {
    (today - epoch).num_days()
}

/// All answers, one per day, starting at day index 0
#[derive(Clone, Debug, Default)]
pub struct PuzzleBook {
    trips: Vec<Trip>,
}

impl PuzzleBook {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl TripSource for PuzzleBook {
    fn trip_for_day(&self, day_index: i64) -> Option<Trip> {
        usize::try_from(day_index)
            .ok()
            .and_then(|i| self.trips.get(i))
            .cloned()
    }
}
