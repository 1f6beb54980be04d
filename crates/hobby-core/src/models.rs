use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Seconds in a fixed 365-day year.
///
/// All "years logged" arithmetic divides by this constant rather than doing
/// calendar-aware math. Leap years are deliberately ignored; this is part of
/// the observable contract of the statistics, not an oversight.
pub const SECONDS_IN_YEAR: u64 = 31_536_000;

/// Seconds in one day.
pub const SECONDS_IN_DAY: u64 = 86_400;

/// Which record schema a hobby log file follows.
///
/// Decided once when the file's header row is classified and never changed
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Rows carry a date and a distance (`Date`, `Distance (mi)`).
    Mileage,
    /// Rows carry only a date (`Date`).
    #[serde(rename = "date")]
    DateOnly,
    /// Rows carry a year notation and a trip tally (`Years`, `Trips`).
    TripCount,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mileage => write!(f, "mileage"),
            Self::DateOnly => write!(f, "date"),
            Self::TripCount => write!(f, "tripcount"),
        }
    }
}

/// The normalized event history for one hobby, built from exactly one log
/// file and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbySeries {
    /// Human-readable label derived from the file name.
    pub name: String,
    /// Record schema the source file followed.
    pub kind: SeriesKind,
    /// Epoch seconds, one per recorded event/visit. Trip-count logs expand
    /// to one entry per trip, so repeated values are expected.
    pub timestamps: Vec<u64>,
    /// Distances aligned index-for-index with `timestamps`. Empty unless
    /// `kind` is [`SeriesKind::Mileage`].
    #[serde(default)]
    pub distances: Vec<f64>,
}

impl HobbySeries {
    /// Build a mileage series. `timestamps` and `distances` must already be
    /// equal-length and index-aligned; the loaders guarantee this by only
    /// retaining rows where both fields parsed.
    pub fn mileage(name: impl Into<String>, timestamps: Vec<u64>, distances: Vec<f64>) -> Self {
        debug_assert_eq!(timestamps.len(), distances.len());
        Self {
            name: name.into(),
            kind: SeriesKind::Mileage,
            timestamps,
            distances,
        }
    }

    /// Build a date-only series.
    pub fn date_only(name: impl Into<String>, timestamps: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::DateOnly,
            timestamps,
            distances: Vec::new(),
        }
    }

    /// Build a trip-count series from already-expanded timestamps.
    pub fn trip_count(name: impl Into<String>, timestamps: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::TripCount,
            timestamps,
            distances: Vec::new(),
        }
    }

    /// Number of recorded trips (one timestamp per trip).
    pub fn trip_count_total(&self) -> usize {
        self.timestamps.len()
    }
}

/// The standardized series store: hobby name → series.
///
/// Built once per run by the ingestion engine and held read-only by every
/// statistics engine. A `BTreeMap` keeps iteration order deterministic for
/// the printing collaborators.
pub type SeriesStore = BTreeMap<String, HobbySeries>;
