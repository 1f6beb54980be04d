//! Hobby log discovery, classification, and ingestion.
//!
//! Each log file is a CSV with a header row; the header decides which of the
//! three record schemas the file follows. Files are ingested concurrently
//! (the work is I/O-bound) and merged into one [`SeriesStore`] under a
//! mutex. Row-level problems are dropped with a diagnostic and never abort
//! the run; an unreadable log directory is fatal.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use hobby_core::models::{HobbySeries, SeriesKind, SeriesStore};
use hobby_core::timestamp;
use hobby_core::{Result, StatsError};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

/// Column that marks a mileage log. Case sensitive, checked first.
const DISTANCE_COLUMN: &str = "Distance (mi)";
/// Column that marks a trip-count log. Checked second.
const YEARS_COLUMN: &str = "Years";
/// Column that marks a date-only log. Checked last.
const DATE_COLUMN: &str = "Date";

// ── Public API ────────────────────────────────────────────────────────────────

/// Find the regular files directly under `logdir` (no recursion), sorted by
/// path.
///
/// A missing or unreadable directory is a hard failure: no partial store can
/// be produced without enumerating the logs.
pub fn find_log_files(logdir: &Path) -> Result<Vec<PathBuf>> {
    if !logdir.is_dir() {
        return Err(StatsError::LogDirNotFound(logdir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(logdir).min_depth(1).max_depth(1) {
        match entry {
            Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
            Ok(_) => {} // subdirectories are not descended into
            Err(e) => {
                return Err(StatsError::LogDirRead {
                    path: logdir.to_path_buf(),
                    source: e.into(),
                });
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Ingest every log file under `logdir` into a fully populated series store.
///
/// One worker runs per discovered file; each classifies and parses its file
/// locally and only contends with the others on the store insert. All
/// workers are joined before this returns, so the caller always receives the
/// complete, immutable store. Files with an unrecognized header contribute
/// no entry and are reported, not fatal.
pub fn ingest(logdir: &Path) -> Result<SeriesStore> {
    let files = find_log_files(logdir)?;
    if files.is_empty() {
        warn!("No log files found in {}", logdir.display());
    }

    let store = Mutex::new(SeriesStore::new());

    files.par_iter().for_each(|path| {
        if let Some(series) = load_series(path) {
            let mut guard = store.lock().expect("series store mutex poisoned");
            if let Some(prev) = guard.insert(series.name.clone(), series) {
                warn!(
                    "Duplicate hobby name \"{}\" from {}; replacing the earlier series",
                    prev.name,
                    path.display()
                );
            }
        }
    });

    let store = store.into_inner().expect("series store mutex poisoned");
    debug!(
        "Ingested {} series from {} files",
        store.len(),
        files.len()
    );
    Ok(store)
}

/// Classify a header row into one of the three record schemas.
///
/// The checks are ordered: a distance column wins over a years column, which
/// wins over a date column. Returns `None` when nothing matches; the file is
/// then skipped entirely.
pub fn classify_headers(headers: &csv::StringRecord) -> Option<SeriesKind> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if has(DISTANCE_COLUMN) {
        Some(SeriesKind::Mileage)
    } else if has(YEARS_COLUMN) {
        Some(SeriesKind::TripCount)
    } else if has(DATE_COLUMN) {
        Some(SeriesKind::DateOnly)
    } else {
        None
    }
}

/// Derive the human-readable hobby name from a log file path: strip the
/// directory and extension, turn underscores into spaces, title-case each
/// word.
pub fn pretty_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Row schemas ───────────────────────────────────────────────────────────────

// Numeric fields are read as strings so one bad cell drops only that row,
// with a diagnostic naming the value, instead of failing deserialization
// with a generic type error.

#[derive(Debug, Deserialize)]
struct MileageRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Distance (mi)")]
    distance: String,
}

#[derive(Debug, Deserialize)]
struct DateRow {
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Years")]
    years: String,
    #[serde(rename = "Trips")]
    trips: String,
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Classify and parse a single log file into a series.
///
/// Returns `None` when the file cannot be opened, its header cannot be read,
/// or no schema matches; each case is diagnosed and the rest of the run is
/// unaffected.
fn load_series(path: &Path) -> Option<HobbySeries> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Failed to open log {}: {}", path.display(), e);
            return None;
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            warn!("Failed to read header of {}: {}", path.display(), e);
            return None;
        }
    };

    let kind = match classify_headers(&headers) {
        Some(k) => k,
        None => {
            warn!(
                "Skipping {}: header matches no known log format",
                path.display()
            );
            return None;
        }
    };

    let name = pretty_name(path);
    debug!("Loading {} as a {} log", path.display(), kind);

    let series = match kind {
        SeriesKind::Mileage => {
            let (timestamps, distances) = load_mileage_rows(&mut reader, path);
            HobbySeries::mileage(name, timestamps, distances)
        }
        SeriesKind::DateOnly => HobbySeries::date_only(name, load_date_rows(&mut reader, path)),
        SeriesKind::TripCount => HobbySeries::trip_count(name, load_trip_rows(&mut reader, path)),
    };

    Some(series)
}

/// Read mileage rows, retaining a date/distance pair only when both parse.
fn load_mileage_rows<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
) -> (Vec<u64>, Vec<f64>) {
    let mut timestamps = Vec::new();
    let mut distances = Vec::new();

    for row in reader.deserialize::<MileageRow>() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                warn!("Bad row in {}: {}", path.display(), e);
                continue;
            }
        };

        let ts = match timestamp::parse_date(&row.date) {
            Some(ts) => ts,
            None => {
                warn!("Bad date \"{}\" in {}", row.date, path.display());
                continue;
            }
        };

        let miles = match row.distance.parse::<f64>() {
            Ok(m) if m >= 0.0 => m,
            _ => {
                warn!("Bad distance \"{}\" in {}", row.distance, path.display());
                continue;
            }
        };

        timestamps.push(ts);
        distances.push(miles);
    }

    (timestamps, distances)
}

/// Read date-only rows, dropping any with an unparseable date.
fn load_date_rows<R: std::io::Read>(reader: &mut csv::Reader<R>, path: &Path) -> Vec<u64> {
    let mut timestamps = Vec::new();

    for row in reader.deserialize::<DateRow>() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                warn!("Bad row in {}: {}", path.display(), e);
                continue;
            }
        };

        match timestamp::parse_date(&row.date) {
            Some(ts) => timestamps.push(ts),
            None => warn!("Bad date \"{}\" in {}", row.date, path.display()),
        }
    }

    timestamps
}

/// Read trip-count rows, expanding each into one timestamp per trip.
///
/// A single year (or season) produces `trips` identical timestamps. A year
/// range distributes the tally evenly across every year in the range using
/// integer division; a remainder from indivisibility is silently dropped.
/// That loss is the documented behavior, not a bug to correct.
fn load_trip_rows<R: std::io::Read>(reader: &mut csv::Reader<R>, path: &Path) -> Vec<u64> {
    let mut timestamps = Vec::new();

    for row in reader.deserialize::<TripRow>() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                warn!("Bad row in {}: {}", path.display(), e);
                continue;
            }
        };

        let years = match timestamp::resolve_year_field(&row.years) {
            Some(y) => y,
            None => {
                warn!("Bad year field \"{}\" in {}", row.years, path.display());
                continue;
            }
        };

        let trips = match row.trips.parse::<u64>() {
            Ok(t) => t,
            Err(_) => {
                warn!("Bad trip count \"{}\" in {}", row.trips, path.display());
                continue;
            }
        };

        let trips_per_year = trips / years.len() as u64;
        for year in years {
            let ts = match timestamp::year_to_timestamp(year) {
                Some(ts) => ts,
                None => {
                    warn!("Unrepresentable year {} in {}", year, path.display());
                    continue;
                }
            };
            timestamps.extend(std::iter::repeat(ts).take(trips_per_year as usize));
        }
    }

    timestamps
}

// ── Tests ─────────────────────────────────────────────────────────────────────
