//! Trip statistics over the timestamp component of every series.

use hobby_core::models::{SeriesStore, SECONDS_IN_YEAR};
use hobby_core::{Result, StatsError};

use crate::{round2, StatMap, StatValue};

/// Days assumed per year for activity percentages. Fixed at 365 regardless
/// of leap years; the simplification is part of the reported numbers.
const DAYS_IN_YEAR: f64 = 365.0;

/// Read-only trip-count computations over the full series store.
///
/// Every series kind contributes here: a trip-count log's expanded
/// timestamps count the same as a dated mileage ride.
pub struct TripStats<'a> {
    store: &'a SeriesStore,
}

impl<'a> TripStats<'a> {
    pub fn new(store: &'a SeriesStore) -> Self {
        Self { store }
    }

    /// Count of all timestamps across all series.
    pub fn total_trips(&self) -> Result<StatMap> {
        let total: usize = self.store.values().map(|s| s.timestamps.len()).sum();

        let mut ret = StatMap::new();
        ret.insert("total trips".to_string(), StatValue::Count(total as u64));
        Ok(ret)
    }

    /// Whole years spanned by the oldest and newest timestamp combined,
    /// using the fixed 365-day year.
    pub fn total_years(&self) -> Result<StatMap> {
        let (oldest, newest) = self.timestamp_extent("total years")?;
        let years = (newest - oldest) / SECONDS_IN_YEAR;

        let mut ret = StatMap::new();
        ret.insert("total years".to_string(), StatValue::Count(years));
        Ok(ret)
    }

    /// Timestamp count per series.
    pub fn total_trips_per_hobby(&self) -> Result<StatMap> {
        Ok(self
            .store
            .values()
            .map(|s| (s.name.clone(), StatValue::Count(s.timestamps.len() as u64)))
            .collect())
    }

    /// Timestamps bucketed by calendar year, counted per year.
    pub fn total_trips_per_year(&self) -> Result<StatMap> {
        let mut ret = StatMap::new();
        for (year, count) in self.trips_by_year() {
            ret.insert(year.to_string(), StatValue::Count(count));
        }
        Ok(ret)
    }

    /// For each year, the share of its 365 days with a trip, as a
    /// percentage. Exceeds 100 when a year holds more trips than days.
    pub fn pct_active_days_per_year(&self) -> Result<StatMap> {
        self.require_timestamps("percent active days per year")?;

        let mut ret = StatMap::new();
        for (year, count) in self.trips_by_year() {
            let pct = round2((count as f64 / DAYS_IN_YEAR) * 100.0);
            ret.insert(year.to_string(), StatValue::Amount(pct));
        }
        Ok(ret)
    }

    /// Each series' share of the combined trip count, as a percentage.
    pub fn pct_hobby_of_total(&self) -> Result<StatMap> {
        let total = self.require_timestamps("percent of total per hobby")?;

        let mut ret = StatMap::new();
        for series in self.store.values() {
            let pct = round2((series.timestamps.len() as f64 / total as f64) * 100.0);
            ret.insert(series.name.clone(), StatValue::Amount(pct));
        }
        Ok(ret)
    }

    /// Each year's share of the combined trip count, as a percentage.
    pub fn pct_year_of_total(&self) -> Result<StatMap> {
        let total = self.require_timestamps("percent of total per year")?;

        let mut ret = StatMap::new();
        for (year, count) in self.trips_by_year() {
            let pct = round2((count as f64 / total as f64) * 100.0);
            ret.insert(year.to_string(), StatValue::Amount(pct));
        }
        Ok(ret)
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Total timestamp count, or a labeled precondition error when the
    /// store holds none. Percentages over an empty store are undefined and
    /// must never silently come back as zero.
    fn require_timestamps(&self, computation: &'static str) -> Result<u64> {
        let total: usize = self.store.values().map(|s| s.timestamps.len()).sum();
        if total == 0 {
            return Err(StatsError::EmptyStore { computation });
        }
        Ok(total as u64)
    }

    /// Oldest and newest timestamp across all series.
    fn timestamp_extent(&self, computation: &'static str) -> Result<(u64, u64)> {
        let all = self.store.values().flat_map(|s| s.timestamps.iter().copied());
        let (min, max) = all.fold(None, |acc: Option<(u64, u64)>, ts| match acc {
            None => Some((ts, ts)),
            Some((lo, hi)) => Some((lo.min(ts), hi.max(ts))),
        })
        .ok_or(StatsError::EmptyStore { computation })?;
        Ok((min, max))
    }

    /// Bucket every timestamp into its year and count occurrences.
    ///
    /// The year is derived by dividing the epoch value by the fixed-length
    /// year, not by calendar lookup; it matches the rest of the fixed-year
    /// arithmetic in this engine.
    fn trips_by_year(&self) -> std::collections::BTreeMap<u64, u64> {
        let mut by_year = std::collections::BTreeMap::new();
        for series in self.store.values() {
            for &ts in &series.timestamps {
                let year = ts / SECONDS_IN_YEAR + 1970;
                *by_year.entry(year).or_insert(0) += 1;
            }
        }
        by_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobby_core::models::HobbySeries;

    // Jan 1, 2022 at midnight UTC.
    const DATE: u64 = 1_640_995_200;
    const DAY: u64 = 86_400;

    fn two_series_store() -> SeriesStore {
        let mut store = SeriesStore::new();
        store.insert(
            "A".to_string(),
            HobbySeries::date_only("A", vec![DATE, DATE + DAY, DATE + 2 * DAY]),
        );
        store.insert(
            "B".to_string(),
            HobbySeries::trip_count("B", vec![DATE, DATE, DATE]),
        );
        store
    }

    #[test]
    fn test_total_trips_counts_all_series() {
        let store = two_series_store();
        let ret = TripStats::new(&store).total_trips().unwrap();
        assert_eq!(ret["total trips"], StatValue::Count(6));
    }

    #[test]
    fn test_total_years_two_day_span_is_zero() {
        // A 2-day extent divided by the 365-day year floors to 0.
        let store = two_series_store();
        let ret = TripStats::new(&store).total_years().unwrap();
        assert_eq!(ret["total years"], StatValue::Count(0));
    }

    #[test]
    fn test_total_years_across_series() {
        let mut store = SeriesStore::new();
        store.insert(
            "A".to_string(),
            HobbySeries::date_only("A", vec![DATE]),
        );
        store.insert(
            "B".to_string(),
            HobbySeries::date_only("B", vec![DATE + 3 * SECONDS_IN_YEAR + DAY]),
        );
        let ret = TripStats::new(&store).total_years().unwrap();
        assert_eq!(ret["total years"], StatValue::Count(3));
    }

    #[test]
    fn test_total_trips_per_hobby_sums_to_total() {
        let store = two_series_store();
        let stats = TripStats::new(&store);

        let per_hobby = stats.total_trips_per_hobby().unwrap();
        let sum: u64 = per_hobby
            .values()
            .map(|v| match v {
                StatValue::Count(n) => *n,
                StatValue::Amount(_) => 0,
            })
            .sum();

        let total = stats.total_trips().unwrap();
        assert_eq!(total["total trips"], StatValue::Count(sum));
    }

    #[test]
    fn test_total_trips_per_year() {
        let store = two_series_store();
        let ret = TripStats::new(&store).total_trips_per_year().unwrap();
        // All six timestamps land in the same fixed-year bucket.
        assert_eq!(ret.len(), 1);
        let (_, count) = ret.iter().next().unwrap();
        assert_eq!(*count, StatValue::Count(6));
    }

    #[test]
    fn test_pct_active_days_per_year() {
        let store = two_series_store();
        let ret = TripStats::new(&store).pct_active_days_per_year().unwrap();
        // 6 trips / 365 days = 1.64%.
        let (_, pct) = ret.iter().next().unwrap();
        assert_eq!(*pct, StatValue::Amount(1.64));
    }

    #[test]
    fn test_pct_hobby_of_total() {
        let store = two_series_store();
        let ret = TripStats::new(&store).pct_hobby_of_total().unwrap();
        assert_eq!(ret["A"], StatValue::Amount(50.0));
        assert_eq!(ret["B"], StatValue::Amount(50.0));
    }

    #[test]
    fn test_pct_hobby_of_total_sums_to_100() {
        let mut store = SeriesStore::new();
        store.insert("A".to_string(), HobbySeries::date_only("A", vec![DATE]));
        store.insert(
            "B".to_string(),
            HobbySeries::date_only("B", vec![DATE, DATE + DAY]),
        );
        store.insert(
            "C".to_string(),
            HobbySeries::trip_count("C", vec![DATE, DATE, DATE]),
        );

        let ret = TripStats::new(&store).pct_hobby_of_total().unwrap();
        let sum: f64 = ret.values().map(|v| v.as_f64()).sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
    }

    #[test]
    fn test_pct_year_of_total_sums_to_100() {
        let mut store = SeriesStore::new();
        store.insert(
            "A".to_string(),
            HobbySeries::date_only(
                "A",
                vec![DATE, DATE + SECONDS_IN_YEAR, DATE + 2 * SECONDS_IN_YEAR],
            ),
        );
        let ret = TripStats::new(&store).pct_year_of_total().unwrap();
        assert_eq!(ret.len(), 3);
        let sum: f64 = ret.values().map(|v| v.as_f64()).sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
    }

    #[test]
    fn test_empty_store_total_trips_is_zero() {
        let store = SeriesStore::new();
        let ret = TripStats::new(&store).total_trips().unwrap();
        assert_eq!(ret["total trips"], StatValue::Count(0));
    }

    #[test]
    fn test_empty_store_total_years_fails() {
        let store = SeriesStore::new();
        let err = TripStats::new(&store).total_years().unwrap_err();
        assert!(matches!(err, StatsError::EmptyStore { .. }));
    }

    #[test]
    fn test_empty_store_percentages_fail() {
        let store = SeriesStore::new();
        let stats = TripStats::new(&store);
        assert!(matches!(
            stats.pct_hobby_of_total().unwrap_err(),
            StatsError::EmptyStore { .. }
        ));
        assert!(matches!(
            stats.pct_year_of_total().unwrap_err(),
            StatsError::EmptyStore { .. }
        ));
        assert!(matches!(
            stats.pct_active_days_per_year().unwrap_err(),
            StatsError::EmptyStore { .. }
        ));
    }
}
