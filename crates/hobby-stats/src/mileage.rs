//! Mileage statistics over series of kind [`SeriesKind::Mileage`].
//!
//! All other series kinds are ignored here; a date-only log has nothing to
//! sum.

use hobby_core::models::{HobbySeries, SeriesKind, SeriesStore, SECONDS_IN_YEAR};
use hobby_core::{Result, StatsError};

use crate::{round2, StatMap, StatValue};

/// The per-series reductions the mileage engine knows how to apply.
///
/// A closed enum: there is no "unknown reducer" failure mode to signal at
/// runtime, the compiler rejects it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Sum,
    Mean,
    Max,
    Min,
}

/// Read-only mileage computations over the series store.
pub struct MileageStats<'a> {
    store: &'a SeriesStore,
}

impl<'a> MileageStats<'a> {
    pub fn new(store: &'a SeriesStore) -> Self {
        Self { store }
    }

    /// Sum of every distance across every mileage series, together with the
    /// whole years spanned by the mileage timestamps alone.
    pub fn total_mileage_and_years(&self) -> Result<StatMap> {
        let mut total = 0.0;
        let mut extent: Option<(u64, u64)> = None;

        for series in self.mileage_series() {
            total += series.distances.iter().sum::<f64>();
            for &ts in &series.timestamps {
                extent = Some(match extent {
                    None => (ts, ts),
                    Some((lo, hi)) => (lo.min(ts), hi.max(ts)),
                });
            }
        }

        let (oldest, newest) = extent.ok_or(StatsError::EmptyStore {
            computation: "total mileage and years",
        })?;
        let years = (newest - oldest) / SECONDS_IN_YEAR;

        let mut ret = StatMap::new();
        ret.insert("total mileage".to_string(), StatValue::Amount(round2(total)));
        ret.insert("total years".to_string(), StatValue::Count(years));
        Ok(ret)
    }

    /// Total distance per mileage series.
    pub fn total_mileage_per_hobby(&self) -> Result<StatMap> {
        self.reduce_per_hobby(Reducer::Sum)
    }

    /// Mean distance per mileage series.
    pub fn avg_mileage_per_hobby(&self) -> Result<StatMap> {
        self.reduce_per_hobby(Reducer::Mean)
    }

    /// Longest single distance per mileage series.
    pub fn max_mileage_per_hobby(&self) -> Result<StatMap> {
        self.reduce_per_hobby(Reducer::Max)
    }

    /// Shortest single distance per mileage series.
    pub fn min_mileage_per_hobby(&self) -> Result<StatMap> {
        self.reduce_per_hobby(Reducer::Min)
    }

    /// Apply one reduction to every mileage series' distances.
    ///
    /// A mileage series whose rows all failed to parse has no distances;
    /// its mean/max/min are undefined, so that is a distinct precondition
    /// error rather than a zero.
    pub fn reduce_per_hobby(&self, reducer: Reducer) -> Result<StatMap> {
        let mut ret = StatMap::new();

        for series in self.mileage_series() {
            if series.distances.is_empty() {
                return Err(StatsError::NoDistances {
                    hobby: series.name.clone(),
                });
            }

            let raw = match reducer {
                Reducer::Sum => series.distances.iter().sum::<f64>(),
                Reducer::Mean => {
                    series.distances.iter().sum::<f64>() / series.distances.len() as f64
                }
                Reducer::Max => series.distances.iter().copied().fold(f64::MIN, f64::max),
                Reducer::Min => series.distances.iter().copied().fold(f64::MAX, f64::min),
            };

            ret.insert(series.name.clone(), StatValue::Amount(round2(raw)));
        }

        Ok(ret)
    }

    fn mileage_series(&self) -> impl Iterator<Item = &HobbySeries> {
        self.store
            .values()
            .filter(|s| s.kind == SeriesKind::Mileage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobby_core::models::HobbySeries;

    const DATE: u64 = 1_640_995_200;
    const DAY: u64 = 86_400;

    fn mileage_store() -> SeriesStore {
        let mut store = SeriesStore::new();
        store.insert(
            "Test Activity".to_string(),
            HobbySeries::mileage(
                "Test Activity",
                vec![DATE, DATE + DAY, DATE + 2 * DAY],
                vec![2.0, 2.0, 5.0],
            ),
        );
        store
    }

    #[test]
    fn test_total_mileage_and_years() {
        let store = mileage_store();
        let ret = MileageStats::new(&store).total_mileage_and_years().unwrap();
        assert_eq!(ret["total mileage"], StatValue::Amount(9.0));
        assert_eq!(ret["total years"], StatValue::Count(0));
    }

    #[test]
    fn test_total_mileage_per_hobby() {
        let store = mileage_store();
        let ret = MileageStats::new(&store).total_mileage_per_hobby().unwrap();
        assert_eq!(ret["Test Activity"], StatValue::Amount(9.0));
    }

    #[test]
    fn test_avg_mileage_per_hobby() {
        let store = mileage_store();
        let ret = MileageStats::new(&store).avg_mileage_per_hobby().unwrap();
        assert_eq!(ret["Test Activity"], StatValue::Amount(3.0));
    }

    #[test]
    fn test_max_mileage_per_hobby() {
        let store = mileage_store();
        let ret = MileageStats::new(&store).max_mileage_per_hobby().unwrap();
        assert_eq!(ret["Test Activity"], StatValue::Amount(5.0));
    }

    #[test]
    fn test_min_mileage_per_hobby() {
        let store = mileage_store();
        let ret = MileageStats::new(&store).min_mileage_per_hobby().unwrap();
        assert_eq!(ret["Test Activity"], StatValue::Amount(2.0));
    }

    #[test]
    fn test_non_mileage_series_are_ignored() {
        let mut store = mileage_store();
        store.insert(
            "Disc Golf".to_string(),
            HobbySeries::date_only("Disc Golf", vec![DATE]),
        );

        let stats = MileageStats::new(&store);
        let ret = stats.total_mileage_per_hobby().unwrap();
        assert_eq!(ret.len(), 1);
        assert!(!ret.contains_key("Disc Golf"));

        // The year span only considers mileage timestamps.
        let overall = stats.total_mileage_and_years().unwrap();
        assert_eq!(overall["total mileage"], StatValue::Amount(9.0));
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let mut store = SeriesStore::new();
        store.insert(
            "Runs".to_string(),
            HobbySeries::mileage("Runs", vec![DATE, DATE + DAY], vec![1.111, 2.222]),
        );
        let ret = MileageStats::new(&store).avg_mileage_per_hobby().unwrap();
        assert_eq!(ret["Runs"], StatValue::Amount(1.67));
    }

    #[test]
    fn test_no_mileage_series_fails_overall() {
        let mut store = SeriesStore::new();
        store.insert(
            "Disc Golf".to_string(),
            HobbySeries::date_only("Disc Golf", vec![DATE]),
        );
        let err = MileageStats::new(&store)
            .total_mileage_and_years()
            .unwrap_err();
        assert!(matches!(err, StatsError::EmptyStore { .. }));
    }

    #[test]
    fn test_empty_distances_is_distinct_error() {
        let mut store = SeriesStore::new();
        store.insert(
            "Runs".to_string(),
            HobbySeries::mileage("Runs", vec![], vec![]),
        );
        let err = MileageStats::new(&store).avg_mileage_per_hobby().unwrap_err();
        assert!(matches!(err, StatsError::NoDistances { .. }));
    }
}
