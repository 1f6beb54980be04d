//! Calendar-gap statistics over the timestamp component of every series.

use std::collections::HashMap;

use hobby_core::models::{SeriesStore, SECONDS_IN_DAY};
use hobby_core::{Result, StatsError};

use crate::{StatMap, StatValue};

/// Read-only date-gap computations over the full series store.
pub struct DateGapStats<'a> {
    store: &'a SeriesStore,
}

impl<'a> DateGapStats<'a> {
    pub fn new(store: &'a SeriesStore) -> Self {
        Self { store }
    }

    /// Count of distinct timestamps at which 2 or 3 recorded trips coincide
    /// across all hobbies combined.
    ///
    /// Timestamps occurring 4 or more times are excluded as outliers:
    /// trip-count expansion dumps many identical timestamps into the pool,
    /// and those are not genuine multi-hobby days.
    pub fn multi_activity_days(&self) -> Result<StatMap> {
        let mut occurrences: HashMap<u64, u64> = HashMap::new();
        for series in self.store.values() {
            for &ts in &series.timestamps {
                *occurrences.entry(ts).or_insert(0) += 1;
            }
        }

        let multi = occurrences.values().filter(|&&n| n > 1 && n < 4).count();

        let mut ret = StatMap::new();
        ret.insert(
            "multi activity days".to_string(),
            StatValue::Count(multi as u64),
        );
        Ok(ret)
    }

    /// Average gap between consecutive trips, in whole days, per series.
    pub fn avg_days_between_per_hobby(&self) -> Result<StatMap> {
        self.gap_per_hobby(|gaps| {
            let avg = gaps.iter().sum::<u64>() as f64 / gaps.len() as f64;
            (avg / SECONDS_IN_DAY as f64).floor() as u64
        })
    }

    /// Largest gap between consecutive trips, in whole days, per series.
    pub fn max_days_between_per_hobby(&self) -> Result<StatMap> {
        self.gap_per_hobby(|gaps| {
            let max = gaps.iter().copied().max().unwrap_or(0);
            max / SECONDS_IN_DAY
        })
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// Sort each series' timestamps, take consecutive differences, and apply
    /// `reduce` to them.
    ///
    /// A series with fewer than 2 timestamps has no consecutive gap at all;
    /// that is a distinct precondition error, never a meaningless zero.
    fn gap_per_hobby(&self, reduce: impl Fn(&[u64]) -> u64) -> Result<StatMap> {
        let mut ret = StatMap::new();

        for series in self.store.values() {
            if series.timestamps.len() < 2 {
                return Err(StatsError::NotEnoughTimestamps {
                    hobby: series.name.clone(),
                });
            }

            let mut sorted = series.timestamps.clone();
            sorted.sort_unstable();

            let gaps: Vec<u64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
            ret.insert(series.name.clone(), StatValue::Count(reduce(&gaps)));
        }

        Ok(ret)
    }
}
