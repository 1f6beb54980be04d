//! Statistics engines for the hobby statistics tool.
//!
//! Three independent read-only consumers of the series store — trip counts,
//! mileage, and calendar gaps — plus the computation registry that the
//! printing and charting collaborators enumerate.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub mod gaps;
pub mod mileage;
pub mod registry;
pub mod trips;

pub use hobby_core as core;

/// A single computed statistic value.
///
/// Counts stay integral so "6 trips" never prints as "6.0 trips"; amounts
/// (mileage totals, percentages) carry two-decimal rounding applied by the
/// engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Amount(f64),
}

impl StatValue {
    /// The value as a float, for charting.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Amount(x) => x,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Amount(x) => write!(f, "{}", x),
        }
    }
}

/// Every computation returns a mapping from a string key (hobby name,
/// stringified year, or a fixed label like `"total trips"`) to a value.
pub type StatMap = BTreeMap<String, StatValue>;

/// Round to two decimal places, the precision every engine reports at.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(9.0), 9.0);
    }

    #[test]
    fn test_stat_value_display() {
        assert_eq!(StatValue::Count(6).to_string(), "6");
        assert_eq!(StatValue::Amount(33.33).to_string(), "33.33");
    }

    #[test]
    fn test_stat_value_as_f64() {
        assert_eq!(StatValue::Count(6).as_f64(), 6.0);
        assert_eq!(StatValue::Amount(2.5).as_f64(), 2.5);
    }
}
