//! The computation registry.
//!
//! Each statistic the engines expose is one variant of [`Computation`],
//! carrying its human-readable label template and a strongly-typed runner.
//! The printing and charting collaborators enumerate the per-engine slices
//! (or [`Computation::ALL`]) and invoke entries by index; nothing outside
//! this crate hardcodes a statistic's name.

use hobby_core::models::SeriesStore;
use hobby_core::Result;

use crate::gaps::DateGapStats;
use crate::mileage::MileageStats;
use crate::trips::TripStats;
use crate::StatMap;

/// Every named computation across the three engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    // Trip statistics engine.
    TotalTrips,
    TotalYears,
    TotalTripsPerHobby,
    TotalTripsPerYear,
    PctActiveDaysPerYear,
    PctHobbyOfTotal,
    PctYearOfTotal,
    // Mileage statistics engine.
    TotalMileageAndYears,
    TotalMileagePerHobby,
    AvgMileagePerHobby,
    MaxMileagePerHobby,
    MinMileagePerHobby,
    // Date-gap statistics engine.
    MultiActivityDays,
    AvgDaysBetweenPerHobby,
    MaxDaysBetweenPerHobby,
}

impl Computation {
    /// The trip statistics engine's registry.
    pub const TRIP_COMPUTATIONS: &'static [Computation] = &[
        Self::TotalTrips,
        Self::TotalYears,
        Self::TotalTripsPerHobby,
        Self::TotalTripsPerYear,
        Self::PctActiveDaysPerYear,
        Self::PctHobbyOfTotal,
        Self::PctYearOfTotal,
    ];

    /// The mileage statistics engine's registry.
    pub const MILEAGE_COMPUTATIONS: &'static [Computation] = &[
        Self::TotalMileageAndYears,
        Self::TotalMileagePerHobby,
        Self::AvgMileagePerHobby,
        Self::MaxMileagePerHobby,
        Self::MinMileagePerHobby,
    ];

    /// The date-gap statistics engine's registry.
    pub const GAP_COMPUTATIONS: &'static [Computation] = &[
        Self::MultiActivityDays,
        Self::AvgDaysBetweenPerHobby,
        Self::MaxDaysBetweenPerHobby,
    ];

    /// All computations, in the order the engines' registries list them.
    pub const ALL: &'static [Computation] = &[
        Self::TotalTrips,
        Self::TotalYears,
        Self::TotalTripsPerHobby,
        Self::TotalTripsPerYear,
        Self::PctActiveDaysPerYear,
        Self::PctHobbyOfTotal,
        Self::PctYearOfTotal,
        Self::TotalMileageAndYears,
        Self::TotalMileagePerHobby,
        Self::AvgMileagePerHobby,
        Self::MaxMileagePerHobby,
        Self::MinMileagePerHobby,
        Self::MultiActivityDays,
        Self::AvgDaysBetweenPerHobby,
        Self::MaxDaysBetweenPerHobby,
    ];

    /// Label template with `{}` placeholders for the result key and value.
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalTrips | Self::TotalYears | Self::TotalMileageAndYears => "Overall {}: {}",
            Self::TotalTripsPerHobby => "Total trips for {}: {}",
            Self::TotalTripsPerYear => "Total trips in {}: {}",
            Self::PctActiveDaysPerYear => "Percent of days active in {}: {}%",
            Self::PctHobbyOfTotal => "Percent of all trips for {}: {}%",
            Self::PctYearOfTotal => "Percent of all trips in {}: {}%",
            Self::TotalMileagePerHobby => "Total mileage for {}: {}",
            Self::AvgMileagePerHobby => "Average mileage for {}: {}",
            Self::MaxMileagePerHobby => "Max mileage for {}: {}",
            Self::MinMileagePerHobby => "Min mileage for {}: {}",
            Self::MultiActivityDays => "Overall {}: {}",
            Self::AvgDaysBetweenPerHobby => "Average days between trips for {}: {}",
            Self::MaxDaysBetweenPerHobby => "Max days between trips for {}: {}",
        }
    }

    /// Run the computation against a series store.
    pub fn run(self, store: &SeriesStore) -> Result<StatMap> {
        match self {
            Self::TotalTrips => TripStats::new(store).total_trips(),
            Self::TotalYears => TripStats::new(store).total_years(),
            Self::TotalTripsPerHobby => TripStats::new(store).total_trips_per_hobby(),
            Self::TotalTripsPerYear => TripStats::new(store).total_trips_per_year(),
            Self::PctActiveDaysPerYear => TripStats::new(store).pct_active_days_per_year(),
            Self::PctHobbyOfTotal => TripStats::new(store).pct_hobby_of_total(),
            Self::PctYearOfTotal => TripStats::new(store).pct_year_of_total(),
            Self::TotalMileageAndYears => MileageStats::new(store).total_mileage_and_years(),
            Self::TotalMileagePerHobby => MileageStats::new(store).total_mileage_per_hobby(),
            Self::AvgMileagePerHobby => MileageStats::new(store).avg_mileage_per_hobby(),
            Self::MaxMileagePerHobby => MileageStats::new(store).max_mileage_per_hobby(),
            Self::MinMileagePerHobby => MileageStats::new(store).min_mileage_per_hobby(),
            Self::MultiActivityDays => DateGapStats::new(store).multi_activity_days(),
            Self::AvgDaysBetweenPerHobby => DateGapStats::new(store).avg_days_between_per_hobby(),
            Self::MaxDaysBetweenPerHobby => DateGapStats::new(store).max_days_between_per_hobby(),
        }
    }
}
