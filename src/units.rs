//! Standard drink units.
//!
//! One unit is 10 g of pure alcohol. Results are never rounded here; rounding
//! for display is left to the front end.

/// Density of ethanol in g/ml
pub const ETHANOL_DENSITY: f64 = 0.8;

/// Grams of pure alcohol in one standard unit
pub const GRAMS_PER_UNIT: f64 = 10.0;

/// Lower-risk daily limit, roughly 10-20 g of alcohol
pub const DAILY_LOWER_RISK_UNITS: f64 = 2.0;

/// Lower-risk weekly limit, 140 g of alcohol
pub const WEEKLY_LOWER_RISK_UNITS: f64 = 14.0;

/// `(volume_ml × abv × 0.8) / 1000`, the EU/WHO standard drink formula.
///
/// Pure and deterministic, which is what lets a logged entry keep its units
/// forever without recomputing them.
pub fn calculate_units(volume_ml: f64, abv: f64) -> f64 {
    (volume_ml * abv * ETHANOL_DENSITY) / 1000.0
}

pub fn grams_of_alcohol(units: f64) -> f64 {
    units * GRAMS_PER_UNIT
}

pub fn exceeds_daily_guideline(total_units: f64) -> bool {
    total_units > DAILY_LOWER_RISK_UNITS
}

pub fn exceeds_weekly_guideline(total_units: f64) -> bool {
    total_units > WEEKLY_LOWER_RISK_UNITS
}
