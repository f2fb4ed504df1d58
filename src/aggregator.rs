//! Daily and weekly rollups.
//!
//! Every call snapshots the store once and derives everything from that
//! snapshot; nothing is cached between calls.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::{
    storage::Store,
    structs::{drink_entry::DrinkEntry, water_entry::WaterEntry},
    week::{week_dates, DAYS_IN_WEEK},
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub total_units: f64,

    /// Milliliters
    pub total_water: u32,

    pub drink_count: usize,
}

/// One day of the calendar view.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub date: NaiveDate,
    pub total_units: f64,
    pub total_water: u32,
    pub recommended_water: f64,
    pub drink_count: usize,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTotals {
    /// Monday the week starts on
    pub week_start: NaiveDate,
    pub total_units: f64,
    pub total_water: u64,
    pub recommended_water: f64,
    /// Always `total_units / 7`, whether or not every day has data
    pub avg_units_per_day: f64,
    pub days_with_drinks: usize,
    pub drink_count: usize,
}

/// Share of the recommended water actually drunk, in percent, capped at 100.
///
/// Zero when there is no recommendation.
pub fn hydration_percentage(total_water: f64, recommended_water: f64) -> f64 {
    if recommended_water > 0.0 {
        (total_water / recommended_water * 100.0).min(100.0)
    } else {
        0.0
    }
}

fn totals_for(drinks: &[DrinkEntry], water: &[WaterEntry], date: NaiveDate) -> DailyTotals {
    let (total_units, drink_count) = drinks
        .iter()
        .filter(|entry| entry.date == date)
        .fold((0.0_f64, 0_usize), |(units, count), entry| (units + entry.units, count + 1));

    // Legacy files can hold several entries for one date
    let total_water = water
        .iter()
        .filter(|entry| entry.date == date)
        .fold(0_u32, |total, entry| total.saturating_add(entry.amount));

    DailyTotals {
        total_units,
        total_water,
        drink_count,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    store: &'a Store,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn daily_totals(&self, date: NaiveDate) -> DailyTotals {
        let totals = totals_for(
            &self.store.drink_entries(),
            &self.store.water_entries(),
            date,
        );

        trace!(%date, ?totals, "Computed daily totals");
        totals
    }

    /// `drink_count × water_per_drink_ml` for the day; zero when nothing was drunk.
    pub fn recommended_water(&self, date: NaiveDate) -> f64 {
        let drink_count = self.store.drink_entries_for(date).len();
        drink_count as f64 * self.store.settings().water_per_drink_ml
    }

    /// Per-day stats for the Monday to Sunday week containing `reference`.
    pub fn week_overview(&self, reference: NaiveDate) -> Vec<DayStats> {
        let drinks = self.store.drink_entries();
        let water = self.store.water_entries();
        let water_per_drink = self.store.settings().water_per_drink_ml;

        week_dates(reference)
            .into_iter()
            .map(|date| {
                let totals = totals_for(&drinks, &water, date);
                DayStats {
                    date,
                    total_units: totals.total_units,
                    total_water: totals.total_water,
                    recommended_water: totals.drink_count as f64 * water_per_drink,
                    drink_count: totals.drink_count,
                }
            })
            .collect()
    }

    /// Totals for the Monday to Sunday week containing `week_start`.
    ///
    /// A Monday is its own week start. The weekly recommendation is the
    /// week's drink count times the current water-per-drink setting, which
    /// equals the sum of the daily recommendations while that setting is a
    /// single value.
    pub fn weekly_totals(&self, week_start: NaiveDate) -> WeeklyTotals {
        let days = self.week_overview(week_start);

        let total_units: f64 = days.iter().map(|day| day.total_units).sum();
        let total_water: u64 = days.iter().map(|day| u64::from(day.total_water)).sum();
        let drink_count: usize = days.iter().map(|day| day.drink_count).sum();
        let days_with_drinks = days.iter().filter(|day| day.drink_count > 0).count();
        let water_per_drink = self.store.settings().water_per_drink_ml;

        WeeklyTotals {
            week_start: days[0].date,
            total_units,
            total_water,
            recommended_water: drink_count as f64 * water_per_drink,
            avg_units_per_day: total_units / DAYS_IN_WEEK as f64,
            days_with_drinks,
            drink_count,
        }
    }
}
