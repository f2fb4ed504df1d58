//! Tauri commands for the desktop front end.
//!
//! Register with [`plugin`]; the front end invokes them as
//! `plugin:hydration|<command>`.

use chrono::NaiveDate;
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime, State,
};
use tracing::debug;

use crate::{
    aggregator::{self, Aggregator, DailyTotals, DayStats, WeeklyTotals},
    catalog::{Catalog, CustomDrink},
    storage::Store,
    structs::{drink::Drink, drink_entry::DrinkEntry, settings::Settings, water_entry::WaterEntry},
    units,
};

pub struct AppState(pub Store);

type CommandResult<T> = Result<T, String>;

fn to_message(e: crate::errors::Error) -> String {
    e.to_string()
}

#[tauri::command]
pub fn list_drinks(state: State<AppState>, query: Option<String>) -> Vec<Drink> {
    debug!("[list_drinks] Sending drink catalog to FEnd");

    let catalog = Catalog::new(&state.0);
    match query {
        Some(query) => catalog.search(&query),
        None => catalog.all_drinks(),
    }
}

#[tauri::command]
pub fn add_custom_drink(state: State<AppState>, drink: CustomDrink) -> CommandResult<Drink> {
    Catalog::new(&state.0)
        .add_custom_drink(drink)
        .map_err(to_message)
}

#[tauri::command]
pub fn remove_custom_drink(state: State<AppState>, id: String) -> CommandResult<()> {
    Catalog::new(&state.0)
        .remove_custom_drink(&id)
        .map_err(to_message)
}

/// Live preview while the user types in a custom drink
#[tauri::command]
pub fn calculate_units(volume_ml: f64, abv: f64) -> f64 {
    units::calculate_units(volume_ml, abv)
}

#[tauri::command]
pub fn log_drink(state: State<AppState>, entry: DrinkEntry) -> CommandResult<()> {
    state.0.append_drink_entry(entry).map_err(to_message)
}

/// Snapshots a catalog drink into a new entry and logs it.
#[tauri::command]
pub fn log_catalog_drink(
    state: State<AppState>,
    drink_id: String,
    date: NaiveDate,
) -> CommandResult<DrinkEntry> {
    let drink = Catalog::new(&state.0)
        .find(&drink_id)
        .ok_or_else(|| format!("Unknown drink '{drink_id}'"))?;

    let entry = DrinkEntry::log(&drink, date);
    state
        .0
        .append_drink_entry(entry.clone())
        .map_err(to_message)?;

    Ok(entry)
}

#[tauri::command]
pub fn delete_drink_entry(state: State<AppState>, id: String) -> CommandResult<()> {
    state.0.delete_drink_entry(&id).map_err(to_message)
}

#[tauri::command]
pub fn list_drink_entries(state: State<AppState>, date: NaiveDate) -> Vec<DrinkEntry> {
    debug!("[list_drink_entries] Sending drink data to FEnd");

    state.0.drink_entries_for(date)
}

#[tauri::command]
pub fn set_daily_water(
    state: State<AppState>,
    date: NaiveDate,
    total_ml: i64,
) -> CommandResult<WaterEntry> {
    state.0.set_daily_water(date, total_ml).map_err(to_message)
}

#[tauri::command]
pub fn add_water(state: State<AppState>, date: NaiveDate, amount_ml: i64) -> CommandResult<WaterEntry> {
    state.0.add_daily_water(date, amount_ml).map_err(to_message)
}

#[tauri::command]
pub fn delete_water_entry(state: State<AppState>, id: String) -> CommandResult<()> {
    state.0.delete_water_entry(&id).map_err(to_message)
}

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Settings {
    state.0.settings()
}

#[tauri::command]
pub fn save_settings(state: State<AppState>, settings: Settings) -> CommandResult<()> {
    state.0.save_settings(&settings).map_err(to_message)
}

#[tauri::command]
pub fn daily_totals(state: State<AppState>, date: NaiveDate) -> DailyTotals {
    Aggregator::new(&state.0).daily_totals(date)
}

#[tauri::command]
pub fn recommended_water(state: State<AppState>, date: NaiveDate) -> f64 {
    Aggregator::new(&state.0).recommended_water(date)
}

#[tauri::command]
pub fn weekly_totals(state: State<AppState>, date: NaiveDate) -> WeeklyTotals {
    debug!("[weekly_totals] Sending weekly stats to FEnd");

    Aggregator::new(&state.0).weekly_totals(date)
}

#[tauri::command]
pub fn week_overview(state: State<AppState>, date: NaiveDate) -> Vec<DayStats> {
    Aggregator::new(&state.0).week_overview(date)
}

#[tauri::command]
pub fn hydration_percentage(total_water: f64, recommended_water: f64) -> f64 {
    aggregator::hydration_percentage(total_water, recommended_water)
}

/// Manages `store` as app state and exposes every command above.
pub fn plugin<R: Runtime>(store: Store) -> TauriPlugin<R> {
    Builder::new("hydration")
        .invoke_handler(tauri::generate_handler![
            list_drinks,
            add_custom_drink,
            remove_custom_drink,
            calculate_units,
            log_drink,
            log_catalog_drink,
            delete_drink_entry,
            list_drink_entries,
            set_daily_water,
            add_water,
            delete_water_entry,
            get_settings,
            save_settings,
            daily_totals,
            recommended_water,
            weekly_totals,
            week_overview,
            hydration_percentage
        ])
        .setup(move |app| {
            app.manage(AppState(store));
            Ok(())
        })
        .build()
}
