//! Local drink and water log.
//!
//! Records alcoholic drinks and daily water per calendar day, and derives
//! standard units, a water recommendation and weekly rollups from them.
//!
//! ```no_run
//! use hydration_tracker::{Aggregator, Catalog, DrinkEntry, Store, TrackerConfig};
//!
//! # fn main() -> hydration_tracker::Result<()> {
//! let store = Store::open(&TrackerConfig::from_env()?)?;
//! let today = hydration_tracker::week::today();
//!
//! if let Some(beer) = Catalog::new(&store).find("beer-heineken") {
//!     store.append_drink_entry(DrinkEntry::log(&beer, today))?;
//! }
//! store.add_daily_water(today, 250)?;
//!
//! let totals = Aggregator::new(&store).daily_totals(today);
//! println!("{:.1} units, {} ml water", totals.total_units, totals.total_water);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod storage;
pub mod structs;
pub mod units;
pub mod week;

#[cfg(feature = "desktop")]
pub mod commands;

pub use aggregator::{hydration_percentage, Aggregator, DailyTotals, DayStats, WeeklyTotals};
pub use catalog::{Catalog, CustomDrink, BUILT_IN_DRINKS};
pub use config::TrackerConfig;
pub use errors::{Error, Result, StorageError, ValidationError};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, Store};
pub use structs::{
    drink::{Drink, DrinkCategory},
    drink_entry::DrinkEntry,
    settings::{Biometrics, Settings, Sex},
    water_entry::WaterEntry,
};
pub use units::calculate_units;
