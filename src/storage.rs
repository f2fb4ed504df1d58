//! Durable state.
//!
//! Four independent collections (drink entries, water entries, custom drinks
//! and settings) each stored as one JSON document under its own key. Every
//! operation reads the whole collection, changes it, and writes the whole
//! collection back. There is no cache: each read goes to the backend.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    catalog::BUILT_IN_DRINKS,
    config::TrackerConfig,
    errors::{Result, StorageError, ValidationError},
    structs::{
        drink::{Drink, DrinkCategory},
        drink_entry::DrinkEntry,
        settings::Settings,
        water_entry::WaterEntry,
    },
};

pub const DRINKS_KEY: &str = "hydration-tracker-drinks";
pub const WATER_KEY: &str = "hydration-tracker-water";
pub const CUSTOM_DRINKS_KEY: &str = "hydration-tracker-custom-drinks";
pub const SETTINGS_KEY: &str = "hydration-tracker-settings";

/// Key/value substrate the store persists into.
///
/// `write` replaces the payload for a key as a whole; a subsequent `read`
/// must see either the old or the new payload, never a mix.
pub trait StorageBackend: Send + Sync {
    /// `Ok(None)` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    fn write(&self, key: &str, payload: &str) -> std::result::Result<(), StorageError>;
}

/// One `<key>.json` file per collection inside a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> std::result::Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        // Write next to the target and swap it in, so readers never see a half-written file
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, payload)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }
}

/// Non-durable backend, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryBackend(RwLock<HashMap<String, String>>);

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        let map = self
            .0
            .read()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))?;

        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> std::result::Result<(), StorageError> {
        let mut map = self
            .0
            .write()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".into()))?;

        map.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}

/// Handle to the persisted collections. Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// File-backed store inside the configured data directory.
    pub fn open(config: &TrackerConfig) -> Result<Self> {
        config.ensure_dirs()?;
        info!(data_dir = %config.data_dir.display(), "Opening store");

        Ok(Self::new(Arc::new(FileBackend::new(config.data_dir.clone()))))
    }

    /// Reads a whole collection. Missing, unreadable or unparseable data all
    /// yield the default value.
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.backend.read(key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "Stored data is malformed, falling back to default");
                    T::default()
                }
            },
            Ok(None) => {
                trace!(key, "Nothing stored yet, using default");
                T::default()
            }
            Err(e) => {
                warn!(key, error = %e, "Unable to read stored data, falling back to default");
                T::default()
            }
        }
    }

    /// Reads a whole collection as the base of a write.
    ///
    /// Unlike [`Store::load`] a failing backend read is an error, so a write
    /// never replaces history that merely could not be read. Malformed data
    /// still falls back to the default.
    fn load_for_update<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.backend.read(key)? {
            Some(payload) => Ok(serde_json::from_str(&payload).unwrap_or_else(|e| {
                warn!(key, error = %e, "Stored data is malformed, overwriting with default");
                T::default()
            })),
            None => Ok(T::default()),
        }
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string(value).map_err(StorageError::from)?;
        self.backend.write(key, &payload)?;

        debug!(key, bytes = payload.len(), "Persisted collection");
        Ok(())
    }

    // Drink entries

    pub fn drink_entries(&self) -> Vec<DrinkEntry> {
        self.load(DRINKS_KEY)
    }

    pub fn drink_entries_for(&self, date: NaiveDate) -> Vec<DrinkEntry> {
        self.drink_entries()
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    #[instrument(skip(self, entry), fields(id = %entry.id, date = %entry.date))]
    pub fn append_drink_entry(&self, entry: DrinkEntry) -> Result<()> {
        entry.validate()?;

        let mut entries: Vec<DrinkEntry> = self.load_for_update(DRINKS_KEY)?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(ValidationError::DuplicateId(entry.id).into());
        }

        entries.push(entry);
        self.persist(DRINKS_KEY, &entries)?;

        info!("Logged drink");
        Ok(())
    }

    /// Removing an id that does not exist succeeds without writing.
    #[instrument(skip(self))]
    pub fn delete_drink_entry(&self, id: &str) -> Result<()> {
        let mut entries: Vec<DrinkEntry> = self.load_for_update(DRINKS_KEY)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            debug!("No drink entry with this id");
            return Ok(());
        }

        self.persist(DRINKS_KEY, &entries)?;
        info!("Deleted drink entry");
        Ok(())
    }

    // Water entries

    pub fn water_entries(&self) -> Vec<WaterEntry> {
        self.load(WATER_KEY)
    }

    pub fn water_for(&self, date: NaiveDate) -> Option<WaterEntry> {
        self.water_entries()
            .into_iter()
            .find(|entry| entry.date == date)
    }

    /// Replaces the day's water total with `total_ml`.
    ///
    /// Any existing entry for `date` is removed and a fresh one appended, which
    /// keeps a single entry per date. This sets the total, it does not add to it.
    #[instrument(skip(self))]
    pub fn set_daily_water(&self, date: NaiveDate, total_ml: i64) -> Result<WaterEntry> {
        let amount =
            u32::try_from(total_ml).map_err(|_| ValidationError::WaterAmount(total_ml))?;

        let mut entries: Vec<WaterEntry> = self.load_for_update(WATER_KEY)?;
        entries.retain(|entry| entry.date != date);

        let entry = WaterEntry::new(date, amount);
        entries.push(entry.clone());
        self.persist(WATER_KEY, &entries)?;

        info!(amount, "Updated daily water");
        Ok(entry)
    }

    /// Adds `delta_ml` on top of what is already recorded for `date`.
    pub fn add_daily_water(&self, date: NaiveDate, delta_ml: i64) -> Result<WaterEntry> {
        if delta_ml <= 0 {
            return Err(ValidationError::WaterAmount(delta_ml).into());
        }

        let entries: Vec<WaterEntry> = self.load_for_update(WATER_KEY)?;
        let current = entries
            .iter()
            .find(|entry| entry.date == date)
            .map_or(0, |entry| i64::from(entry.amount));
        self.set_daily_water(date, current.saturating_add(delta_ml))
    }

    #[instrument(skip(self))]
    pub fn delete_water_entry(&self, id: &str) -> Result<()> {
        let mut entries: Vec<WaterEntry> = self.load_for_update(WATER_KEY)?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            debug!("No water entry with this id");
            return Ok(());
        }

        self.persist(WATER_KEY, &entries)?;
        info!("Deleted water entry");
        Ok(())
    }

    // Custom drinks

    pub fn custom_drinks(&self) -> Vec<Drink> {
        self.load(CUSTOM_DRINKS_KEY)
    }

    /// Appends a custom drink. Its category must be [`DrinkCategory::Custom`]
    /// and its id must not be used by any built-in or custom drink.
    #[instrument(skip(self, drink), fields(id = %drink.id))]
    pub fn save_custom_drink(&self, drink: Drink) -> Result<()> {
        drink.validate()?;
        if drink.category != DrinkCategory::Custom {
            return Err(ValidationError::NotCustom(drink.category).into());
        }

        let mut drinks: Vec<Drink> = self.load_for_update(CUSTOM_DRINKS_KEY)?;
        if BUILT_IN_DRINKS.iter().any(|built_in| built_in.id == drink.id)
            || drinks.iter().any(|existing| existing.id == drink.id)
        {
            return Err(ValidationError::DuplicateId(drink.id).into());
        }

        drinks.push(drink);
        self.persist(CUSTOM_DRINKS_KEY, &drinks)?;

        info!("Saved custom drink");
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn delete_custom_drink(&self, id: &str) -> Result<()> {
        let mut drinks: Vec<Drink> = self.load_for_update(CUSTOM_DRINKS_KEY)?;
        let before = drinks.len();
        drinks.retain(|drink| drink.id != id);

        if drinks.len() == before {
            debug!("No custom drink with this id");
            return Ok(());
        }

        self.persist(CUSTOM_DRINKS_KEY, &drinks)?;
        info!("Deleted custom drink");
        Ok(())
    }

    // Settings

    pub fn settings(&self) -> Settings {
        self.load(SETTINGS_KEY)
    }

    #[instrument(skip(self, settings))]
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.validate()?;
        self.persist(SETTINGS_KEY, settings)?;

        info!(
            water_per_drink_ml = settings.water_per_drink_ml,
            has_biometrics = settings.biometrics.is_some(),
            "Saved settings"
        );
        Ok(())
    }
}
