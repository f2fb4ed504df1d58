//! Error types for the tracker.
//!
//! Malformed persisted data is not represented here: the store recovers from
//! it locally by falling back to the default collection.

use thiserror::Error;

use crate::structs::drink::DrinkCategory;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unable to persist data: {0}")]
    Persistence(#[from] StorageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Caller-supplied values outside of their domain. Always raised before any
/// collection is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("volume must be greater than 0 ml, got {0}")]
    Volume(f64),

    #[error("ABV must be within (0, 100], got {0}")]
    Abv(f64),

    #[error("water amount must be a non-negative number of ml, got {0}")]
    WaterAmount(i64),

    #[error("water per drink must be greater than 0 ml, got {0}")]
    WaterPerDrink(f64),

    #[error("invalid biometrics: {0}")]
    Biometrics(String),

    #[error("units {actual} do not match the calculated {expected}")]
    Units { expected: f64, actual: f64 },

    #[error("an entry with id '{0}' already exists")]
    DuplicateId(String),

    #[error("drink name must not be empty")]
    EmptyName,

    #[error("custom drinks must have the custom category, got {0:?}")]
    NotCustom(DrinkCategory),
}

/// Failures of the durable medium underneath the store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

pub(crate) fn validate_volume(volume_ml: f64) -> std::result::Result<(), ValidationError> {
    if volume_ml.is_finite() && volume_ml > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Volume(volume_ml))
    }
}

pub(crate) fn validate_abv(abv: f64) -> std::result::Result<(), ValidationError> {
    if abv.is_finite() && abv > 0.0 && abv <= 100.0 {
        Ok(())
    } else {
        Err(ValidationError::Abv(abv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_bounds() {
        assert!(validate_volume(330.0).is_ok());
        assert_eq!(validate_volume(0.0), Err(ValidationError::Volume(0.0)));
        assert!(validate_volume(-5.0).is_err());
        assert!(validate_volume(f64::NAN).is_err());
    }

    #[test]
    fn test_abv_bounds() {
        assert!(validate_abv(100.0).is_ok());
        assert!(validate_abv(0.5).is_ok());
        assert!(validate_abv(0.0).is_err());
        assert!(validate_abv(100.1).is_err());
        assert!(validate_abv(f64::INFINITY).is_err());
    }
}
