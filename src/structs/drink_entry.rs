use {
    crate::{
        errors::{validate_abv, validate_volume, ValidationError},
        structs::drink::Drink,
        units::calculate_units,
    },
    chrono::{NaiveDate, Utc},
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// Tolerance when checking a supplied `units` value against the calculator,
/// front ends may compute it with a slightly different operation order.
const UNITS_TOLERANCE: f64 = 1e-6;

/// A logged drink.
///
/// The drink's fields are copied at logging time. `drink_id` is kept for
/// reference only; editing or deleting the catalog drink never changes an
/// existing entry, and `units` is never recomputed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrinkEntry {
    pub id: String,

    pub drink_id: String,

    pub drink_name: String,

    pub volume_ml: f64,

    pub abv: f64,

    /// Standard units, frozen when the entry was created
    pub units: f64,

    /// Calendar day the drink counts towards
    pub date: NaiveDate,

    /// Epoch milliseconds of when the drink was logged
    pub timestamp: i64,
}

impl DrinkEntry {
    /// Snapshots `drink` into a new entry for `date`.
    pub fn log(drink: &Drink, date: NaiveDate) -> Self {
        Self {
            id: format!("drink-{}", Uuid::new_v4()),
            drink_id: drink.id.clone(),
            drink_name: drink.name.clone(),
            volume_ml: drink.volume_ml,
            abv: drink.abv,
            units: calculate_units(drink.volume_ml, drink.abv),
            date,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_volume(self.volume_ml)?;
        validate_abv(self.abv)?;

        let expected = calculate_units(self.volume_ml, self.abv);
        if !self.units.is_finite() || (self.units - expected).abs() > UNITS_TOLERANCE {
            return Err(ValidationError::Units {
                expected,
                actual: self.units,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::drink::DrinkCategory;

    fn heineken() -> Drink {
        Drink::built_in(
            "beer-heineken",
            "Heineken",
            DrinkCategory::Beer,
            330.0,
            5.0,
            Some("Heineken"),
        )
    }

    #[test]
    fn test_log_snapshots_drink() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let entry = DrinkEntry::log(&heineken(), date);

        assert_eq!(entry.drink_id, "beer-heineken");
        assert_eq!(entry.drink_name, "Heineken");
        assert_eq!(entry.date, date);
        assert!((entry.units - 1.32).abs() < 1e-9);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_log_is_not_a_live_reference() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let mut drink = heineken();
        let entry = DrinkEntry::log(&drink, date);

        drink.abv = 12.0;
        drink.name = "Renamed".into();

        assert_eq!(entry.drink_name, "Heineken");
        assert_eq!(entry.abv, 5.0);
    }

    #[test]
    fn test_fresh_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let a = DrinkEntry::log(&heineken(), date);
        let b = DrinkEntry::log(&heineken(), date);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rejects_tampered_units() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let mut entry = DrinkEntry::log(&heineken(), date);
        entry.units = 5.0;

        assert!(matches!(
            entry.validate(),
            Err(ValidationError::Units { actual, .. }) if actual == 5.0
        ));
    }

    #[test]
    fn test_date_serializes_as_iso_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let json = serde_json::to_value(DrinkEntry::log(&heineken(), date)).unwrap();
        assert_eq!(json["date"], "2024-06-03");
        assert!(json["drinkName"].is_string());
    }
}
