use {
    crate::errors::ValidationError,
    serde::{Deserialize, Serialize},
};

pub const DEFAULT_WATER_PER_DRINK_ML: f64 = 250.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Optional body measurements.
///
/// Stored for future personalization of the water target. Nothing computes
/// with them yet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    /// Kilograms
    pub weight: f64,

    /// Centimeters
    pub height: f64,

    pub sex: Sex,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Water recommended for every alcoholic drink, in milliliters
    pub water_per_drink_ml: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometrics: Option<Biometrics>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            water_per_drink_ml: DEFAULT_WATER_PER_DRINK_ML,
            biometrics: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.water_per_drink_ml.is_finite() && self.water_per_drink_ml > 0.0) {
            return Err(ValidationError::WaterPerDrink(self.water_per_drink_ml));
        }

        if let Some(biometrics) = &self.biometrics {
            if !(biometrics.weight.is_finite() && biometrics.weight > 0.0) {
                return Err(ValidationError::Biometrics(format!(
                    "weight must be greater than 0 kg, got {}",
                    biometrics.weight
                )));
            }
            if !(biometrics.height.is_finite() && biometrics.height > 0.0) {
                return Err(ValidationError::Biometrics(format!(
                    "height must be greater than 0 cm, got {}",
                    biometrics.height
                )));
            }
        }

        Ok(())
    }
}
