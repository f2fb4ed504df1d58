use {
    crate::errors::{validate_abv, validate_volume, ValidationError},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DrinkCategory {
    Beer,
    Wine,
    Spirit,
    Cocktail,
    Rtd,
    Custom,
}

impl DrinkCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beer => "Beer",
            Self::Wine => "Wine",
            Self::Spirit => "Spirit",
            Self::Cocktail => "Cocktail",
            Self::Rtd => "Ready-to-Drink",
            Self::Custom => "Custom",
        }
    }
}

/// A selectable drink definition, either built in or user created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,

    pub name: String,

    pub category: DrinkCategory,

    /// Serving size in milliliters
    pub volume_ml: f64,

    /// Alcohol by volume, in percent
    pub abv: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Drink {
    pub(crate) fn built_in(
        id: &str,
        name: &str,
        category: DrinkCategory,
        volume_ml: f64,
        abv: f64,
        brand: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            volume_ml,
            abv,
            brand: brand.map(str::to_owned),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_volume(self.volume_ml)?;
        validate_abv(self.abv)
    }

    /// Case-insensitive substring match against the name or brand.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query)
            || self
                .brand
                .as_ref()
                .is_some_and(|brand| brand.to_lowercase().contains(&query))
    }
}
