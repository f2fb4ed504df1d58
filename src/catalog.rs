//! Drinks that can be picked when logging: a fixed built-in list followed by
//! the user's own custom drinks.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    errors::Result,
    storage::Store,
    structs::drink::{Drink, DrinkCategory},
};

use crate::structs::drink::DrinkCategory::{Beer, Cocktail, Rtd, Spirit, Wine};

/// Built-in drinks, in display order. Never mutated at runtime.
pub static BUILT_IN_DRINKS: LazyLock<Vec<Drink>> = LazyLock::new(|| {
    vec![
        // Beers
        Drink::built_in("beer-heineken", "Heineken", Beer, 330.0, 5.0, Some("Heineken")),
        Drink::built_in("beer-corona", "Corona Extra", Beer, 330.0, 4.5, Some("Corona")),
        Drink::built_in("beer-guinness", "Guinness Draught", Beer, 440.0, 4.2, Some("Guinness")),
        Drink::built_in("beer-stella", "Stella Artois", Beer, 330.0, 5.0, Some("Stella Artois")),
        Drink::built_in("beer-budweiser", "Budweiser", Beer, 330.0, 5.0, Some("Budweiser")),
        Drink::built_in("beer-carlsberg", "Carlsberg", Beer, 330.0, 5.0, Some("Carlsberg")),
        Drink::built_in("beer-ipa", "IPA (Average)", Beer, 330.0, 6.5, None),
        Drink::built_in("beer-lager", "Lager (Average)", Beer, 330.0, 4.5, None),
        Drink::built_in("beer-pint", "Pint of Beer (Average)", Beer, 568.0, 4.5, None),
        // Wines
        Drink::built_in("wine-red-glass", "Red Wine (Glass)", Wine, 175.0, 13.5, None),
        Drink::built_in("wine-white-glass", "White Wine (Glass)", Wine, 175.0, 12.5, None),
        Drink::built_in("wine-rose-glass", "Rosé Wine (Glass)", Wine, 175.0, 12.0, None),
        Drink::built_in("wine-sparkling-glass", "Sparkling Wine (Glass)", Wine, 125.0, 12.0, None),
        Drink::built_in("wine-champagne", "Champagne (Glass)", Wine, 125.0, 12.5, None),
        Drink::built_in("wine-prosecco", "Prosecco (Glass)", Wine, 125.0, 11.0, None),
        Drink::built_in("wine-red-bottle", "Red Wine (Bottle)", Wine, 750.0, 13.5, None),
        Drink::built_in("wine-white-bottle", "White Wine (Bottle)", Wine, 750.0, 12.5, None),
        // Spirits, standard measures
        Drink::built_in("spirit-vodka", "Vodka (Single)", Spirit, 25.0, 40.0, None),
        Drink::built_in("spirit-vodka-double", "Vodka (Double)", Spirit, 50.0, 40.0, None),
        Drink::built_in("spirit-gin", "Gin (Single)", Spirit, 25.0, 40.0, None),
        Drink::built_in("spirit-gin-double", "Gin (Double)", Spirit, 50.0, 40.0, None),
        Drink::built_in("spirit-whisky", "Whisky (Single)", Spirit, 25.0, 40.0, None),
        Drink::built_in("spirit-whisky-double", "Whisky (Double)", Spirit, 50.0, 40.0, None),
        Drink::built_in("spirit-rum", "Rum (Single)", Spirit, 25.0, 40.0, None),
        Drink::built_in("spirit-rum-double", "Rum (Double)", Spirit, 50.0, 40.0, None),
        Drink::built_in("spirit-tequila", "Tequila (Single)", Spirit, 25.0, 40.0, None),
        Drink::built_in("spirit-tequila-double", "Tequila (Double)", Spirit, 50.0, 40.0, None),
        // Cocktails
        Drink::built_in("cocktail-mojito", "Mojito", Cocktail, 250.0, 12.0, None),
        Drink::built_in("cocktail-margarita", "Margarita", Cocktail, 200.0, 15.0, None),
        Drink::built_in("cocktail-martini", "Martini", Cocktail, 90.0, 28.0, None),
        Drink::built_in("cocktail-cosmopolitan", "Cosmopolitan", Cocktail, 120.0, 20.0, None),
        Drink::built_in("cocktail-longisland", "Long Island Iced Tea", Cocktail, 300.0, 22.0, None),
        Drink::built_in("cocktail-pinacolada", "Piña Colada", Cocktail, 250.0, 12.0, None),
        Drink::built_in("cocktail-daiquiri", "Daiquiri", Cocktail, 120.0, 18.0, None),
        Drink::built_in("cocktail-negroni", "Negroni", Cocktail, 90.0, 24.0, None),
        Drink::built_in("cocktail-oldFashioned", "Old Fashioned", Cocktail, 90.0, 32.0, None),
        // Ready-to-drink
        Drink::built_in("rtd-smirnoffice", "Smirnoff Ice", Rtd, 275.0, 5.5, Some("Smirnoff")),
        Drink::built_in("rtd-wkd", "WKD", Rtd, 275.0, 5.0, Some("WKD")),
        Drink::built_in("rtd-bacardi", "Bacardi Breezer", Rtd, 275.0, 5.0, Some("Bacardi")),
        Drink::built_in("rtd-cider-pint", "Cider (Pint)", Rtd, 568.0, 4.5, None),
        Drink::built_in("rtd-cider-bottle", "Cider (Bottle)", Rtd, 500.0, 4.5, None),
        Drink::built_in("rtd-alcopop", "Alcopop (Average)", Rtd, 275.0, 5.0, None),
    ]
});

/// A user-defined drink before it is added to the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDrink {
    /// Requested id. Replaced when absent or already taken.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    pub volume_ml: f64,

    pub abv: f64,

    #[serde(default)]
    pub brand: Option<String>,
}

/// The built-in list joined with the custom drinks held by a [`Store`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    store: &'a Store,
}

impl<'a> Catalog<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn built_ins(&self) -> &'static [Drink] {
        &BUILT_IN_DRINKS
    }

    pub fn list_custom_drinks(&self) -> Vec<Drink> {
        self.store.custom_drinks()
    }

    /// Built-ins first, then custom drinks in the order they were added.
    pub fn all_drinks(&self) -> Vec<Drink> {
        BUILT_IN_DRINKS
            .iter()
            .cloned()
            .chain(self.list_custom_drinks())
            .collect()
    }

    /// Drinks whose name or brand contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<Drink> {
        let query = query.trim();

        self.all_drinks()
            .into_iter()
            .filter(|drink| drink.matches(query))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<Drink> {
        BUILT_IN_DRINKS
            .iter()
            .find(|drink| drink.id == id)
            .cloned()
            .or_else(|| {
                self.list_custom_drinks()
                    .into_iter()
                    .find(|drink| drink.id == id)
            })
    }

    /// Adds a custom drink and returns it as stored.
    ///
    /// The category is always [`DrinkCategory::Custom`]. Ids must be unique
    /// across built-in and custom drinks, so a missing or clashing id is
    /// replaced with a generated one.
    #[instrument(skip(self, custom), fields(name = %custom.name))]
    pub fn add_custom_drink(&self, custom: CustomDrink) -> Result<Drink> {
        let existing = self.list_custom_drinks();
        let taken = |id: &str| {
            BUILT_IN_DRINKS.iter().any(|drink| drink.id == id)
                || existing.iter().any(|drink| drink.id == id)
        };

        let id = match custom.id {
            Some(id) if !id.trim().is_empty() && !taken(id.as_str()) => id,
            requested => {
                let generated = format!("custom-{}", Uuid::new_v4());
                debug!(?requested, %generated, "Generated custom drink id");
                generated
            }
        };

        let drink = Drink {
            id,
            name: custom.name.trim().to_owned(),
            category: DrinkCategory::Custom,
            volume_ml: custom.volume_ml,
            abv: custom.abv,
            brand: custom
                .brand
                .map(|brand| brand.trim().to_owned())
                .filter(|brand| !brand.is_empty()),
        };

        self.store.save_custom_drink(drink.clone())?;
        Ok(drink)
    }

    /// Only custom drinks can be removed; built-in ids are left alone.
    pub fn remove_custom_drink(&self, id: &str) -> Result<()> {
        self.store.delete_custom_drink(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, ValidationError};
    use std::collections::HashSet;

    fn custom(name: &str, id: Option<&str>) -> CustomDrink {
        CustomDrink {
            id: id.map(str::to_owned),
            name: name.to_owned(),
            volume_ml: 440.0,
            abv: 7.2,
            brand: None,
        }
    }

    #[test]
    fn test_built_ins_are_unique_and_valid() {
        let ids: HashSet<_> = BUILT_IN_DRINKS.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), BUILT_IN_DRINKS.len());

        for drink in BUILT_IN_DRINKS.iter() {
            assert!(drink.validate().is_ok(), "{} is invalid", drink.id);
            assert_ne!(drink.category, DrinkCategory::Custom);
        }
    }

    #[test]
    fn test_built_in_order() {
        assert_eq!(BUILT_IN_DRINKS.len(), 42);
        assert_eq!(BUILT_IN_DRINKS[0].id, "beer-heineken");
        assert_eq!(BUILT_IN_DRINKS[41].id, "rtd-alcopop");
    }

    #[test]
    fn test_built_in_ids_resolve_for_existing_logs() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);

        let old_fashioned = catalog.find("cocktail-oldFashioned").unwrap();
        assert_eq!(old_fashioned.name, "Old Fashioned");
        assert!(catalog.find("cocktail-oldfashioned").is_none());
    }

    #[test]
    fn test_add_custom_drink_forces_category_and_id() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);

        let drink = catalog.add_custom_drink(custom("Hazy Pale", None)).unwrap();
        assert_eq!(drink.category, DrinkCategory::Custom);
        assert!(drink.id.starts_with("custom-"));
        assert_eq!(catalog.list_custom_drinks(), vec![drink]);
    }

    #[test]
    fn test_add_custom_drink_keeps_free_id() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);

        let drink = catalog
            .add_custom_drink(custom("House Red", Some("my-red")))
            .unwrap();
        assert_eq!(drink.id, "my-red");
    }

    #[test]
    fn test_add_custom_drink_replaces_clashing_id() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);

        let clash_built_in = catalog
            .add_custom_drink(custom("Not Heineken", Some("beer-heineken")))
            .unwrap();
        assert_ne!(clash_built_in.id, "beer-heineken");

        let first = catalog
            .add_custom_drink(custom("Mine", Some("mine")))
            .unwrap();
        let second = catalog
            .add_custom_drink(custom("Also mine", Some("mine")))
            .unwrap();
        assert_eq!(first.id, "mine");
        assert_ne!(second.id, "mine");
    }

    #[test]
    fn test_add_custom_drink_validates() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);

        let mut drink = custom("Too Strong", None);
        drink.abv = 120.0;

        assert!(matches!(
            catalog.add_custom_drink(drink),
            Err(Error::Validation(ValidationError::Abv(_)))
        ));
        assert!(catalog.list_custom_drinks().is_empty());
    }

    #[test]
    fn test_all_drinks_puts_custom_last() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);
        catalog.add_custom_drink(custom("Hazy Pale", None)).unwrap();

        let all = catalog.all_drinks();
        assert_eq!(all.len(), BUILT_IN_DRINKS.len() + 1);
        assert_eq!(all.last().map(|d| d.name.as_str()), Some("Hazy Pale"));
    }

    #[test]
    fn test_search() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);
        catalog.add_custom_drink(custom("Vodka Lemonade", None)).unwrap();

        let names: Vec<_> = catalog
            .search("VODKA")
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec!["Vodka (Single)", "Vodka (Double)", "Vodka Lemonade"]
        );

        // Brand match
        let by_brand = catalog.search("smirnoff");
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].id, "rtd-smirnoffice");

        assert_eq!(catalog.search("").len(), BUILT_IN_DRINKS.len() + 1);
        assert!(catalog.search("kombucha").is_empty());
    }

    #[test]
    fn test_find_and_remove() {
        let store = Store::in_memory();
        let catalog = Catalog::new(&store);
        let drink = catalog.add_custom_drink(custom("Hazy Pale", None)).unwrap();

        assert_eq!(catalog.find("wine-prosecco").map(|d| d.abv), Some(11.0));
        assert_eq!(catalog.find(&drink.id), Some(drink.clone()));

        catalog.remove_custom_drink(&drink.id).unwrap();
        assert!(catalog.find(&drink.id).is_none());

        // Built-ins can't be removed
        catalog.remove_custom_drink("beer-heineken").unwrap();
        assert!(catalog.find("beer-heineken").is_some());
    }
}
