pub mod drink;
pub mod drink_entry;
pub mod settings;
pub mod water_entry;
