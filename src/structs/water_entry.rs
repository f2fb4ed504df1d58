use {
    chrono::{NaiveDate, Utc},
    serde::{Deserialize, Serialize},
};

/// Water drunk on a single day. There is at most one per date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaterEntry {
    pub id: String,

    /// Running total for the day in milliliters, not an increment
    pub amount: u32,

    pub date: NaiveDate,

    /// Epoch milliseconds of the last update
    pub timestamp: i64,
}

impl WaterEntry {
    pub fn new(date: NaiveDate, amount: u32) -> Self {
        let timestamp = Utc::now().timestamp_millis();

        Self {
            id: format!("water-{date}-{timestamp}"),
            amount,
            date,
            timestamp,
        }
    }
}
