use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// What kind of place or process a monitored item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaccpCategory {
    Fridge,
    Freezer,
    HotHolding,
    Cooking,
    KitchenArea,
    Storage,
    SupplierDelivery,
}

/// A monitored fridge, freezer, process or area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaccpItem {
    pub id: String,
    pub name: String,
    pub category: HaccpCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogType {
    #[serde(alias = "temperature")]
    Temperature,
    #[serde(alias = "cleaning")]
    Cleaning,
    #[serde(alias = "receiving")]
    Receiving,
}

/// One safety check as recorded by staff. Logs are never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaccpLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub item_id: String,
    /// Raw reading as entered, e.g. `"3.5"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub author: String,
    /// Set when the log was written; trend analysis trusts this flag as stored.
    #[serde(default)]
    pub is_out_of_range: bool,
}

impl HaccpLog {
    pub fn new(
        id: impl Into<String>,
        item_id: impl Into<String>,
        log_type: LogType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            log_type,
            item_id: item_id.into(),
            value: None,
            author: String::new(),
            is_out_of_range: false,
        }
    }

    /// A temperature reading.
    pub fn temperature(
        id: impl Into<String>,
        item_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(id, item_id, LogType::Temperature, timestamp).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn flagged(mut self, is_out_of_range: bool) -> Self {
        self.is_out_of_range = is_out_of_range;
        self
    }
}

/// How often an item must be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckFrequency {
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "every_2_hours")]
    Every2Hours,
    #[serde(rename = "every_4_hours")]
    Every4Hours,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
}

impl CheckFrequency {
    pub fn interval(self) -> Duration {
        match self {
            CheckFrequency::Hourly => Duration::hours(1),
            CheckFrequency::Every2Hours => Duration::hours(2),
            CheckFrequency::Every4Hours => Duration::hours(4),
            CheckFrequency::Daily => Duration::days(1),
            CheckFrequency::Weekly => Duration::weeks(1),
        }
    }
}

/// A recurring obligation to check an item, tracked through a rolling due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaccpReminder {
    pub id: String,
    pub item_id: String,
    pub frequency: CheckFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_check_due: Option<DateTime<Utc>>,
}

impl HaccpReminder {
    pub fn new(
        id: impl Into<String>,
        item_id: impl Into<String>,
        frequency: CheckFrequency,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            frequency,
            next_check_due: None,
        }
    }

    pub fn due_at(mut self, due: DateTime<Utc>) -> Self {
        self.next_check_due = Some(due);
        self
    }

    /// The due date a caller should store after recording a check at `checked_at`.
    ///
    /// The engines only read `next_check_due`; advancing it is up to whoever records checks.
    pub fn next_due_after(&self, checked_at: DateTime<Utc>) -> DateTime<Utc> {
        checked_at + self.frequency.interval()
    }
}
