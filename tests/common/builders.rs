//! Test builders: ergonomic constructors for dataset [`Record`]s.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use mdu_core::{Field, Record};
use serde_json::Value;

/// Fluent builder for [`Record`] fixtures.
///
/// # Example
///
/// ```rust
/// let row = RecordBuilder::new(1)
///     .model("Google Pixel 5")
///     .os("Android")
///     .gender("Male")
///     .age(40)
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(user_id: u64) -> Self {
        let mut record = Record::default();
        record.insert(Field::UserId.as_str(), user_id);
        Self { record }
    }

    /// A row with every column filled.
    #[allow(clippy::too_many_arguments)]
    pub fn full(
        user_id: u64,
        model: &str,
        os: &str,
        usage: (f64, f64, f64),
        apps: u64,
        data_mb: f64,
        age: u64,
        gender: &str,
        class: u64,
    ) -> Record {
        let (app_min, screen_h, battery) = usage;
        Self::new(user_id)
            .model(model)
            .os(os)
            .set(Field::AppUsageTime, app_min)
            .set(Field::ScreenOnTime, screen_h)
            .set(Field::BatteryDrain, battery)
            .set(Field::AppsInstalled, apps)
            .set(Field::DataUsage, data_mb)
            .age(age)
            .gender(gender)
            .class(class)
            .build()
    }

    pub fn set(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.record.insert(field.as_str(), value);
        self
    }

    pub fn model(self, model: &str) -> Self {
        self.set(Field::DeviceModel, model)
    }

    pub fn os(self, os: &str) -> Self {
        self.set(Field::OperatingSystem, os)
    }

    pub fn gender(self, gender: &str) -> Self {
        self.set(Field::Gender, gender)
    }

    pub fn age(self, age: u64) -> Self {
        self.set(Field::Age, age)
    }

    pub fn class(self, class: u64) -> Self {
        self.set(Field::BehaviorClass, class)
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Serialise records as the search API would send them.
pub fn to_body(records: &[Record]) -> String {
    serde_json::to_string(records).expect("records serialise")
}
