//! Column catalogue for the user-behaviour dataset.
//!
//! The search API speaks in the dataset's human-readable column names
//! (`"Device Model"`, `"Age"`, …), so every enum here maps one-to-one onto
//! those exact JSON keys via `as_str()`.

use serde::Deserialize;

/// Every column of a dataset row, in results-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UserId,
    DeviceModel,
    OperatingSystem,
    AppUsageTime,
    ScreenOnTime,
    BatteryDrain,
    AppsInstalled,
    DataUsage,
    Age,
    Gender,
    BehaviorClass,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::UserId,
        Field::DeviceModel,
        Field::OperatingSystem,
        Field::AppUsageTime,
        Field::ScreenOnTime,
        Field::BatteryDrain,
        Field::AppsInstalled,
        Field::DataUsage,
        Field::Age,
        Field::Gender,
        Field::BehaviorClass,
    ];

    /// The JSON key used by the search API.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::UserId => "User ID",
            Field::DeviceModel => "Device Model",
            Field::OperatingSystem => "Operating System",
            Field::AppUsageTime => "App Usage Time (min/day)",
            Field::ScreenOnTime => "Screen On Time (hours/day)",
            Field::BatteryDrain => "Battery Drain (mAh/day)",
            Field::AppsInstalled => "Number of Apps Installed",
            Field::DataUsage => "Data Usage (MB/day)",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::BehaviorClass => "User Behavior Class",
        }
    }

    /// The numeric counterpart, if this column holds a measurement.
    pub fn numeric(self) -> Option<NumericField> {
        NumericField::ALL.into_iter().find(|n| n.field() == self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterField
// ---------------------------------------------------------------------------

/// The columns a keyword search can be restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FilterField {
    #[default]
    DeviceModel,
    Gender,
    OperatingSystem,
    BehaviorClass,
}

impl FilterField {
    /// Selector order, matching the dropdown of the search view.
    pub const ALL: [FilterField; 4] = [
        FilterField::DeviceModel,
        FilterField::Gender,
        FilterField::OperatingSystem,
        FilterField::BehaviorClass,
    ];

    pub fn field(self) -> Field {
        match self {
            FilterField::DeviceModel => Field::DeviceModel,
            FilterField::Gender => Field::Gender,
            FilterField::OperatingSystem => Field::OperatingSystem,
            FilterField::BehaviorClass => Field::BehaviorClass,
        }
    }

    /// The JSON key, also sent verbatim as the `filterType` request parameter.
    pub fn as_str(self) -> &'static str {
        self.field().as_str()
    }

    /// Short label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::DeviceModel => "Model",
            FilterField::Gender => "Gender",
            FilterField::OperatingSystem => "Operating System",
            FilterField::BehaviorClass => "Behavior Class",
        }
    }

    /// Next entry in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous entry in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterField {
    type Err = String;

    /// Accepts the exact column name or a short case-insensitive alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(exact) = Self::ALL.into_iter().find(|f| f.as_str() == s) {
            return Ok(exact);
        }
        let normalised = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "model" | "device" | "device-model" => Ok(FilterField::DeviceModel),
            "gender" => Ok(FilterField::Gender),
            "os" | "operating-system" => Ok(FilterField::OperatingSystem),
            "class" | "behavior" | "behavior-class" | "user-behavior-class" => {
                Ok(FilterField::BehaviorClass)
            }
            _ => Err(format!(
                "unknown filter field {s:?} (expected model, gender, os or class)"
            )),
        }
    }
}

impl TryFrom<String> for FilterField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// NumericField
// ---------------------------------------------------------------------------

/// Columns holding measurements that statistics can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    AppUsageTime,
    ScreenOnTime,
    BatteryDrain,
    AppsInstalled,
    DataUsage,
    Age,
}

impl NumericField {
    pub const ALL: [NumericField; 6] = [
        NumericField::AppUsageTime,
        NumericField::ScreenOnTime,
        NumericField::BatteryDrain,
        NumericField::AppsInstalled,
        NumericField::DataUsage,
        NumericField::Age,
    ];

    pub fn field(self) -> Field {
        match self {
            NumericField::AppUsageTime => Field::AppUsageTime,
            NumericField::ScreenOnTime => Field::ScreenOnTime,
            NumericField::BatteryDrain => Field::BatteryDrain,
            NumericField::AppsInstalled => Field::AppsInstalled,
            NumericField::DataUsage => Field::DataUsage,
            NumericField::Age => Field::Age,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.field().as_str()
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
