//! Local keyword filter applied to every candidate set the API returns.
//!
//! A record matches when its filter column, lowercased, contains the
//! lowercased query. Absent, `null`, `false`, `0` and empty-string values
//! never match, not even the empty query.

use crate::fields::FilterField;
use crate::record::Record;
use serde_json::Value;

/// True when `record[field]` case-insensitively contains `query`.
pub fn matches(record: &Record, field: FilterField, query: &str) -> bool {
    let haystack = match record.get(field.as_str()) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return false,
        Some(Value::String(s)) if s.is_empty() => return false,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => return false,
        Some(Value::String(s)) => s.to_lowercase(),
        // Behaviour classes usually arrive as bare numbers.
        Some(other) => other.to_string().to_lowercase(),
    };
    haystack.contains(&query.to_lowercase())
}

/// Keep the records matching `query` on `field`, preserving order.
pub fn filter_records(records: Vec<Record>, field: FilterField, query: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| matches(r, field, query))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn with(field: FilterField, value: Value) -> Record {
        let mut r = Record::default();
        r.insert(field.as_str(), value);
        r
    }

    #[rstest]
    #[case(FilterField::OperatingSystem, json!("Android"), "and", true)]
    #[case(FilterField::OperatingSystem, json!("iOS"), "IOS", true)]
    #[case(FilterField::Gender, json!("Female"), "male", true)]
    #[case(FilterField::DeviceModel, json!("Google Pixel 5"), "pixel", true)]
    #[case(FilterField::DeviceModel, json!("iPhone 12"), "pixel", false)]
    #[case(FilterField::BehaviorClass, json!(3), "3", true)]
    #[case(FilterField::BehaviorClass, json!(3), "4", false)]
    #[case(FilterField::Gender, json!("Male"), "", true)]
    #[case(FilterField::Gender, json!(""), "", false)]
    #[case(FilterField::Gender, json!(null), "", false)]
    #[case(FilterField::BehaviorClass, json!(0), "", false)]
    #[case(FilterField::BehaviorClass, json!(0), "0", false)]
    #[case(FilterField::BehaviorClass, json!(10), "0", true)]
    #[case(FilterField::BehaviorClass, json!("0"), "0", true)]
    fn case_insensitive_substring(
        #[case] field: FilterField,
        #[case] value: Value,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(&with(field, value), field, query), expected);
    }

    #[test]
    fn missing_field_never_matches() {
        let r = with(FilterField::Gender, json!("Male"));
        assert!(!matches(&r, FilterField::DeviceModel, ""));
    }

    #[test]
    fn filter_preserves_order() {
        let records = vec![
            with(FilterField::Gender, json!("Male")),
            with(FilterField::Gender, json!("Female")),
            with(FilterField::Gender, json!("Other")),
            with(FilterField::Gender, json!("Male")),
        ];
        let kept = filter_records(records, FilterField::Gender, "male");
        let genders: Vec<_> = kept.iter().map(|r| r.text("Gender")).collect();
        assert_eq!(genders, vec!["Male", "Female", "Male"]);
    }
}
