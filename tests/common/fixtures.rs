//! Canned dataset rows shared by the harnesses.
//!
//! The first five rows follow the head of the public user-behaviour dataset;
//! the rest are made up to cover more models and both extremes of usage.

use super::builders::RecordBuilder;
use mdu_core::Record;

/// Eight complete rows across five device models and both operating systems.
pub fn dataset_sample() -> Vec<Record> {
    vec![
        RecordBuilder::full(1, "Google Pixel 5", "Android", (393.0, 6.4, 1872.0), 67, 1122.0, 40, "Male", 4),
        RecordBuilder::full(2, "OnePlus 9", "Android", (268.0, 4.7, 1331.0), 42, 944.0, 47, "Female", 3),
        RecordBuilder::full(3, "Xiaomi Mi 11", "Android", (154.0, 4.0, 761.0), 32, 322.0, 42, "Male", 2),
        RecordBuilder::full(4, "Google Pixel 5", "Android", (239.0, 4.8, 1676.0), 56, 871.0, 20, "Male", 3),
        RecordBuilder::full(5, "iPhone 12", "iOS", (187.0, 4.3, 1367.0), 58, 988.0, 31, "Female", 3),
        RecordBuilder::full(6, "Google Pixel 5", "Android", (99.0, 2.0, 940.0), 35, 564.0, 31, "Male", 2),
        RecordBuilder::full(7, "Samsung Galaxy S21", "Android", (350.0, 7.3, 1802.0), 66, 1054.0, 21, "Female", 4),
        RecordBuilder::full(8, "iPhone 12", "iOS", (543.0, 11.4, 2956.0), 82, 1702.0, 31, "Male", 5),
    ]
}

/// The Male / Female / Male candidate set: `"male"` is a substring of
/// `"Female"`, so a Gender search for it keeps all three.
pub fn gender_trio() -> Vec<Record> {
    vec![
        RecordBuilder::new(1).gender("Male").age(20).build(),
        RecordBuilder::new(2).gender("Female").age(30).build(),
        RecordBuilder::new(3).gender("Male").age(40).build(),
    ]
}

/// Rows with holes in them: a missing model, a null model, an empty model.
pub fn ragged_rows() -> Vec<Record> {
    let mut null_model = RecordBuilder::new(11).os("Android").build();
    null_model.insert("Device Model", serde_json::Value::Null);
    vec![
        RecordBuilder::new(10).os("Android").build(),
        null_model,
        RecordBuilder::new(12).model("").os("iOS").build(),
        RecordBuilder::new(13).model("Google Pixel 5").os("Android").build(),
    ]
}
