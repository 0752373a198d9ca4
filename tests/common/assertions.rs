//! Domain-specific assertion macros and helpers for mdu harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! rows or which store entry broke the expectation.

use mdu_core::{Record, SessionStore, RESULTS_KEY};

/// The `User ID` column of each record, in order.
pub fn user_ids(records: &[Record]) -> Vec<u64> {
    records
        .iter()
        .map(|r| r.number("User ID") as u64)
        .collect()
}

/// Decode whatever the store holds under the results key.
pub fn cached_results(store: &dyn SessionStore) -> Option<Vec<Record>> {
    store
        .get(RESULTS_KEY)
        .expect("store readable")
        .map(|raw| serde_json::from_str(&raw).expect("cached results are a record array"))
}

/// Assert that a record slice holds exactly the given user IDs, in order.
///
/// ```rust
/// assert_user_ids!(controller.results(), [1, 4, 6]);
/// ```
#[macro_export]
macro_rules! assert_user_ids {
    ($records:expr, [$($id:expr),* $(,)?]) => {{
        let actual = $crate::common::user_ids($records);
        let expected: Vec<u64> = vec![$($id),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_user_ids! failed: rows differ from the expected User IDs"
        );
    }};
}

/// Assert that the session store holds no cached result set.
#[macro_export]
macro_rules! assert_nothing_cached {
    ($store:expr) => {{
        if let Some(cached) = $crate::common::cached_results($store) {
            panic!(
                "assert_nothing_cached! failed: store still holds {} record(s), User IDs {:?}",
                cached.len(),
                $crate::common::user_ids(&cached)
            );
        }
    }};
}
