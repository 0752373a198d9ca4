//! In-process [`SearchApi`] doubles that skip HTTP entirely.

use mdu_core::{FilterField, Record, SearchApi, SearchError};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Returns a fixed outcome for every search and remembers what was asked.
#[derive(Clone)]
pub struct StubApi {
    outcome: Result<Vec<Record>, SearchError>,
    calls: Arc<Mutex<Vec<(FilterField, String)>>>,
}

impl StubApi {
    pub fn returning(records: Vec<Record>) -> Self {
        Self {
            outcome: Ok(records),
            calls: Arc::default(),
        }
    }

    pub fn failing(err: SearchError) -> Self {
        Self {
            outcome: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<(FilterField, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchApi for StubApi {
    fn search(
        &self,
        filter: FilterField,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Record>, SearchError>> + Send {
        self.calls.lock().unwrap().push((filter, keyword.to_string()));
        let outcome = self.outcome.clone();
        async move { outcome }
    }
}
