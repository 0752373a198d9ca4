//! Search controller: the state behind the search view.
//!
//! # Lifecycle
//!
//! ```text
//! restore_on_mount ─► begin_search ─► (await SearchApi) ─► complete ─► …
//!                                                                   │
//!                                             clear_on_unload ◄─────┘
//! ```
//!
//! A search is split into [`SearchController::begin_search`] and
//! [`SearchController::complete`] so the hosting shell can run the request
//! on a background task. Every `begin_search` hands out a [`SearchTicket`]
//! carrying a monotonically increasing sequence number; `complete` drops any
//! ticket that is not the most recent one, and so does a completion that
//! lands after `clear_on_unload`.
//!
//! # Result retention
//!
//! A search whose filtered set is empty (or that fails) flags the view as
//! having no results but leaves `results` untouched. Only a non-empty
//! search or the unload hook replaces them.

use crate::api::SearchApi;
use crate::error::SearchError;
use crate::fields::FilterField;
use crate::filter::filter_records;
use crate::record::Record;
use crate::session::SessionStore;

/// Session store key holding the last non-empty result set.
pub const RESULTS_KEY: &str = "filteredResults";

/// Where the search view currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing searched yet in this view.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last search produced at least one record.
    Success,
    /// The last search matched nothing, or the session was unloaded.
    Empty,
    /// The last search failed; shown to the user exactly like `Empty`.
    Failed(SearchError),
}

/// Handle for one in-flight search, returned by
/// [`SearchController::begin_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    pub filter: FilterField,
    pub query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

pub struct SearchController {
    filter: FilterField,
    query: String,
    results: Vec<Record>,
    status: SearchStatus,
    store: Box<dyn SessionStore>,
    seq: u64,
}

impl SearchController {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            filter: FilterField::default(),
            query: String::new(),
            results: Vec::new(),
            status: SearchStatus::Idle,
            store: Box::new(store),
            seq: 0,
        }
    }

    /// Filter field of the most recently started search.
    pub fn filter(&self) -> FilterField {
        self.filter
    }

    /// Query of the most recently started search.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Record] {
        &self.results
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// The "No Records To Display" flag.
    pub fn no_results(&self) -> bool {
        matches!(self.status, SearchStatus::Empty | SearchStatus::Failed(_))
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Enter the loading state and issue a ticket for a new request.
    ///
    /// Any ticket handed out earlier is superseded from this point on.
    pub fn begin_search(&mut self, filter: FilterField, query: impl Into<String>) -> SearchTicket {
        self.seq += 1;
        self.filter = filter;
        self.query = query.into();
        self.status = SearchStatus::Loading;
        tracing::debug!(seq = self.seq, filter = %filter, query = %self.query, "search started");
        SearchTicket {
            seq: self.seq,
            filter,
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket has been
    /// superseded by a newer search or by [`clear_on_unload`].
    ///
    /// [`clear_on_unload`]: SearchController::clear_on_unload
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Record>, SearchError>,
    ) -> bool {
        if ticket.seq != self.seq {
            tracing::debug!(
                ticket = ticket.seq,
                current = self.seq,
                "discarding superseded search response"
            );
            return false;
        }

        match outcome {
            Ok(candidates) => {
                let fetched = candidates.len();
                let filtered = filter_records(candidates, ticket.filter, &ticket.query);
                tracing::debug!(fetched, kept = filtered.len(), "search response filtered");
                if filtered.is_empty() {
                    self.status = SearchStatus::Empty;
                } else {
                    self.persist(&filtered);
                    self.results = filtered;
                    self.status = SearchStatus::Success;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                self.status = SearchStatus::Failed(err);
            }
        }
        true
    }

    /// Run one search end to end against `api`.
    pub async fn search<A: SearchApi>(
        &mut self,
        api: &A,
        filter: FilterField,
        query: impl Into<String>,
    ) -> &SearchStatus {
        let ticket = self.begin_search(filter, query);
        let outcome = api.search(ticket.filter, &ticket.query).await;
        self.complete(ticket, outcome);
        &self.status
    }

    /// Start the view afresh: idle, default filter, empty query, then
    /// restore the cached result set.
    ///
    /// Searches begun before the view was left are superseded.
    pub fn mount(&mut self) {
        self.seq += 1;
        self.filter = FilterField::default();
        self.query.clear();
        self.status = SearchStatus::Idle;
        self.restore_on_mount();
    }

    /// Load the cached result set, if any, when the view becomes active.
    ///
    /// Only `results` changes; the status is left as it was.
    pub fn restore_on_mount(&mut self) {
        let raw = match self.store.get(RESULTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no cached results to restore");
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reading cached results failed");
                return;
            }
        };
        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "restored cached results");
                self.results = records;
            }
            Err(err) => tracing::warn!(error = %err, "cached results are not valid JSON"),
        }
    }

    /// Session-end hook: forget the results and drop the cached copy.
    ///
    /// Any search still in flight is superseded.
    pub fn clear_on_unload(&mut self) {
        self.seq += 1;
        self.results.clear();
        self.status = SearchStatus::Empty;
        if let Err(err) = self.store.delete(RESULTS_KEY) {
            tracing::warn!(error = %err, "deleting cached results failed");
        }
        tracing::debug!("session unloaded");
    }

    fn persist(&mut self, records: &[Record]) {
        let json = match serde_json::to_string(records) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "serialising results failed");
                return;
            }
        };
        if let Err(err) = self.store.set(RESULTS_KEY, &json) {
            tracing::warn!(error = %err, "caching results failed");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
