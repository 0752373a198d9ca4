//! mdu-core: Mobile Device Usage core library.
//!
//! This crate holds everything the search view needs that is not terminal or
//! network specific: the dataset [`Record`] model, the local filter, the
//! aggregate statistics, the session-local result store, and the
//! [`SearchController`] that ties them together.
//!
//! # Architecture
//!
//! ```text
//! SearchApi ──► SearchController ──► UI
//!                  │      ▲
//!                  ▼      │
//!               SessionStore
//! ```
//!
//! The controller never performs I/O on its own; the HTTP client and the
//! session store are injected so the whole search contract can be exercised
//! in tests without a network or a browser-like storage backend.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod fields;
pub mod filter;
pub mod record;
pub mod session;
pub mod stats;

pub use api::SearchApi;
pub use controller::{SearchController, SearchStatus, SearchTicket, RESULTS_KEY};
pub use error::{SearchError, StoreError};
pub use fields::{Field, FilterField, NumericField};
pub use record::Record;
pub use session::{FileStore, MemoryStore, SessionStore};
