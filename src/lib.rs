//! mdu: Mobile Device Usage explorer
//!
//! Terminal client for the mobile device usage / user behaviour dataset.
//! The workspace is split into three layers, re-exported here so integration
//! tests can reach them through one crate:
//!
//! ```text
//! mdu-client (HTTP) ──► mdu-core (SearchController) ──► mdu-tui
//!                                  │
//!                                  └──► headless (stdout)
//! ```

pub mod headless;

pub use mdu_client::{search_uri, ClientError, HttpSearchClient};
pub use mdu_core::{
    config::Config, FilterField, MemoryStore, Record, SearchApi, SearchController, SearchError,
    SearchStatus,
};
