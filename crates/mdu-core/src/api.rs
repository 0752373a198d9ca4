//! The seam between the controller and the external search endpoint.

use crate::error::SearchError;
use crate::fields::FilterField;
use crate::record::Record;
use std::future::Future;

/// Path of the search endpoint, relative to the API base URL.
pub const SEARCH_PATH: &str = "/api/data/search";

/// Anything that can answer `GET /api/data/search?filterType=…&keyword=…`.
///
/// The returned candidate set is not trusted to be filtered; the controller
/// re-applies the same predicate locally.
pub trait SearchApi {
    fn search(
        &self,
        filter: FilterField,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Record>, SearchError>> + Send;
}
