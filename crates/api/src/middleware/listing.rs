//! Listing query-string extractor for paginated handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use vidhub_core::listing::ListingParams;

/// Listing parameters read from the query string without ever rejecting.
///
/// A derived `Query` struct rejects a repeated key (`?page=1&page=2`)
/// or a name sent together with its alias. This reads the raw pairs
/// instead and keeps the first value per parameter.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery(pub ListingParams);

impl<S> FromRequestParts<S> for ListingQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => ListingParams::from_pairs(pairs),
            Err(err) => {
                tracing::debug!(error = %err, "Unreadable listing query, using defaults");
                ListingParams::default()
            }
        };
        Ok(ListingQuery(params))
    }
}
