//! Listing query shaping shared by every paginated endpoint.
//!
//! [`params`] converts untyped query-string values into [`FilterSpec`],
//! [`SortSpec`] and [`PageSpec`]; [`plan`] assembles them, together with a
//! caller-fixed [`Scope`], into an ordered [`ListingPlan`] that the database
//! layer renders and executes.

pub mod params;
pub mod plan;

#[cfg(test)]
mod memory;

pub use params::{
    like_pattern, FilterSpec, ListingParams, PageSpec, SortDirection, SortField, SortSpec,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
pub use plan::{build_feed_plan, build_listing_plan, ListingPlan, Predicate, Scope, Stage};
