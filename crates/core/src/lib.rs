//! Domain primitives shared by the database and API layers.
//!
//! This crate has no I/O: identifier parsing, request-field validation,
//! the error taxonomy, and the listing query plan live here so they can be
//! unit-tested without a database.

pub mod error;
pub mod fields;
pub mod ids;
pub mod listing;
pub mod types;
