//! Application services for the web crate.
//!
//! - [`auth`] - Demo credential verification and mock token lifecycle
//! - [`enrich`] - Per-page species enrichment pipeline
//! - [`filter`] - Client-side categorical filtering over a loaded page

pub mod auth;
pub mod enrich;
pub mod filter;
