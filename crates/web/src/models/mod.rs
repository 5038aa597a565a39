//! Domain models for the web crate.

pub mod session;

pub use session::{SessionUser, keys as session_keys};
