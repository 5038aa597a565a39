//! Holocron Core - Shared catalog types library.
//!
//! This crate provides common types used across all Holocron components:
//! - `web` - Server-rendered catalog browsing UI
//! - `cli` - Command-line catalog inspection tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog entities, the pagination envelope, and the
//!   canonical-URL identity type
//! - [`display`] - Pure formatting helpers for derived display attributes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod display;
pub mod types;

pub use types::*;
