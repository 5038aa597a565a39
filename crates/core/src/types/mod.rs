//! Core types for the Holocron catalog.
//!
//! Entities mirror the upstream catalog schema verbatim: attribute values
//! arrive as strings (including numeric fields, which the upstream reports as
//! `"172"` or `"unknown"`), and relations are expressed as canonical URLs.

pub mod character;
pub mod film;
pub mod page;
pub mod person;
pub mod planet;
pub mod species;
pub mod url;

pub use character::Character;
pub use film::Film;
pub use page::Page;
pub use person::Person;
pub use planet::Planet;
pub use species::Species;
pub use url::ResourceUrl;
