//! Custom Askama template filters.
//!
//! Thin wrappers over the pure formatting helpers in `holocron-core`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use holocron_core::display;

/// Format a height in centimeters as meters.
///
/// Usage in templates: `{{ character.person.height|height }}`
#[askama::filter_fn]
pub fn height(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(display::format_height(&value.to_string()))
}

/// Format a mass with its unit.
///
/// Usage in templates: `{{ character.person.mass|mass }}`
#[askama::filter_fn]
pub fn mass(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(display::format_mass(&value.to_string()))
}

/// Format a population count with thousands separators.
///
/// Usage in templates: `{{ planet.population|population }}`
#[askama::filter_fn]
pub fn population(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(display::format_population(&value.to_string()))
}

/// Format an ISO 8601 timestamp as `dd-MM-yyyy`.
///
/// Usage in templates: `{{ character.person.created|date }}`
#[askama::filter_fn]
pub fn date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(display::format_date(&value.to_string()))
}

/// Uppercase the first character, e.g. `male` -> `Male`.
///
/// Usage in templates: `{{ character.person.gender|title_case }}`
#[askama::filter_fn]
pub fn title_case(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let s = value.to_string();
    let mut chars = s.chars();
    Ok(chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    }))
}
