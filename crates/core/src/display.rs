//! Pure formatting helpers for derived display attributes.
//!
//! The upstream catalog serves every attribute as a string and uses
//! `"unknown"` as its missing-data marker, so all of these degrade to
//! `"Unknown"` on unparseable input instead of failing.

use chrono::DateTime;

/// Default color tag for species with no dedicated entry.
const DEFAULT_COLOR: &str = "bg-indigo-600";

/// Fixed species-name -> color-tag map.
const SPECIES_COLORS: &[(&str, &str)] = &[
    ("Human", "bg-blue-500"),
    ("Droid", "bg-gray-500"),
    ("Wookiee", "bg-amber-700"),
    ("Rodian", "bg-green-600"),
    ("Hutt", "bg-yellow-600"),
    ("Yoda's species", "bg-emerald-500"),
    ("Trandoshan", "bg-lime-600"),
    ("Mon Calamari", "bg-cyan-500"),
    ("Ewok", "bg-orange-600"),
    ("Sullustan", "bg-rose-500"),
    ("Neimodian", "bg-teal-600"),
    ("Gungan", "bg-purple-500"),
    ("Toydarian", "bg-indigo-500"),
    ("Dug", "bg-pink-500"),
    ("Twi'lek", "bg-violet-500"),
    ("Aleena", "bg-fuchsia-500"),
    ("Vulptereen", "bg-red-600"),
    ("Xexto", "bg-sky-500"),
    ("Toong", "bg-amber-500"),
    ("Cerean", "bg-slate-500"),
    ("Nautolan", "bg-emerald-600"),
    ("Zabrak", "bg-red-700"),
    ("Tholothian", "bg-blue-600"),
    ("Iktotchi", "bg-orange-700"),
    ("Quermian", "bg-lime-500"),
    ("Kel Dor", "bg-rose-600"),
    ("Chagrian", "bg-cyan-600"),
    ("Geonosian", "bg-amber-600"),
    ("Mirialan", "bg-green-700"),
    ("Clawdite", "bg-purple-600"),
    ("Besalisk", "bg-blue-700"),
    ("Kaminoan", "bg-gray-400"),
    ("Skakoan", "bg-yellow-700"),
    ("Muun", "bg-slate-600"),
    ("Togruta", "bg-orange-500"),
    ("Kaleesh", "bg-red-800"),
    ("Pau'an", "bg-gray-600"),
];

/// Color tag for a species display name.
#[must_use]
pub fn species_color(species_name: &str) -> &'static str {
    SPECIES_COLORS
        .iter()
        .find(|(name, _)| *name == species_name)
        .map_or(DEFAULT_COLOR, |(_, color)| color)
}

/// Deterministic placeholder portrait URL, seeded by the entity id.
#[must_use]
pub fn portrait_url(seed: u64) -> String {
    format!("https://picsum.photos/seed/{seed}/400/300")
}

/// Format a height in centimeters as meters, e.g. `"172"` -> `"1.72 m"`.
#[must_use]
pub fn format_height(height: &str) -> String {
    height.parse::<f64>().map_or_else(
        |_| "Unknown".to_string(),
        |cm| format!("{:.2} m", cm / 100.0),
    )
}

/// Format a mass with its unit, e.g. `"77"` -> `"77 kg"`.
#[must_use]
pub fn format_mass(mass: &str) -> String {
    // Upstream writes large masses with thousands separators ("1,358")
    let cleaned = mass.replace(',', "");
    cleaned
        .parse::<f64>()
        .map_or_else(|_| "Unknown".to_string(), |kg| format!("{kg} kg"))
}

/// Format a population count with thousands separators.
#[must_use]
pub fn format_population(population: &str) -> String {
    let Ok(num) = population.parse::<u64>() else {
        return "Unknown".to_string();
    };
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an ISO 8601 timestamp as `dd-MM-yyyy`.
#[must_use]
pub fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso).map_or_else(
        |_| "Unknown".to_string(),
        |dt| dt.format("%d-%m-%Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_color_known() {
        assert_eq!(species_color("Human"), "bg-blue-500");
        assert_eq!(species_color("Wookiee"), "bg-amber-700");
        assert_eq!(species_color("Pau'an"), "bg-gray-600");
    }

    #[test]
    fn test_species_color_unknown_falls_back() {
        assert_eq!(species_color("Whill"), "bg-indigo-600");
        assert_eq!(species_color(""), "bg-indigo-600");
    }

    #[test]
    fn test_format_height() {
        assert_eq!(format_height("172"), "1.72 m");
        assert_eq!(format_height("66"), "0.66 m");
        assert_eq!(format_height("unknown"), "Unknown");
    }

    #[test]
    fn test_format_mass() {
        assert_eq!(format_mass("77"), "77 kg");
        assert_eq!(format_mass("1,358"), "1358 kg");
        assert_eq!(format_mass("unknown"), "Unknown");
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population("200000"), "200,000");
        assert_eq!(format_population("1000000000"), "1,000,000,000");
        assert_eq!(format_population("42"), "42");
        assert_eq!(format_population("unknown"), "Unknown");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2014-12-09T13:50:51.644000Z"), "09-12-2014");
        assert_eq!(format_date("garbage"), "Unknown");
    }
}
