/// Condition-category → symbol table. Categories are the values of the
/// API's `weather[0].main` field.
const SYMBOLS: [(&str, &str); 15] = [
    ("Clear", "☀️"),
    ("Clouds", "☁️"),
    ("Rain", "🌧️"),
    ("Thunderstorm", "⛈️"),
    ("Drizzle", "🌦️"),
    ("Snow", "❄️"),
    ("Mist", "🌫️"),
    ("Smoke", "💨"),
    ("Haze", "🌫️"),
    ("Dust", "💨"),
    ("Fog", "🌫️"),
    ("Sand", "💨"),
    ("Ash", "🌋"),
    ("Squall", "💨"),
    ("Tornado", "🌪️"),
];

/// Generic fallback for categories outside the table.
const FALLBACK: &str = "🌡️";

/// Look up the display symbol for a condition category.
#[must_use]
pub fn symbol_for(condition: &str) -> &'static str {
    SYMBOLS
        .iter()
        .find(|(name, _)| *name == condition)
        .map_or(FALLBACK, |(_, symbol)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_resolve() {
        assert_eq!(symbol_for("Clear"), "☀️");
        assert_eq!(symbol_for("Rain"), "🌧️");
        assert_eq!(symbol_for("Squall"), "💨");
    }

    #[test]
    fn every_table_entry_is_reachable() {
        for (name, symbol) in SYMBOLS {
            assert_eq!(symbol_for(name), symbol);
        }
    }

    #[test]
    fn unknown_categories_fall_back() {
        assert_eq!(symbol_for("Volcano"), "🌡️");
        assert_eq!(symbol_for(""), "🌡️");
        // lookup is case-sensitive
        assert_eq!(symbol_for("clear"), "🌡️");
    }
}
