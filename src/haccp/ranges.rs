use serde::Serialize;

/// Inclusive range of acceptable readings, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafeRange {
    pub min: f64,
    pub max: f64,
}

impl SafeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

struct RangeRule {
    keywords: &'static [&'static str],
    range: SafeRange,
}

// Evaluated top to bottom, first match wins. Keywords are lowercase.
// Freezer comes before fridge so that "fridge-freezer" and "ψυγείο-καταψύκτης"
// units are held to the colder range. Poultry and minced meat come before the
// generic meat rule, which must stay last.
const RANGE_RULES: &[RangeRule] = &[
    RangeRule {
        keywords: &["freezer", "καταψύκτης", "κατάψυξη"],
        range: SafeRange::new(-25.0, -18.0),
    },
    RangeRule {
        keywords: &["fridge", "refrigerator", "chiller", "cold room", "ψυγείο", "ψυκτικός"],
        range: SafeRange::new(0.0, 5.0),
    },
    RangeRule {
        keywords: &["poultry", "chicken", "turkey", "κοτόπουλο", "πουλερικά", "γαλοπούλα"],
        range: SafeRange::new(74.0, 100.0),
    },
    RangeRule {
        keywords: &["minced", "burger", "κιμάς", "μπιφτέκι"],
        range: SafeRange::new(71.0, 100.0),
    },
    RangeRule {
        keywords: &["hot holding", "bain marie", "bain-marie", "θερμοθάλαμος", "ζεστή διατήρηση"],
        range: SafeRange::new(63.0, 100.0),
    },
    // Matches cold storage too when no earlier rule does: a "Fish display" is held
    // to the hot range and flagged, while a "Meat chiller" is caught by the fridge rule.
    RangeRule {
        keywords: &["meat", "pork", "beef", "fish", "κρέας", "χοιρινό", "μοσχάρι", "ψάρι"],
        range: SafeRange::new(63.0, 100.0),
    },
];

/// Infers the safe range of an item from keywords in its name.
///
/// Matching is a case-insensitive substring search. Items that match no rule
/// have no defined range.
pub fn safe_range_for(item_name: &str) -> Option<SafeRange> {
    let name = item_name.to_lowercase();
    RANGE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|rule| rule.range)
}

/// Reads the leading number of a raw value, so `"4.5°C"` reads as 4.5.
///
/// Accepts an optional sign, a decimal fraction and an exponent (`"1e2"` reads as 100).
pub fn parse_reading(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    // An exponent only counts when digits follow it, so "3eggs" still reads as 3.
    if i > 0 && matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let digits = bytes[j..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            i = j + digits;
        }
    }
    i
}

/// Whether a reading falls outside the range inferred from the item name.
///
/// Unparsable readings and items without a known range are never flagged.
pub fn is_out_of_range(value: &str, item_name: &str) -> bool {
    let Some(range) = safe_range_for(item_name) else {
        return false;
    };
    parse_reading(value).is_some_and(|reading| !range.contains(reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(safe_range_for("Chicken burger"), Some(SafeRange::new(74.0, 100.0)));
        assert_eq!(safe_range_for("Fridge-freezer"), Some(SafeRange::new(-25.0, -18.0)));
        assert_eq!(safe_range_for("Meat chiller"), Some(SafeRange::new(0.0, 5.0)));
        assert_eq!(safe_range_for("Fish display"), Some(SafeRange::new(63.0, 100.0)));
    }

    #[test]
    fn greek_keywords_match_case_insensitively() {
        assert_eq!(safe_range_for("ΨΥΓΕΊΟ κουζίνας"), Some(SafeRange::new(0.0, 5.0)));
        assert_eq!(safe_range_for("Καταψύκτης 2"), Some(SafeRange::new(-25.0, -18.0)));
    }

    #[test]
    fn lenient_reading_parse() {
        assert_eq!(parse_reading(" 4.5°C"), Some(4.5));
        assert_eq!(parse_reading("-18"), Some(-18.0));
        assert_eq!(parse_reading(".5"), Some(0.5));
        assert_eq!(parse_reading("ok"), None);
        assert_eq!(parse_reading("-"), None);
        assert_eq!(parse_reading(""), None);
    }

    #[test]
    fn reading_parse_accepts_exponents() {
        assert_eq!(parse_reading("1e2"), Some(100.0));
        assert_eq!(parse_reading("2.5E-1°C"), Some(0.25));
        assert_eq!(parse_reading("3eggs"), Some(3.0));
        assert_eq!(parse_reading("4e+"), Some(4.0));
        assert_eq!(parse_reading("e5"), None);
    }
}
