//! Fixed lookup tables shared by the extractors.
//!
//! All tables are ordered slices so scans over them are reproducible.

use crate::models::trip::{Currency, Interest};

/// Full month names.
pub const MONTHS: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Month words that are also everyday English words.
pub const AMBIGUOUS_MONTH_WORDS: [&str; 2] = ["may", "march"];

/// Word numbers, ascending by value.
pub const WORD_NUMBERS: [(&str, u32); 20] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
];

/// Interest categories and their trigger words.
pub const INTEREST_KEYWORDS: [(Interest, &[&str]); 9] = [
    (
        Interest::Art,
        &["art", "museum", "galleries", "gallery", "exhibition"],
    ),
    (
        Interest::Food,
        &["food", "cuisine", "restaurant", "dining", "culinary", "street food"],
    ),
    (
        Interest::History,
        &["history", "historic", "heritage", "castle", "monument", "ruins"],
    ),
    (
        Interest::Nature,
        &["nature", "hike", "hiking", "park", "outdoors", "mountain", "forest"],
    ),
    (
        Interest::Adventure,
        &["adventure", "kayak", "ski", "surf", "dive", "zipline", "trek", "climb"],
    ),
    (
        Interest::Nightlife,
        &["nightlife", "club", "bars", "bar", "pub", "party"],
    ),
    (
        Interest::Shopping,
        &["shopping", "shop", "boutique", "mall", "market", "souvenir"],
    ),
    (
        Interest::Family,
        &["family", "kids", "children", "zoo", "theme park"],
    ),
    (
        Interest::Romance,
        &["romance", "honeymoon", "couple", "romantic"],
    ),
];

/// Currency signs. Prefixed dollar signs come before the bare `$`.
pub const CURRENCY_SIGNS: [(&str, Currency); 8] = [
    ("A$", Currency::Aud),
    ("C$", Currency::Cad),
    ("$", Currency::Usd),
    ("€", Currency::Eur),
    ("£", Currency::Gbp),
    ("₹", Currency::Inr),
    ("¥", Currency::Jpy),
    ("₩", Currency::Krw),
];

/// Currency words and abbreviations.
pub const CURRENCY_WORDS: [(&str, Currency); 16] = [
    ("usd", Currency::Usd),
    ("dollar", Currency::Usd),
    ("dollars", Currency::Usd),
    ("eur", Currency::Eur),
    ("euro", Currency::Eur),
    ("euros", Currency::Eur),
    ("gbp", Currency::Gbp),
    ("pound", Currency::Gbp),
    ("pounds", Currency::Gbp),
    ("inr", Currency::Inr),
    ("rupee", Currency::Inr),
    ("rupees", Currency::Inr),
    ("jpy", Currency::Jpy),
    ("yen", Currency::Jpy),
    ("cad", Currency::Cad),
    ("aud", Currency::Aud),
];

/// Clause-introducing constraint keywords.
pub const CONSTRAINT_KEYWORDS: [&str; 7] =
    ["must", "need", "avoid", "no ", "prefer", "nonstop", "non-stop"];

/// Month number for a full name or three-letter abbreviation ("sept" included).
pub fn month_number(token: &str) -> Option<u32> {
    let token = token.trim().trim_end_matches('.').to_lowercase();

    if let Some((_, n)) = MONTHS.iter().find(|(name, _)| *name == token) {
        return Some(*n);
    }
    if token == "sept" {
        return Some(9);
    }
    if token.chars().count() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .find(|(name, _)| name.starts_with(token.as_str()))
        .map(|(_, n)| *n)
}

/// Value of a word number ("one".."twenty").
pub fn word_number(word: &str) -> Option<u32> {
    let word = word.to_lowercase();
    WORD_NUMBERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

/// Currency for a currency word.
pub fn currency_for_word(word: &str) -> Option<Currency> {
    let word = word.to_lowercase();
    CURRENCY_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, c)| *c)
}
