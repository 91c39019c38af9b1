//! Compiled regex patterns for travel request extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::trip::{Currency, Interest};

use super::lexicon::{CONSTRAINT_KEYWORDS, CURRENCY_SIGNS, INTEREST_KEYWORDS, WORD_NUMBERS};

/// Month names and abbreviations; longer forms first.
const MONTH: &str = "january|february|march|april|may|june|july|august|september|october|\
                     november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

/// Words joining the two ends of a range.
const RANGE_SEP: &str = r"(?:to|through|thru|until|till|up\s*-?\s*to|-|–|—)";

/// Numeric budget token: digits with optional separators, decimals and a "k" suffix.
const NUMBER: &str = r"\d[\d,]*(?:\.\d+)?(?:\s*k\b)?";

/// Case-insensitive whole-word alternation over a word list.
fn word_alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"(?i)\b(?:{})\b", escaped.join("|"))
}

fn number_words() -> String {
    WORD_NUMBERS
        .iter()
        .map(|(w, _)| *w)
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    // Destination / departure anchors
    pub static ref DESTINATION: Regex = Regex::new(
        r"(?i)\b(?:trip\s+to|travel\s+to|fly\s+to|to|visit)\s+((?-i:\p{Lu})[\w\s-]*)"
    ).unwrap();

    pub static ref DESTINATION_STOP: Regex = Regex::new(
        r"(?i)\s+(?:for|with|in|on|by)\b"
    ).unwrap();

    pub static ref DEPARTURE: Regex = Regex::new(
        r"(?i)\bfrom\s+((?-i:\p{Lu})[\w\s-]*)"
    ).unwrap();

    pub static ref DEPARTURE_STOP: Regex = Regex::new(
        r"(?i)\s+(?:to|for)\b"
    ).unwrap();

    // Date windows, in cascade order
    pub static ref DATE_ISO_RANGE: Regex = Regex::new(
        r"(?i)\b(\d{4}-\d{2}-\d{2})\s*(?:to|-|–|—)\s*(\d{4}-\d{2}-\d{2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_RANGE: Regex = Regex::new(&format!(
        r"(?i)\b({m})\b\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:\s*,?\s*(\d{{4}})\b)?\s*{sep}\s*(?:({m})\b\.?\s+)?(\d{{1,2}})(?:st|nd|rd|th)?\b(?:\s*,?\s*(\d{{4}})\b)?",
        m = MONTH,
        sep = RANGE_SEP,
    )).unwrap();

    pub static ref DATE_DAY_RANGE: Regex = Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s*{sep}\s*(\d{{1,2}})(?:st|nd|rd|th)?\s*(?:of\s+)?({m})\b\.?(?:\s*,?\s*(\d{{4}})\b)?",
        m = MONTH,
        sep = RANGE_SEP,
    )).unwrap();

    pub static ref DATE_BETWEEN: Regex = Regex::new(&format!(
        r"(?i)\bbetween\s+({m})\b\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\s+and\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:\s*,?\s*(\d{{4}})\b)?",
        m = MONTH,
    )).unwrap();

    pub static ref MONTH_MENTION: Regex = Regex::new(&format!(
        r"(?i)\b(?:(in|during|of|by|this|next|until|from)\s+)?({m})\b",
        m = MONTH,
    )).unwrap();

    // Duration
    pub static ref DURATION_DIGITS: Regex = Regex::new(
        r"(?i)\b(\d{1,3})\s*(?:-\s*)?(?:days?|nights?)\b"
    ).unwrap();

    /// One pattern per word number, ascending by value.
    pub static ref DURATION_WORDS: Vec<(u32, Regex)> = WORD_NUMBERS
        .iter()
        .map(|(word, n)| {
            let re = Regex::new(&format!(r"(?i)\b{word}\s*(?:-\s*)?(?:days?|nights?)\b")).unwrap();
            (*n, re)
        })
        .collect();

    // Travelers
    pub static ref FAMILY_OF: Regex = Regex::new(&format!(
        r"(?i)\bfamily\s+of\s+(\d+|{words})\b",
        words = number_words(),
    )).unwrap();

    pub static ref COUNT_ADULTS: Regex = Regex::new(
        r"(?i)\b(\d+)\s+(?:adults?|people|persons?)\b"
    ).unwrap();

    /// One pattern per word number, ascending by value.
    pub static ref WORD_ADULTS: Vec<(u32, Regex)> = WORD_NUMBERS
        .iter()
        .map(|(word, n)| {
            let re = Regex::new(&format!(r"(?i)\b{word}\s+(?:people|persons|adults?)\b")).unwrap();
            (*n, re)
        })
        .collect();

    pub static ref FOR_COUNT: Regex = Regex::new(
        r"(?i)\bfor\s+(one|two|three|four|five|six|\d+)\b(\s*-?\s*(?:days?|nights?|weeks?|months?|years?)\b)?"
    ).unwrap();

    pub static ref COUPLE: Regex = Regex::new(
        r"(?i)\b(?:couple|honeymoon)\b"
    ).unwrap();

    // Budget
    /// One pattern per currency sign, in lexicon order.
    pub static ref CURRENCY_SIGN_AMOUNTS: Vec<(Currency, Regex)> = CURRENCY_SIGNS
        .iter()
        .map(|(sign, currency)| {
            let re = Regex::new(&format!(r"(?i){}\s*({NUMBER})", regex::escape(sign))).unwrap();
            (*currency, re)
        })
        .collect();

    pub static ref AMOUNT_WITH_CURRENCY_WORD: Regex = Regex::new(&format!(
        r"(?i)\b({NUMBER})\s*(usd|eur|gbp|inr|jpy|cad|aud|dollars?|euros?|pounds?|rupees?|yen)\b"
    )).unwrap();

    pub static ref BUDGET_NUMBER: Regex = Regex::new(&format!(
        r"(?i)\bbudget(?:\s+(?:of|around|about|approximately|roughly|under|up\s+to)|\s*[:=])?\s*({NUMBER})"
    )).unwrap();

    pub static ref TIER_BUDGET_FRIENDLY: Regex = Regex::new(
        r"(?i)\b(?:budget[- ]?friendly|cheap|affordable|low[- ]?cost)\b"
    ).unwrap();

    pub static ref TIER_LUXURY: Regex = Regex::new(
        r"(?i)\b(?:luxury|luxurious|high[- ]?end|premium|5[- ]?star|five[- ]?star)\b"
    ).unwrap();

    pub static ref TIER_MID_RANGE: Regex = Regex::new(
        r"(?i)\b(?:mid[- ]?range|moderate|standard)\b"
    ).unwrap();

    // Interests
    /// One whole-word pattern per category covering all of its trigger words.
    pub static ref INTEREST_PATTERNS: Vec<(Interest, Regex)> = INTEREST_KEYWORDS
        .iter()
        .map(|(interest, words)| (*interest, Regex::new(&word_alternation(words)).unwrap()))
        .collect();

    // Constraints
    /// Keyword followed by the rest of its clause.
    pub static ref CONSTRAINT_PATTERNS: Vec<Regex> = CONSTRAINT_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)\b{}\b[^.,;]*", regex::escape(kw))).unwrap())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        lazy_static::initialize(&DESTINATION);
        lazy_static::initialize(&DATE_MONTH_RANGE);
        lazy_static::initialize(&DATE_DAY_RANGE);
        lazy_static::initialize(&DATE_BETWEEN);
        lazy_static::initialize(&MONTH_MENTION);
        lazy_static::initialize(&FAMILY_OF);
        lazy_static::initialize(&AMOUNT_WITH_CURRENCY_WORD);
        lazy_static::initialize(&BUDGET_NUMBER);

        assert_eq!(DURATION_WORDS.len(), WORD_NUMBERS.len());
        assert_eq!(WORD_ADULTS.len(), WORD_NUMBERS.len());
        assert_eq!(CURRENCY_SIGN_AMOUNTS.len(), CURRENCY_SIGNS.len());
        assert_eq!(INTEREST_PATTERNS.len(), INTEREST_KEYWORDS.len());
        assert_eq!(CONSTRAINT_PATTERNS.len(), CONSTRAINT_KEYWORDS.len());
    }

    #[test]
    fn test_month_range_shape() {
        let caps = DATE_MONTH_RANGE.captures("Oct 5th to 15th, 2025").unwrap();
        assert_eq!(&caps[1], "Oct");
        assert_eq!(&caps[2], "5");
        assert!(caps.get(3).is_none());
        assert!(caps.get(4).is_none());
        assert_eq!(&caps[5], "15");
        assert_eq!(&caps[6], "2025");
    }

    #[test]
    fn test_destination_requires_capital() {
        assert!(DESTINATION.captures("want to go there").is_none());
        let caps = DESTINATION.captures("trip to Lisbon for 6 days").unwrap();
        assert!(caps[1].starts_with("Lisbon"));
    }
}
