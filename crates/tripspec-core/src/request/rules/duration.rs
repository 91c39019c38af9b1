//! Trip length extraction ("6 days", "four-day", "3 nights").
//!
//! Nights and days count the same; no conversion is applied.

use super::patterns::{DURATION_DIGITS, DURATION_WORDS};
use super::{ExtractionMatch, FieldExtractor};

/// Duration extractor.
pub struct DurationExtractor;

impl FieldExtractor for DurationExtractor {
    type Output = u32;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<u32>> {
        if let Some(caps) = DURATION_DIGITS.captures(text) {
            let days: u32 = caps[1].parse().unwrap_or(0);
            if days > 0 {
                return caps
                    .get(0)
                    .map(|m| ExtractionMatch::from_regex(days, "duration_digits", m));
            }
        }

        DURATION_WORDS.iter().find_map(|(days, re)| {
            re.find(text)
                .map(|m| ExtractionMatch::from_regex(*days, "duration_words", m))
        })
    }
}

/// Extract the trip length in days.
pub fn extract_duration_days(text: &str) -> Option<u32> {
    DurationExtractor.extract(text).map(|m| m.value)
}
