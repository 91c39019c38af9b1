//! Traveler count resolution.
//!
//! Rules in precedence order, the first hit wins:
//! "family of N", "N adults/people", "four people", "for two", "couple"/"honeymoon".

use crate::models::trip::Travelers;

use super::lexicon::word_number;
use super::patterns::{COUNT_ADULTS, COUPLE, FAMILY_OF, FOR_COUNT, WORD_ADULTS};
use super::{ExtractionMatch, FieldExtractor};

/// Adults assumed for "for N" when N is not a usable count.
const DEFAULT_PARTY_ADULTS: u32 = 2;

/// Traveler count extractor.
pub struct TravelerExtractor;

impl TravelerExtractor {
    fn family_of(text: &str) -> Option<ExtractionMatch<Travelers>> {
        let caps = FAMILY_OF.captures(text)?;
        let total = parse_count(&caps[1])?;

        let travelers = if total >= 3 {
            let adults = (total - 2).max(2);
            Travelers::with_children(adults, total - adults)
        } else {
            Travelers::adults(total)
        };
        Some(ExtractionMatch::from_regex(travelers, "family_of", caps.get(0)?))
    }

    fn counted_adults(text: &str) -> Option<ExtractionMatch<Travelers>> {
        let caps = COUNT_ADULTS.captures(text)?;
        let adults = parse_count(&caps[1])?;
        Some(ExtractionMatch::from_regex(Travelers::adults(adults), "counted_adults", caps.get(0)?))
    }

    fn worded_adults(text: &str) -> Option<ExtractionMatch<Travelers>> {
        WORD_ADULTS.iter().find_map(|(adults, re)| {
            re.find(text)
                .map(|m| ExtractionMatch::from_regex(Travelers::adults(*adults), "worded_adults", m))
        })
    }

    fn for_party(text: &str) -> Option<ExtractionMatch<Travelers>> {
        // "for 6 days" is a duration, not a party size
        let caps = FOR_COUNT
            .captures_iter(text)
            .find(|caps| caps.get(2).is_none())?;

        let adults = parse_count(&caps[1]).unwrap_or(DEFAULT_PARTY_ADULTS);
        Some(ExtractionMatch::from_regex(Travelers::adults(adults), "for_party", caps.get(0)?))
    }

    fn couple(text: &str) -> Option<ExtractionMatch<Travelers>> {
        COUPLE
            .find(text)
            .map(|m| ExtractionMatch::from_regex(Travelers::adults(2), "couple", m))
    }
}

impl FieldExtractor for TravelerExtractor {
    type Output = Travelers;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Travelers>> {
        Self::family_of(text)
            .or_else(|| Self::counted_adults(text))
            .or_else(|| Self::worded_adults(text))
            .or_else(|| Self::for_party(text))
            .or_else(|| Self::couple(text))
    }
}

/// Resolve traveler counts; unmatched input yields unspecified adults and no children.
pub fn extract_travelers(text: &str) -> Travelers {
    TravelerExtractor
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

/// Positive count from digits or a word number.
fn parse_count(token: &str) -> Option<u32> {
    token
        .parse::<u32>()
        .ok()
        .or_else(|| word_number(token))
        .filter(|n| *n > 0)
}
