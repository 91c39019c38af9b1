//! Destination and departure city extraction.

use regex::Regex;

use super::patterns::{DEPARTURE, DEPARTURE_STOP, DESTINATION, DESTINATION_STOP};
use super::{ExtractionMatch, FieldExtractor, normalize_whitespace, title_case};

/// Destination extractor ("trip to X", "visit X").
pub struct DestinationExtractor;

/// Departure city extractor ("from X").
pub struct DepartureExtractor;

impl FieldExtractor for DestinationExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        extract_place(text, &DESTINATION, &DESTINATION_STOP, "destination")
    }
}

impl FieldExtractor for DepartureExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        extract_place(text, &DEPARTURE, &DEPARTURE_STOP, "departure")
    }
}

/// Extract the destination phrase, title-cased.
pub fn extract_destination(text: &str) -> Option<String> {
    DestinationExtractor.extract(text).map(|m| m.value)
}

/// Extract the departure city, title-cased.
pub fn extract_departure(text: &str) -> Option<String> {
    DepartureExtractor.extract(text).map(|m| m.value)
}

/// First anchored phrase, cut at the first boundary word.
///
/// The anchor pattern captures up to the next punctuation; the stop pattern
/// trims it further at words like "for" or "in".
fn extract_place(
    text: &str,
    anchor: &Regex,
    stop: &Regex,
    rule: &'static str,
) -> Option<ExtractionMatch<String>> {
    let caps = anchor.captures(text)?;
    let phrase = caps.get(1)?;

    let raw = match stop.find(phrase.as_str()) {
        Some(boundary) => &phrase.as_str()[..boundary.start()],
        None => phrase.as_str(),
    };

    let cleaned = normalize_whitespace(raw);
    if cleaned.is_empty() {
        return None;
    }

    let start = phrase.start();
    Some(ExtractionMatch::new(title_case(&cleaned), rule, raw).with_position(start, start + raw.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_stops_at_boundary_word() {
        assert_eq!(
            extract_destination("Family of 5 trip to Lisbon for 6 days in October"),
            Some("Lisbon".to_string())
        );
        assert_eq!(
            extract_destination("We want to fly to New York with the kids"),
            Some("New York".to_string())
        );
        assert_eq!(
            extract_destination("Planning to visit Hong Kong in May"),
            Some("Hong Kong".to_string())
        );
    }

    #[test]
    fn test_destination_stops_at_punctuation() {
        assert_eq!(
            extract_destination("Travel to Kyoto, budget 2000 usd"),
            Some("Kyoto".to_string())
        );
        assert_eq!(extract_destination("Trip to Rome."), Some("Rome".to_string()));
    }

    #[test]
    fn test_destination_skips_lowercase_phrases() {
        assert_eq!(
            extract_destination("we would love to go to Paris"),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn test_destination_title_cases() {
        assert_eq!(
            extract_destination("trip to SAN francisco on friday"),
            Some("San Francisco".to_string())
        );
    }

    #[test]
    fn test_destination_requires_whole_word_anchor() {
        assert_eq!(extract_destination("photo Album"), None);
        assert_eq!(extract_destination("somewhere warm please"), None);
    }

    #[test]
    fn test_departure() {
        assert_eq!(
            extract_departure("Flying from New York to Lisbon"),
            Some("New York".to_string())
        );
        assert_eq!(
            extract_departure("from Chicago for a week"),
            Some("Chicago".to_string())
        );
        assert_eq!(extract_departure("Trip to Lisbon"), None);
    }

    #[test]
    fn test_match_records_source() {
        let m = DestinationExtractor.extract("trip to Lisbon for 6 days").unwrap();
        assert_eq!(m.source, "Lisbon");
        assert_eq!(m.position, Some((8, 14)));
        assert_eq!(m.rule, "destination");
    }
}
