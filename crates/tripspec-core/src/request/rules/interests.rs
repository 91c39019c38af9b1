//! Interest tagging against the closed interest vocabulary.

use std::collections::BTreeSet;

use crate::models::trip::Interest;

use super::patterns::INTEREST_PATTERNS;

/// Categories with at least one whole-word trigger in `text`, sorted.
pub fn extract_interests(text: &str) -> BTreeSet<Interest> {
    INTEREST_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(interest, _)| *interest)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<&'static str> {
        extract_interests(text).iter().map(Interest::as_str).collect()
    }

    #[test]
    fn test_sorted_tags() {
        assert_eq!(
            tags("we love history, food and the museum"),
            vec!["art", "food", "history"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(tags("hiking, a forest park and nature"), vec!["nature"]);
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(tags("a smart barbecue party"), vec!["nightlife"]);
        assert!(tags("Clubhouse particulars").is_empty());
    }

    #[test]
    fn test_case_insensitive_and_phrases() {
        assert_eq!(tags("STREET FOOD tour"), vec!["food"]);
        assert_eq!(tags("Theme Park with the kids"), vec!["family", "nature"]);
    }

    #[test]
    fn test_no_interests() {
        assert!(extract_interests("Trip to Lisbon").is_empty());
    }
}
