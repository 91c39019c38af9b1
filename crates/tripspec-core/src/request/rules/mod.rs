//! Rule-based field extractors for travel requests.

pub mod budget;
pub mod constraints;
pub mod dates;
pub mod duration;
pub mod interests;
pub mod lexicon;
pub mod patterns;
pub mod places;
pub mod travelers;

pub use budget::{BudgetExtractor, extract_budget, normalize_amount};
pub use constraints::extract_constraints;
pub use dates::{DateWindow, DateWindowExtractor};
pub use duration::{DurationExtractor, extract_duration_days};
pub use interests::extract_interests;
pub use places::{DepartureExtractor, DestinationExtractor, extract_departure, extract_destination};
pub use travelers::{TravelerExtractor, extract_travelers};

/// Trait for single-valued field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;
}

/// An extracted value together with the text that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that matched.
    pub rule: &'static str,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, rule: &'static str, source: impl Into<String>) -> Self {
        Self {
            value,
            rule,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    /// Build a match from a regex match, recording its span.
    pub fn from_regex(value: T, rule: &'static str, m: regex::Match<'_>) -> Self {
        Self::new(value, rule, m.as_str()).with_position(m.start(), m.end())
    }
}

/// Trim and collapse runs of whitespace to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
