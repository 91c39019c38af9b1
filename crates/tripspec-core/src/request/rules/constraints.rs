//! Constraint phrase extraction ("must have wifi", "no red-eye flights").

use std::collections::HashSet;

use super::normalize_whitespace;
use super::patterns::CONSTRAINT_PATTERNS;

/// Keyword clauses, deduplicated case-insensitively.
///
/// Clauses are grouped by keyword in keyword-table order, and appear in text order within
/// a keyword. Each clause runs from its keyword to the next comma, period or semicolon.
/// Clauses that nest ("must avoid X" also yields "avoid X") are kept as separate entries.
pub fn extract_constraints(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    CONSTRAINT_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text))
        .map(|m| normalize_whitespace(m.as_str()))
        .filter(|clause| !clause.is_empty())
        .filter(|clause| seen.insert(clause.to_lowercase()))
        .collect()
}
