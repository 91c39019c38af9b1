//! Travel date window resolution.
//!
//! Rules run in a fixed cascade. Each rule either produces a validated
//! window or declines, in which case the next rule is tried:
//!
//! 1. ISO range: `2025-10-05 to 2025-10-15`
//! 2. Month-first range: `Oct 5th to 15th, 2025`, `Oct 5 to Nov 2`
//! 3. Day range before month: `5-15 October 2025`
//! 4. `between Oct 5 and 15, 2025`
//! 5. Bare month: `in October`

use chrono::{Datelike, NaiveDate};
use regex::Captures;
use tracing::trace;

use super::lexicon::{AMBIGUOUS_MONTH_WORDS, month_number};
use super::patterns::{DATE_BETWEEN, DATE_DAY_RANGE, DATE_ISO_RANGE, DATE_MONTH_RANGE, MONTH_MENTION};
use super::{ExtractionMatch, FieldExtractor};

/// Resolved travel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// Explicit first and last day.
    Range { start: NaiveDate, end: NaiveDate },
    /// Only a month was mentioned.
    Month(u32),
}

impl DateWindow {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            DateWindow::Range { start, .. } => Some(*start),
            DateWindow::Month(_) => None,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            DateWindow::Range { end, .. } => Some(*end),
            DateWindow::Month(_) => None,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match self {
            DateWindow::Range { .. } => None,
            DateWindow::Month(m) => Some(*m),
        }
    }
}

type DateRule = fn(&DateWindowExtractor, &str) -> Option<ExtractionMatch<DateWindow>>;

/// Date window extractor anchored to a reference date.
///
/// The reference date supplies the year for phrases that omit it.
pub struct DateWindowExtractor {
    reference_date: NaiveDate,
}

impl DateWindowExtractor {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    const RULES: [(&'static str, DateRule); 5] = [
        ("iso_range", Self::iso_range),
        ("month_range", Self::month_range),
        ("day_range", Self::day_range),
        ("between", Self::between),
        ("bare_month", Self::bare_month),
    ];

    fn iso_range(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        let caps = DATE_ISO_RANGE.captures(text)?;
        let start = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(&caps[2], "%Y-%m-%d").ok()?;

        Some(window_match(DateWindow::Range { start, end }, "iso_range", &caps))
    }

    fn month_range(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        let caps = DATE_MONTH_RANGE.captures(text)?;

        let start_month = month_number(&caps[1])?;
        let end_month = match caps.get(4) {
            Some(m) => month_number(m.as_str())?,
            None => start_month,
        };
        let start_day = parse_day(&caps[2])?;
        let end_day = parse_day(&caps[5])?;

        let explicit_start_year = parse_year(caps.get(3))?;
        let explicit_end_year = parse_year(caps.get(6))?;

        // A single trailing year ("Oct 5 to 15, 2025") covers both ends
        let start_year = explicit_start_year
            .or(explicit_end_year)
            .unwrap_or_else(|| self.reference_date.year());
        let end_year = explicit_end_year.unwrap_or(start_year);

        let mut start = NaiveDate::from_ymd_opt(start_year, start_month, start_day)?;
        let mut end = NaiveDate::from_ymd_opt(end_year, end_month, end_day)?;

        // "Dec 28 to Jan 3" crosses a year boundary
        if end < start && end_month < start_month {
            match (explicit_start_year, explicit_end_year) {
                (_, None) => end = NaiveDate::from_ymd_opt(end_year + 1, end_month, end_day)?,
                (None, Some(_)) => {
                    start = NaiveDate::from_ymd_opt(start_year - 1, start_month, start_day)?
                }
                (Some(_), Some(_)) => {}
            }
        }

        Some(window_match(DateWindow::Range { start, end }, "month_range", &caps))
    }

    fn day_range(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        let caps = DATE_DAY_RANGE.captures(text)?;

        let month = month_number(&caps[3])?;
        let year = self.year_or_reference(caps.get(4))?;
        let start = NaiveDate::from_ymd_opt(year, month, parse_day(&caps[1])?)?;
        let end = NaiveDate::from_ymd_opt(year, month, parse_day(&caps[2])?)?;

        Some(window_match(DateWindow::Range { start, end }, "day_range", &caps))
    }

    fn between(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        let caps = DATE_BETWEEN.captures(text)?;

        let month = month_number(&caps[1])?;
        let year = self.year_or_reference(caps.get(4))?;
        let start = NaiveDate::from_ymd_opt(year, month, parse_day(&caps[2])?)?;
        let end = NaiveDate::from_ymd_opt(year, month, parse_day(&caps[3])?)?;

        Some(window_match(DateWindow::Range { start, end }, "between", &caps))
    }

    fn bare_month(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        MONTH_MENTION.captures_iter(text).find_map(|caps| {
            let token = caps.get(2)?;
            let word = token.as_str();
            let has_preposition = caps.get(1).is_some();
            let capitalized = word.chars().next().is_some_and(char::is_uppercase);

            if !has_preposition
                && !capitalized
                && AMBIGUOUS_MONTH_WORDS.contains(&word.to_lowercase().as_str())
            {
                return None;
            }

            let month = month_number(word)?;
            Some(window_match(DateWindow::Month(month), "bare_month", &caps))
        })
    }

    fn year_or_reference(&self, year: Option<regex::Match<'_>>) -> Option<i32> {
        Some(parse_year(year)?.unwrap_or_else(|| self.reference_date.year()))
    }
}

impl FieldExtractor for DateWindowExtractor {
    type Output = DateWindow;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<DateWindow>> {
        for (name, rule) in Self::RULES {
            if let Some(found) = rule(self, text) {
                return Some(found);
            }
            trace!(rule = name, "date rule declined");
        }
        None
    }
}

fn window_match(window: DateWindow, rule: &'static str, caps: &Captures<'_>) -> ExtractionMatch<DateWindow> {
    match caps.get(0) {
        Some(m) => ExtractionMatch::from_regex(window, rule, m),
        None => ExtractionMatch::new(window, rule, ""),
    }
}

/// Optional year group: `Some(None)` when absent, `None` when unparsable.
fn parse_year(year: Option<regex::Match<'_>>) -> Option<Option<i32>> {
    match year {
        Some(y) => y.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

/// Day-of-month digits with any ordinal suffix removed.
fn parse_day(s: &str) -> Option<u32> {
    let digits = s
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic());
    digits.parse().ok()
}
