//! Rule-based travel request parser.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::trip::{Currency, TripSpec};

use super::TripParser;
use super::rules::{
    BudgetExtractor, DateWindowExtractor, DepartureExtractor, DestinationExtractor,
    DurationExtractor, FieldExtractor, TravelerExtractor, extract_constraints, extract_interests,
};

/// Travel request parser running every field extractor over the same text.
///
/// Extractors are independent: none reads another's result.
#[derive(Debug, Clone)]
pub struct TripRequestParser {
    /// Fixed "today"; `None` reads the local date on each parse.
    reference_date: Option<NaiveDate>,
    /// Currency for bare budget numbers.
    default_currency: Currency,
}

impl TripRequestParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            reference_date: None,
            default_currency: Currency::Usd,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            reference_date: config.reference_date,
            default_currency: config.default_currency,
        }
    }

    /// Set the date used as "today" for year-less dates.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the default budget currency.
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for TripRequestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TripParser for TripRequestParser {
    fn parse(&self, text: &str) -> TripSpec {
        let start = Instant::now();
        let text = text.trim();

        debug!("Parsing trip request from {} characters of text", text.len());

        let mut spec = TripSpec::new(text);

        if let Some(m) = DestinationExtractor.extract(text) {
            debug!(source = %m.source, "destination: {}", m.value);
            spec.destination = Some(m.value);
        }

        if let Some(m) = DepartureExtractor.extract(text) {
            debug!(source = %m.source, "departure: {}", m.value);
            spec.departure_city = Some(m.value);
        }

        if let Some(m) = DateWindowExtractor::new(self.today()).extract(text) {
            debug!(rule = m.rule, source = %m.source, "date window: {:?}", m.value);
            spec.start_date = m.value.start();
            spec.end_date = m.value.end();
            spec.month = m.value.month();
        }

        if let Some(m) = DurationExtractor.extract(text) {
            debug!(rule = m.rule, "duration: {} days", m.value);
            spec.duration_days = Some(m.value);
        }

        if let Some(m) = TravelerExtractor.extract(text) {
            debug!(rule = m.rule, source = %m.source, "travelers: {:?}", m.value);
            spec.travelers = m.value;
        }

        let budget_extractor = BudgetExtractor::new().with_default_currency(self.default_currency);
        if let Some(m) = budget_extractor.extract(text) {
            debug!(rule = m.rule, source = %m.source, "budget: {:?}", m.value);
            spec.budget = m.value;
        }

        spec.interests = extract_interests(text);
        spec.constraints = extract_constraints(text);

        debug!(
            "Parsed trip request in {}us ({} interests, {} constraints)",
            start.elapsed().as_micros(),
            spec.interests.len(),
            spec.constraints.len()
        );

        spec
    }
}
