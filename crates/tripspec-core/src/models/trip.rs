//! Trip specification model produced by the request parser.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured trip specification extracted from one free-form request.
///
/// Every field is always serialized; fields the parser could not recognize
/// are `null` rather than guessed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSpec {
    /// Title-cased destination phrase.
    pub destination: Option<String>,

    /// Title-cased departure city, only from a "from X" phrase.
    pub departure_city: Option<String>,

    /// Travel month (1-12), set only when no explicit date range was found.
    pub month: Option<u32>,

    /// First day of the travel window.
    pub start_date: Option<NaiveDate>,

    /// Last day of the travel window.
    pub end_date: Option<NaiveDate>,

    /// Explicit trip length in days (nights count the same).
    pub duration_days: Option<u32>,

    /// Traveler counts.
    pub travelers: Travelers,

    /// Budget amount or qualitative tier.
    pub budget: Budget,

    /// Canonical interest tags, serialized in sorted order.
    pub interests: BTreeSet<Interest>,

    /// Requirement and preference phrases in first-seen order.
    pub constraints: Vec<String>,

    /// The trimmed original request.
    pub notes: String,
}

/// Adult and child counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travelers {
    /// Number of adults; `None` means unspecified.
    pub adults: Option<u32>,

    /// Number of children.
    pub children: u32,
}

impl Travelers {
    pub fn adults(adults: u32) -> Self {
        Self {
            adults: Some(adults),
            children: 0,
        }
    }

    pub fn with_children(adults: u32, children: u32) -> Self {
        Self {
            adults: Some(adults),
            children,
        }
    }

    /// Total head count, when the adult count is known.
    pub fn total(&self) -> Option<u32> {
        self.adults.map(|a| a + self.children)
    }
}

/// Budget as either an amount with currency or a qualitative tier.
///
/// Use [`Budget::amount`] or [`Budget::tier`]; the two shapes never mix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Positive amount in `currency` units.
    #[serde(with = "amount_number")]
    pub amount: Option<Decimal>,

    /// Currency of `amount`.
    pub currency: Option<Currency>,

    /// Qualitative tier, only when no amount was found.
    pub tag: Option<BudgetTag>,
}

impl Budget {
    /// A concrete amount. Non-positive amounts yield an empty budget.
    pub fn amount(amount: Decimal, currency: Currency) -> Self {
        if amount <= Decimal::ZERO {
            return Self::default();
        }
        Self {
            amount: Some(amount.normalize()),
            currency: Some(currency),
            tag: None,
        }
    }

    pub fn tier(tag: BudgetTag) -> Self {
        Self {
            amount: None,
            currency: None,
            tag: Some(tag),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.tag.is_none()
    }
}

/// Currencies the budget rules recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Krw,
    Aud,
    Cad,
}

impl Currency {
    /// Three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Look up a currency by its code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "INR" => Some(Currency::Inr),
            "JPY" => Some(Currency::Jpy),
            "KRW" => Some(Currency::Krw),
            "AUD" => Some(Currency::Aud),
            "CAD" => Some(Currency::Cad),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Qualitative budget tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTag {
    BudgetFriendly,
    Luxury,
    MidRange,
}

impl BudgetTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTag::BudgetFriendly => "budget-friendly",
            BudgetTag::Luxury => "luxury",
            BudgetTag::MidRange => "mid-range",
        }
    }
}

/// Closed interest vocabulary.
///
/// Variants are declared alphabetically so the derived ordering matches the
/// sorted order of their serialized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Adventure,
    Art,
    Family,
    Food,
    History,
    Nature,
    Nightlife,
    Romance,
    Shopping,
}

impl Interest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Adventure => "adventure",
            Interest::Art => "art",
            Interest::Family => "family",
            Interest::Food => "food",
            Interest::History => "history",
            Interest::Nature => "nature",
            Interest::Nightlife => "nightlife",
            Interest::Romance => "romance",
            Interest::Shopping => "shopping",
        }
    }
}

impl TripSpec {
    /// An empty spec carrying only the trimmed request text.
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..Self::default()
        }
    }

    /// Whether any structured field was recognized.
    pub fn has_structured_fields(&self) -> bool {
        self.destination.is_some()
            || self.departure_city.is_some()
            || self.month.is_some()
            || self.start_date.is_some()
            || self.duration_days.is_some()
            || self.travelers.adults.is_some()
            || !self.budget.is_empty()
            || !self.interests.is_empty()
            || !self.constraints.is_empty()
    }

    /// Human-readable multi-line rendering.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Destination: {}\n",
            self.destination.as_deref().unwrap_or("-")
        ));
        if let Some(from) = &self.departure_city {
            output.push_str(&format!("From: {}\n", from));
        }

        match (self.start_date, self.end_date, self.month) {
            (Some(start), Some(end), _) => {
                output.push_str(&format!("Dates: {} to {}\n", start, end));
            }
            (_, _, Some(month)) => output.push_str(&format!("Month: {}\n", month_name(month))),
            _ => output.push_str("Dates: -\n"),
        }

        if let Some(days) = self.duration_days {
            output.push_str(&format!("Duration: {} days\n", days));
        }

        match self.travelers.adults {
            Some(adults) if self.travelers.children > 0 => output.push_str(&format!(
                "Travelers: {} adults, {} children\n",
                adults, self.travelers.children
            )),
            Some(adults) => output.push_str(&format!("Travelers: {} adults\n", adults)),
            None => output.push_str("Travelers: -\n"),
        }

        match (&self.budget.amount, &self.budget.currency, &self.budget.tag) {
            (Some(amount), Some(currency), _) => {
                output.push_str(&format!("Budget: {} {}\n", amount, currency));
            }
            (_, _, Some(tag)) => output.push_str(&format!("Budget: {}\n", tag.as_str())),
            _ => output.push_str("Budget: -\n"),
        }

        if !self.interests.is_empty() {
            let tags: Vec<&str> = self.interests.iter().map(Interest::as_str).collect();
            output.push_str(&format!("Interests: {}\n", tags.join(", ")));
        }

        for constraint in &self.constraints {
            output.push_str(&format!("  - {}\n", constraint));
        }

        output
    }
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// JSON number form of budget amounts: integers when whole, floats otherwise.
mod amount_number {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(amount: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match amount {
            Some(d) if d.fract().is_zero() => match d.to_i64() {
                Some(n) => serializer.serialize_i64(n),
                None => serializer.serialize_f64(d.to_f64().unwrap_or(f64::MAX)),
            },
            Some(d) => serializer.serialize_f64(d.to_f64().unwrap_or_default()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(n) => Decimal::from_f64(n)
                .map(|d| Some(d.normalize()))
                .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", n))),
            None => Ok(None),
        }
    }
}

/// Status of a parse response; parsing always succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    #[default]
    Success,
}

/// Status of a liveness check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PingStatus {
    #[default]
    Ok,
}

/// Parse result as handed to callers: always a success status plus the spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    pub status: ParseStatus,
    pub spec: TripSpec,
}

impl From<TripSpec> for ParseResponse {
    fn from(spec: TripSpec) -> Self {
        Self {
            status: ParseStatus::Success,
            spec,
        }
    }
}

/// Liveness check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: PingStatus,
    pub message: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self {
            status: PingStatus::Ok,
            message: "tripspec-ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_interest_order_matches_names() {
        let all = [
            Interest::Shopping,
            Interest::Art,
            Interest::Romance,
            Interest::Food,
            Interest::Nightlife,
            Interest::History,
            Interest::Family,
            Interest::Nature,
            Interest::Adventure,
        ];
        let sorted: BTreeSet<Interest> = all.into_iter().collect();
        let names: Vec<&str> = sorted.iter().map(Interest::as_str).collect();

        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_budget_rejects_zero_amount() {
        assert!(Budget::amount(Decimal::ZERO, Currency::Usd).is_empty());
        assert!(Budget::amount(Decimal::from(-5), Currency::Usd).is_empty());
    }

    #[test]
    fn test_budget_serializes_number() {
        let budget = Budget::amount(Decimal::from_str("3000").unwrap(), Currency::Usd);
        let json = serde_json::to_value(&budget).unwrap();

        assert_eq!(json["amount"], serde_json::json!(3000));
        assert_eq!(json["currency"], "USD");
        assert!(json["tag"].is_null());
        assert_eq!(serde_json::to_string(&budget).unwrap(), r#"{"amount":3000,"currency":"USD","tag":null}"#);
    }

    #[test]
    fn test_fractional_budget_serializes_float() {
        let budget = Budget::amount(Decimal::from_str("2500.5").unwrap(), Currency::Eur);
        let json = serde_json::to_value(&budget).unwrap();
        assert_eq!(json["amount"].as_f64(), Some(2500.5));
    }

    #[test]
    fn test_budget_deserializes_numbers() {
        let budget: Budget =
            serde_json::from_str(r#"{"amount":3000,"currency":"USD","tag":null}"#).unwrap();
        assert_eq!(budget, Budget::amount(Decimal::from(3000), Currency::Usd));

        let budget: Budget =
            serde_json::from_str(r#"{"amount":12.5,"currency":"GBP","tag":null}"#).unwrap();
        assert_eq!(budget.amount, Some(Decimal::from_str("12.5").unwrap()));
    }

    #[test]
    fn test_budget_tag_names() {
        let json = serde_json::to_value(Budget::tier(BudgetTag::BudgetFriendly)).unwrap();
        assert_eq!(json["tag"], "budget-friendly");
        assert!(json["amount"].is_null());

        assert_eq!(
            serde_json::to_value(BudgetTag::MidRange).unwrap(),
            serde_json::Value::String("mid-range".to_string())
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
        assert_eq!(Currency::from_code(" KRW "), Some(Currency::Krw));
        assert_eq!(Currency::from_code("XYZ"), None);
    }

    #[test]
    fn test_empty_spec_serializes_every_field() {
        let json = serde_json::to_value(TripSpec::new("hello")).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "destination",
            "departure_city",
            "month",
            "start_date",
            "end_date",
            "duration_days",
            "travelers",
            "budget",
            "interests",
            "constraints",
            "notes",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(json["travelers"]["children"], 0);
        assert!(json["travelers"]["adults"].is_null());
        assert_eq!(json["notes"], "hello");
    }

    #[test]
    fn test_summary_renders_range() {
        let mut spec = TripSpec::new("x");
        spec.destination = Some("Lisbon".to_string());
        spec.start_date = NaiveDate::from_ymd_opt(2025, 10, 5);
        spec.end_date = NaiveDate::from_ymd_opt(2025, 10, 15);
        spec.travelers = Travelers::with_children(3, 2);

        let text = spec.summary();
        assert!(text.contains("Destination: Lisbon"));
        assert!(text.contains("Dates: 2025-10-05 to 2025-10-15"));
        assert!(text.contains("Travelers: 3 adults, 2 children"));
    }

    #[test]
    fn test_ping_response() {
        let json = serde_json::to_value(PingResponse::default()).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "tripspec-ready");
    }

    #[test]
    fn test_parse_response_status() {
        let json = serde_json::to_value(ParseResponse::from(TripSpec::new("x"))).unwrap();
        assert_eq!(json["status"], "success");

        let wrong: Result<ParseResponse, _> =
            serde_json::from_value(serde_json::json!({ "status": "ok", "spec": json["spec"] }));
        assert!(wrong.is_err());
    }
}
