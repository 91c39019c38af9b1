//! Budget extraction and amount normalization.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::trip::{Budget, BudgetTag, Currency};

use super::lexicon::currency_for_word;
use super::patterns::{
    AMOUNT_WITH_CURRENCY_WORD, BUDGET_NUMBER, CURRENCY_SIGN_AMOUNTS, TIER_BUDGET_FRIENDLY,
    TIER_LUXURY, TIER_MID_RANGE,
};
use super::{ExtractionMatch, FieldExtractor};

/// Budget extractor.
///
/// Amount rules are tried before qualitative tiers, so a spec never carries
/// both an amount and a tag.
pub struct BudgetExtractor {
    default_currency: Currency,
}

impl BudgetExtractor {
    pub fn new() -> Self {
        Self {
            default_currency: Currency::Usd,
        }
    }

    /// Currency for bare numbers after "budget".
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    fn signed_amount(&self, text: &str) -> Option<ExtractionMatch<Budget>> {
        CURRENCY_SIGN_AMOUNTS.iter().find_map(|(currency, re)| {
            let caps = re.captures(text)?;
            let amount = normalize_amount(&caps[1]);
            if amount.is_zero() {
                return None;
            }
            Some(ExtractionMatch::from_regex(
                Budget::amount(amount, *currency),
                "currency_sign",
                caps.get(0)?,
            ))
        })
    }

    fn worded_amount(&self, text: &str) -> Option<ExtractionMatch<Budget>> {
        let caps = AMOUNT_WITH_CURRENCY_WORD.captures(text)?;
        let amount = normalize_amount(&caps[1]);
        if amount.is_zero() {
            return None;
        }
        let currency = currency_for_word(&caps[2]).unwrap_or(self.default_currency);
        Some(ExtractionMatch::from_regex(
            Budget::amount(amount, currency),
            "currency_word",
            caps.get(0)?,
        ))
    }

    fn labeled_amount(&self, text: &str) -> Option<ExtractionMatch<Budget>> {
        let caps = BUDGET_NUMBER.captures(text)?;
        let amount = normalize_amount(&caps[1]);
        if amount.is_zero() {
            return None;
        }
        Some(ExtractionMatch::from_regex(
            Budget::amount(amount, self.default_currency),
            "budget_label",
            caps.get(0)?,
        ))
    }

    fn tier(&self, text: &str) -> Option<ExtractionMatch<Budget>> {
        [
            (&*TIER_BUDGET_FRIENDLY, BudgetTag::BudgetFriendly),
            (&*TIER_LUXURY, BudgetTag::Luxury),
            (&*TIER_MID_RANGE, BudgetTag::MidRange),
        ]
        .into_iter()
        .find_map(|(re, tag)| {
            re.find(text)
                .map(|m| ExtractionMatch::from_regex(Budget::tier(tag), "tier", m))
        })
    }
}

impl Default for BudgetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BudgetExtractor {
    type Output = Budget;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<Budget>> {
        self.signed_amount(text)
            .or_else(|| self.worded_amount(text))
            .or_else(|| self.labeled_amount(text))
            .or_else(|| self.tier(text))
    }
}

/// Extract a budget with USD as the default currency.
pub fn extract_budget(text: &str) -> Budget {
    BudgetExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

/// Normalize a numeric budget token ("3k", "3,000", "2.5 K").
///
/// Separators and whitespace are dropped and a trailing "k" multiplies by
/// 1000. Unparsable text yields zero, which callers treat as no amount.
pub fn normalize_amount(s: &str) -> Decimal {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>()
        .to_lowercase();

    let (digits, multiplier) = match cleaned.strip_suffix('k') {
        Some(rest) => (rest, Decimal::from(1000)),
        None => (cleaned.as_str(), Decimal::ONE),
    };

    Decimal::from_str(digits)
        .ok()
        .and_then(|d| d.checked_mul(multiplier))
        .map(|d| d.normalize())
        .unwrap_or(Decimal::ZERO)
}
