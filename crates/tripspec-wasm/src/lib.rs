//! WASM bindings for the trip request parser.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use tripspec_core::models::config::parse_reference_date;
use tripspec_core::{Currency, TripParser as _, TripRequestParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Liveness check.
#[wasm_bindgen]
pub fn ping() -> Result<JsValue, JsValue> {
    to_js(&tripspec_core::ping())
}

/// Parse a travel request, resolving year-less dates against the host's today.
#[wasm_bindgen]
pub fn parse_trip_request(text: &str) -> Result<JsValue, JsValue> {
    let parser = TripRequestParser::new().with_reference_date(today());
    to_js(&parser.parse_response(text))
}

/// Parse a travel request against a fixed `YYYY-MM-DD` reference date.
#[wasm_bindgen]
pub fn parse_trip_request_on(text: &str, reference_date: &str) -> Result<JsValue, JsValue> {
    let date = parse_reference_date(reference_date).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let parser = TripRequestParser::new().with_reference_date(date);
    to_js(&parser.parse_response(text))
}

/// Configurable parser class for browser use.
#[wasm_bindgen]
pub struct TripParser {
    parser: TripRequestParser,
    reference_date: Option<NaiveDate>,
}

#[wasm_bindgen]
impl TripParser {
    /// Create a new parser with USD as the default currency.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: TripRequestParser::new(),
            reference_date: None,
        }
    }

    /// Pin "today" to a `YYYY-MM-DD` date.
    #[wasm_bindgen]
    pub fn set_reference_date(&mut self, date: &str) -> Result<(), JsValue> {
        let date = parse_reference_date(date).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.reference_date = Some(date);
        Ok(())
    }

    /// Set the currency used for bare budget numbers ("EUR", "GBP", ...).
    #[wasm_bindgen]
    pub fn set_default_currency(&mut self, code: &str) -> Result<(), JsValue> {
        let currency = Currency::from_code(code)
            .ok_or_else(|| JsValue::from_str(&format!("unsupported currency: {}", code)))?;
        self.parser = self.parser.clone().with_default_currency(currency);
        Ok(())
    }

    /// Parse a request into the response envelope.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let parser = self
            .parser
            .clone()
            .with_reference_date(self.reference_date.unwrap_or_else(today));
        to_js(&parser.parse_response(text))
    }
}

impl Default for TripParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's local date from the JS host clock.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Serialize with `null` for absent fields and plain objects for maps.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
