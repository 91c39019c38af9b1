//! End-to-end behaviour of the request parser over whole sentences.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use tripspec_core::{
    Budget, BudgetTag, Currency, Interest, TripParser, TripRequestParser, TripSpec, Travelers,
    parse_trip_request, ping,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse(text: &str) -> TripSpec {
    TripRequestParser::new()
        .with_reference_date(date(2025, 3, 1))
        .parse(text)
}

#[test]
fn test_full_family_request() {
    let text = "Family of 5 trip to Lisbon for 6 days in October, budget around $3k, \
                we love food and history. Must have a pool, no red-eye flights";

    let expected = TripSpec {
        destination: Some("Lisbon".to_string()),
        departure_city: None,
        month: Some(10),
        start_date: None,
        end_date: None,
        duration_days: Some(6),
        travelers: Travelers::with_children(3, 2),
        budget: Budget::amount(Decimal::from(3000), Currency::Usd),
        interests: [Interest::Family, Interest::Food, Interest::History]
            .into_iter()
            .collect(),
        constraints: vec![
            "Must have a pool".to_string(),
            "no red-eye flights".to_string(),
        ],
        notes: text.to_string(),
    };

    assert_eq!(parse(text), expected);
}

#[test]
fn test_dated_couple_request() {
    let spec = parse(
        "We're a couple flying from San Francisco to Tokyo on Oct 5th to 15th, 2025. \
         Luxury hotels, prefer nonstop",
    );

    assert_eq!(spec.destination.as_deref(), Some("Tokyo"));
    assert_eq!(spec.departure_city.as_deref(), Some("San Francisco"));
    assert_eq!(spec.start_date, Some(date(2025, 10, 5)));
    assert_eq!(spec.end_date, Some(date(2025, 10, 15)));
    assert_eq!(spec.month, None);
    assert_eq!(spec.travelers, Travelers::adults(2));
    assert_eq!(spec.budget, Budget::tier(BudgetTag::Luxury));
    assert_eq!(spec.constraints, vec!["prefer nonstop", "nonstop"]);
}

#[test]
fn test_equivalent_date_phrasings() {
    let expected = (Some(date(2025, 10, 5)), Some(date(2025, 10, 15)));

    for text in [
        "Oct 5th to 15th, 2025",
        "5-15 October 2025",
        "between Oct 5 and 15, 2025",
        "2025-10-05 to 2025-10-15",
    ] {
        let spec = parse(text);
        assert_eq!((spec.start_date, spec.end_date), expected, "{text}");
        assert_eq!(spec.month, None, "{text}");
    }
}

#[test]
fn test_month_only() {
    let spec = parse("Somewhere sunny in October");
    assert_eq!(spec.month, Some(10));
    assert_eq!(spec.start_date, None);
    assert_eq!(spec.end_date, None);
}

#[test]
fn test_equivalent_amounts() {
    for text in ["budget around $3k", "about 3,000 usd", "budget: 3000"] {
        assert_eq!(
            parse(text).budget,
            Budget::amount(Decimal::from(3000), Currency::Usd),
            "{text}"
        );
    }
}

#[test]
fn test_equivalent_durations() {
    assert_eq!(parse("a four-day escape").duration_days, Some(4));
    assert_eq!(parse("4 days away").duration_days, Some(4));
    assert_eq!(parse("3 nights in Oslo").duration_days, Some(3));
}

#[test]
fn test_traveler_heuristics() {
    assert_eq!(parse("family of 5").travelers, Travelers::with_children(3, 2));
    assert_eq!(parse("family of 2").travelers, Travelers::adults(2));
    assert_eq!(parse("a couple").travelers, Travelers::adults(2));
    assert_eq!(parse("Trip to Rome").travelers.adults, None);
}

#[test]
fn test_no_anchors() {
    let text = "  just thinking out loud here  ";
    assert_eq!(parse(text), TripSpec::new(text.trim()));
}

#[test]
fn test_constraints_are_unique_ignoring_case() {
    let spec = parse("Must have wifi, must have WIFI; avoid stairs. Avoid Stairs");
    assert_eq!(spec.constraints, vec!["Must have wifi", "avoid stairs"]);
}

#[test]
fn test_interests_sorted_without_duplicates() {
    let spec = parse("museum, hiking, nature walks, museum again and a bar");
    let tags: Vec<&str> = spec.interests.iter().map(Interest::as_str).collect();
    assert_eq!(tags, vec!["art", "nature", "nightlife"]);
}

#[test]
fn test_serialized_output_is_idempotent() {
    let parser = TripRequestParser::new().with_reference_date(date(2025, 3, 1));
    let text = "Trip to Kyoto for two, 7 nights in April, budget of ¥200,000, temples and food";

    let first = serde_json::to_string(&parser.parse_response(text)).unwrap();
    let second = serde_json::to_string(&parser.parse_response(text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_response_json_shape() {
    let response = TripRequestParser::new()
        .with_reference_date(date(2025, 3, 1))
        .parse_response("Family of 4 trip to Paris, €2,500, cheap eats");
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["spec"]["destination"], "Paris");
    assert_eq!(json["spec"]["travelers"]["adults"], 2);
    assert_eq!(json["spec"]["travelers"]["children"], 2);
    assert_eq!(json["spec"]["budget"]["amount"], 2500);
    assert_eq!(json["spec"]["budget"]["currency"], "EUR");
    assert!(json["spec"]["budget"]["tag"].is_null());
    assert!(json["spec"]["month"].is_null());
    assert!(json["spec"]["start_date"].is_null());
    assert_eq!(json["spec"]["interests"], serde_json::json!(["family"]));
}

#[test]
fn test_dates_serialize_as_iso() {
    let json = serde_json::to_value(parse("2025-10-05 to 2025-10-15")).unwrap();
    assert_eq!(json["start_date"], "2025-10-05");
    assert_eq!(json["end_date"], "2025-10-15");
}

#[test]
fn test_module_level_helpers() {
    let response = parse_trip_request("Visit Berlin");
    assert_eq!(response.spec.destination.as_deref(), Some("Berlin"));

    let json = serde_json::to_value(ping()).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "tripspec-ready");
}

#[test]
fn test_parser_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TripRequestParser>();

    let parser = std::sync::Arc::new(TripRequestParser::new().with_reference_date(date(2025, 3, 1)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse("Trip to Oslo in May"))
        })
        .collect();

    for handle in handles {
        let spec = handle.join().unwrap();
        assert_eq!(spec.destination.as_deref(), Some("Oslo"));
        assert_eq!(spec.month, Some(5));
    }
}
