use chrono::{NaiveDate, NaiveDateTime};
use concert_tickets::{
    is_peak_time, sanitize_quantity, Catalog, CatalogItem, PricingEngine, PricingResult,
    TicketDesk, ValidationFailure,
};

const EPS: f64 = 1e-9;

fn band(price: f64) -> CatalogItem {
    CatalogItem::new("Test Band", "mipmap/test", price)
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    // October 2026: the 12th is a Monday
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn scenario_a_four_tickets_no_discount() {
    let result = PricingEngine::default().compute_quote(&band(24.95), 4, false);
    let quote = result.quote().unwrap();

    assert!((quote.base_cost - 99.80).abs() < EPS);
    assert_eq!(quote.discount, 0.0);
    assert!((quote.service_fee - 5.00).abs() < EPS);
    assert!((quote.total - 104.80).abs() < EPS);
    assert!(quote.formatted_breakdown.ends_with("Total: £104.80"));
    assert!(!quote.formatted_breakdown.contains("Discount"));
}

#[test]
fn scenario_b_five_tickets_bulk_discount() {
    let result = PricingEngine::default().compute_quote(&band(24.95), 5, false);
    let quote = result.quote().unwrap();

    assert!((quote.base_cost - 124.75).abs() < EPS);
    assert!((quote.discount - 12.475).abs() < EPS);
    assert!((quote.service_fee - 6.25).abs() < EPS);
    assert!((quote.total - 118.525).abs() < EPS);
    assert!(quote.has_discount());
}

#[test]
fn scenario_c_peak_pricing_multiplies_whole_sum() {
    let result = PricingEngine::default().compute_quote(&band(63.95), 2, true);
    let quote = result.quote().unwrap();

    assert!((quote.base_cost - 127.90).abs() < EPS);
    assert_eq!(quote.discount, 0.0);
    assert!((quote.service_fee - 2.50).abs() < EPS);
    assert!((quote.total - (127.90 + 2.50) * 1.05).abs() < EPS);
    assert!(quote.peak_applied);
    assert!(quote.formatted_breakdown.contains("Peak pricing (5%): applied"));
}

#[test]
fn scenario_d_sentinel_is_refused() {
    let catalog = Catalog::standard();
    let result = PricingEngine::default().compute_quote(catalog.sentinel(), 3, false);
    assert_eq!(result.failure(), Some(ValidationFailure::NoBandSelected));
    assert_eq!(result.display_text(), "Please select a band");
}

#[test]
fn scenario_e_empty_quantity_text_is_refused() {
    let desk = TicketDesk::default();
    let item = desk.catalog().find_by_name("Written by Wolves").unwrap().clone();
    let result = desk.compute_quote(&item, "", at(13, 12));
    assert_eq!(result.failure(), Some(ValidationFailure::NonPositiveQuantity));
    assert_eq!(result.display_text(), "Enter value greater than 0");
}

#[test]
fn non_positive_quantities_are_refused_for_every_item() {
    let engine = PricingEngine::default();
    let catalog = Catalog::standard();
    for item in catalog.bands() {
        for n in [i32::MIN, -100, -1, 0] {
            assert_eq!(
                engine.compute_quote(item, n, false).failure(),
                Some(ValidationFailure::NonPositiveQuantity),
                "{} x {}",
                item.name,
                n
            );
        }
    }
}

#[test]
fn sentinel_is_refused_for_every_quantity() {
    let engine = PricingEngine::default();
    let catalog = Catalog::standard();
    for n in [-5, 0, 1, 5, 1000] {
        for peak in [false, true] {
            assert_eq!(
                engine.compute_quote(catalog.sentinel(), n, peak).failure(),
                Some(ValidationFailure::NoBandSelected)
            );
        }
    }
}

#[test]
fn off_peak_total_matches_closed_form() {
    let engine = PricingEngine::default();
    let catalog = Catalog::standard();
    for item in catalog.bands() {
        for n in 1..=12 {
            let quote = match engine.compute_quote(item, n, false) {
                PricingResult::Quoted(quote) => quote,
                other => panic!("unexpected {:?}", other),
            };
            let rate = if n >= 5 { 0.10 } else { 0.0 };
            let expected = item.unit_price * f64::from(n) * (1.0 - rate) + 1.25 * f64::from(n);
            assert!(
                (quote.total - expected).abs() < 1e-6,
                "{} x {}: {} != {}",
                item.name,
                n,
                quote.total,
                expected
            );
        }
    }
}

#[test]
fn peak_multiplier_only_applies_at_peak() {
    let engine = PricingEngine::default();
    let item = band(36.0);
    for n in [1, 4, 5, 9] {
        let off_peak = engine.compute_quote(&item, n, false);
        let peak = engine.compute_quote(&item, n, true);
        let off_peak = off_peak.quote().unwrap();
        let peak = peak.quote().unwrap();
        assert!(!off_peak.peak_applied);
        assert!((peak.total - off_peak.total * 1.05).abs() < 1e-9);
    }
}

#[test]
fn quantity_text_is_sanitised_before_validation() {
    assert_eq!(sanitize_quantity("3a"), 3);

    let desk = TicketDesk::default();
    let item = desk.catalog().find_by_name("Linkin Park").unwrap().clone();
    let sanitised = desk.compute_quote(&item, "3a", at(13, 12));
    let clean = desk.compute_quote(&item, "3", at(13, 12));
    assert_eq!(sanitised, clean);
    assert_eq!(sanitised.quote().unwrap().quantity, 3);
}

#[test]
fn desk_uses_moment_for_peak_check() {
    let desk = TicketDesk::default();
    let item = desk.catalog().find_by_name("Linkin Park").unwrap().clone();

    assert!(is_peak_time(&at(16, 18)));
    let friday_evening = desk.compute_quote(&item, "2", at(16, 18));
    let friday_afternoon = desk.compute_quote(&item, "2", at(16, 17));

    assert!(friday_evening.quote().unwrap().peak_applied);
    assert!(!friday_afternoon.quote().unwrap().peak_applied);
}

#[test]
fn quote_serializes_for_presentation_layer() {
    let result = PricingEngine::default().compute_quote(&band(24.95), 4, false);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "quoted");
    assert_eq!(json["band_name"], "Test Band");
    assert_eq!(json["quantity"], 4);
    assert_eq!(json["peak_applied"], false);
}

#[test]
fn decimal_digits_from_other_scripts_are_read_as_quantity() {
    let desk = TicketDesk::default();
    let item = desk.catalog().find_by_name("Linkin Park").unwrap().clone();

    let arabic_indic = desk.compute_quote(&item, "٣", at(13, 12));
    let full_width = desk.compute_quote(&item, "５", at(13, 12));

    assert_eq!(arabic_indic, desk.compute_quote(&item, "3", at(13, 12)));
    assert_eq!(full_width.quote().unwrap().quantity, 5);
    assert!(full_width.quote().unwrap().has_discount());
}
