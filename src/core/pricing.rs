use crate::core::peak::PeakWindow;
use crate::domain::model::{CatalogItem, PricingInput, PricingResult, Quote, ValidationFailure};
use crate::utils::currency::format_gbp;
use chrono::{Datelike, Timelike};

/// Code point of the zero in every Unicode `Nd` (decimal digit) run; each run is ten digits long.
const DECIMAL_DIGIT_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `c` if it is a decimal digit in any script (`٣` is 3, `５` is 5).
fn decimal_digit_value(c: char) -> Option<u32> {
    let code = u32::from(c);
    let idx = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DECIMAL_DIGIT_ZEROS[idx.checked_sub(1)?];
    let value = code - zero;
    (value < 10).then_some(value)
}

/// Keeps only decimal digits (any script) and reads them as a ticket count.
/// Empty or out-of-range text yields 0.
pub fn sanitize_quantity(raw: &str) -> i32 {
    let mut digits = raw.chars().filter_map(decimal_digit_value).peekable();
    if digits.peek().is_none() {
        return 0;
    }
    digits
        .try_fold(0i32, |acc, d| acc.checked_mul(10)?.checked_add(d as i32))
        .unwrap_or(0)
}

/// Builds a pricing input from whatever the user typed.
pub fn pricing_input(item: CatalogItem, raw_quantity: &str) -> PricingInput {
    PricingInput {
        item,
        quantity: sanitize_quantity(raw_quantity),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Minimum ticket count that earns the bulk discount.
    pub bulk_threshold: i32,
    pub bulk_discount_rate: f64,
    pub service_fee_per_ticket: f64,
    /// Surcharge applied to the whole sum at peak time (0.05 = +5%).
    pub peak_surcharge_rate: f64,
    pub peak_window: PeakWindow,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            bulk_threshold: 5,
            bulk_discount_rate: 0.10,
            service_fee_per_ticket: 1.25,
            peak_surcharge_rate: 0.05,
            peak_window: PeakWindow::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rules: PricingRules,
}

impl PricingEngine {
    pub fn new(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn is_peak<T: Datelike + Timelike>(&self, moment: &T) -> bool {
        self.rules.peak_window.contains(moment)
    }

    /// Sanitises the raw quantity, checks the peak window for `now`, then prices.
    pub fn quote<T: Datelike + Timelike>(
        &self,
        item: &CatalogItem,
        raw_quantity: &str,
        now: &T,
    ) -> PricingResult {
        let input = pricing_input(item.clone(), raw_quantity);
        self.price(&input, self.is_peak(now))
    }

    pub fn price(&self, input: &PricingInput, is_peak: bool) -> PricingResult {
        self.compute_quote(&input.item, input.quantity, is_peak)
    }

    pub fn compute_quote(&self, item: &CatalogItem, quantity: i32, is_peak: bool) -> PricingResult {
        if item.is_sentinel() {
            return ValidationFailure::NoBandSelected.into();
        }
        if quantity <= 0 {
            return ValidationFailure::NonPositiveQuantity.into();
        }

        let rules = &self.rules;
        let n = f64::from(quantity);

        let base_cost = item.unit_price * n;
        let discount_rate = if quantity >= rules.bulk_threshold {
            rules.bulk_discount_rate
        } else {
            0.0
        };
        let discount = base_cost * discount_rate;
        let service_fee = rules.service_fee_per_ticket * n;
        let peak_multiplier = if is_peak { 1.0 + rules.peak_surcharge_rate } else { 1.0 };
        let total = (base_cost - discount + service_fee) * peak_multiplier;

        let mut quote = Quote {
            band_name: item.name.clone(),
            quantity,
            base_cost,
            discount_rate,
            discount,
            service_fee,
            peak_applied: is_peak,
            total,
            formatted_breakdown: String::new(),
        };
        quote.formatted_breakdown = self.breakdown(&quote);

        PricingResult::Quoted(quote)
    }

    fn breakdown(&self, quote: &Quote) -> String {
        let mut lines = vec![
            format!("Band: {}", quote.band_name),
            format!("Tickets: {}", quote.quantity),
            format!("Base: {}", format_gbp(quote.base_cost)),
        ];
        if quote.has_discount() {
            lines.push(format!(
                "Discount ({}%): -{}",
                percent(quote.discount_rate),
                format_gbp(quote.discount)
            ));
        }
        lines.push(format!("Service fee: +{}", format_gbp(quote.service_fee)));
        if quote.peak_applied {
            lines.push(format!(
                "Peak pricing ({}%): applied",
                percent(self.rules.peak_surcharge_rate)
            ));
        }
        lines.push(String::new());
        lines.push(format!("Total: {}", format_gbp(quote.total)));
        lines.join("\n")
    }
}

fn percent(rate: f64) -> f64 {
    (rate * 1000.0).round() / 10.0
}
