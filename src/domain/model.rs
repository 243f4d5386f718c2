use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to the artwork shown for a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub image_ref: ImageRef,
    pub unit_price: f64,
}

impl CatalogItem {
    /// Name of the reserved "no selection" entry.
    pub const SENTINEL_NAME: &'static str = "Select a Band";

    pub fn new(name: impl Into<String>, image_ref: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            image_ref: ImageRef::new(image_ref),
            unit_price,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == Self::SENTINEL_NAME
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingInput {
    pub item: CatalogItem,
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    NoBandSelected,
    NonPositiveQuantity,
}

impl ValidationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationFailure::NoBandSelected => "Please select a band",
            ValidationFailure::NonPositiveQuantity => "Enter value greater than 0",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Successful price calculation. Amounts are unrounded; only `formatted_breakdown` is rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub band_name: String,
    pub quantity: i32,
    pub base_cost: f64,
    pub discount_rate: f64,
    pub discount: f64,
    pub service_fee: f64,
    pub peak_applied: bool,
    pub total: f64,
    pub formatted_breakdown: String,
}

impl Quote {
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PricingResult {
    Invalid { reason: ValidationFailure },
    Quoted(Quote),
}

impl PricingResult {
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            PricingResult::Quoted(quote) => Some(quote),
            PricingResult::Invalid { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<ValidationFailure> {
        match self {
            PricingResult::Invalid { reason } => Some(*reason),
            PricingResult::Quoted(_) => None,
        }
    }

    /// Text the presentation layer shows: the breakdown or the validation message.
    pub fn display_text(&self) -> &str {
        match self {
            PricingResult::Quoted(quote) => &quote.formatted_breakdown,
            PricingResult::Invalid { reason } => reason.message(),
        }
    }
}

impl From<ValidationFailure> for PricingResult {
    fn from(reason: ValidationFailure) -> Self {
        PricingResult::Invalid { reason }
    }
}
