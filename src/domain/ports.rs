use crate::domain::model::{CatalogItem, PricingResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Source of the current local wall-clock moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Asynchronous seam between a presentation layer and the pricing core.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn quote(&self, item: &CatalogItem, raw_quantity: &str) -> PricingResult;
}
