use crate::core::catalog::Catalog;
use crate::core::pricing::PricingEngine;
use crate::domain::model::{CatalogItem, PricingResult};
use crate::domain::ports::{Clock, QuoteProvider};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::time::Duration;

pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(600);

/// Entry point for a presentation layer: the catalog plus the pure pricing engine.
#[derive(Debug, Clone, Default)]
pub struct TicketDesk {
    catalog: Catalog,
    engine: PricingEngine,
}

impl TicketDesk {
    pub fn new(catalog: Catalog, engine: PricingEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn list_catalog_items(&self) -> &[CatalogItem] {
        self.catalog.list_catalog_items()
    }

    pub fn compute_quote(
        &self,
        item: &CatalogItem,
        raw_quantity: &str,
        now: NaiveDateTime,
    ) -> PricingResult {
        let result = self.engine.quote(item, raw_quantity, &now);
        match result.failure() {
            Some(reason) => tracing::warn!(band = %item.name, raw_quantity, "Quote refused: {}", reason),
            None => tracing::debug!(band = %item.name, raw_quantity, %now, "Quote computed"),
        }
        result
    }
}

/// Wraps the synchronous engine with an artificial delay before a quote is returned,
/// giving a UI time to show its loading state. Validation failures return immediately.
pub struct DelayedQuoter<C: Clock> {
    desk: TicketDesk,
    clock: C,
    latency: Duration,
}

impl<C: Clock> DelayedQuoter<C> {
    pub fn new(desk: TicketDesk, clock: C) -> Self {
        Self::with_latency(desk, clock, DEFAULT_SIMULATED_LATENCY)
    }

    pub fn with_latency(desk: TicketDesk, clock: C, latency: Duration) -> Self {
        Self {
            desk,
            clock,
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn desk(&self) -> &TicketDesk {
        &self.desk
    }
}

#[async_trait]
impl<C: Clock> QuoteProvider for DelayedQuoter<C> {
    async fn quote(&self, item: &CatalogItem, raw_quantity: &str) -> PricingResult {
        let result = self.desk.compute_quote(item, raw_quantity, self.clock.now());

        if result.quote().is_some() && !self.latency.is_zero() {
            tracing::debug!("Simulating {:?} of processing time", self.latency);
            tokio::time::sleep(self.latency).await;
        }

        result
    }
}
