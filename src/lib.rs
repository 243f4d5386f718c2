pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::PricingConfig;

pub use core::catalog::Catalog;
pub use core::clock::{FixedClock, SystemClock};
pub use core::peak::{is_peak_time, PeakWindow};
pub use core::pricing::{pricing_input, sanitize_quantity, PricingEngine, PricingRules};
pub use core::quoter::{DelayedQuoter, TicketDesk};
pub use domain::model::{CatalogItem, ImageRef, PricingInput, PricingResult, Quote, ValidationFailure};
pub use domain::ports::{Clock, QuoteProvider};
pub use utils::error::{Result, TicketError};
