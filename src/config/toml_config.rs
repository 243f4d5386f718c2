use crate::core::peak::PeakWindow;
use crate::core::pricing::PricingRules;
use crate::core::quoter::DEFAULT_SIMULATED_LATENCY;
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_non_negative, validate_range, validate_rate, Validate};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional pricing overrides. Every field falls back to the standard price list rules.
///
/// ```toml
/// [pricing]
/// bulk_threshold = 5
/// bulk_discount_rate = 0.10
/// service_fee_per_ticket = 1.25
/// peak_surcharge_rate = 0.05
///
/// [peak]
/// days = ["Fri", "Sat"]
/// start_hour = 18
///
/// [service]
/// simulated_latency_ms = 600
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    pub pricing: Option<PricingSection>,
    pub peak: Option<PeakSection>,
    pub service: Option<ServiceSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingSection {
    pub bulk_threshold: Option<u32>,
    pub bulk_discount_rate: Option<f64>,
    pub service_fee_per_ticket: Option<f64>,
    pub peak_surcharge_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeakSection {
    pub days: Option<Vec<String>>,
    pub start_hour: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub simulated_latency_ms: Option<u64>,
}

impl PricingConfig {
    /// Loads and parses a TOML pricing file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Resolves the configured overrides on top of the default rules.
    pub fn pricing_rules(&self) -> Result<PricingRules> {
        self.validate()?;

        let defaults = PricingRules::default();
        let pricing = self.pricing.clone().unwrap_or_default();
        let peak = self.peak.clone().unwrap_or_default();

        let bulk_threshold = match pricing.bulk_threshold {
            Some(value) => i32::try_from(value).map_err(|_| TicketError::InvalidConfigValueError {
                field: "pricing.bulk_threshold".to_string(),
                value: value.to_string(),
                reason: "Value is too large".to_string(),
            })?,
            None => defaults.bulk_threshold,
        };

        let peak_window = PeakWindow::new(
            match &peak.days {
                Some(days) => parse_days(days)?,
                None => defaults.peak_window.days.clone(),
            },
            peak.start_hour.unwrap_or(defaults.peak_window.start_hour),
        );

        Ok(PricingRules {
            bulk_threshold,
            bulk_discount_rate: pricing.bulk_discount_rate.unwrap_or(defaults.bulk_discount_rate),
            service_fee_per_ticket: pricing
                .service_fee_per_ticket
                .unwrap_or(defaults.service_fee_per_ticket),
            peak_surcharge_rate: pricing.peak_surcharge_rate.unwrap_or(defaults.peak_surcharge_rate),
            peak_window,
        })
    }

    pub fn simulated_latency(&self) -> Duration {
        self.service
            .as_ref()
            .and_then(|s| s.simulated_latency_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SIMULATED_LATENCY)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(pricing) = &self.pricing {
            if let Some(threshold) = pricing.bulk_threshold {
                validate_range("pricing.bulk_threshold", threshold, 1, i32::MAX as u32)?;
            }
            if let Some(rate) = pricing.bulk_discount_rate {
                validate_rate("pricing.bulk_discount_rate", rate)?;
            }
            if let Some(fee) = pricing.service_fee_per_ticket {
                validate_non_negative("pricing.service_fee_per_ticket", fee)?;
            }
            if let Some(rate) = pricing.peak_surcharge_rate {
                validate_rate("pricing.peak_surcharge_rate", rate)?;
            }
        }

        if let Some(peak) = &self.peak {
            if let Some(hour) = peak.start_hour {
                validate_range("peak.start_hour", hour, 0, 23)?;
            }
            if let Some(days) = &peak.days {
                parse_days(days)?;
            }
        }

        Ok(())
    }
}

fn parse_days(days: &[String]) -> Result<Vec<Weekday>> {
    days.iter()
        .map(|day| {
            day.trim()
                .parse::<Weekday>()
                .map_err(|_| TicketError::InvalidConfigValueError {
                    field: "peak.days".to_string(),
                    value: day.clone(),
                    reason: "Expected a weekday name such as Fri or Saturday".to_string(),
                })
        })
        .collect()
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
