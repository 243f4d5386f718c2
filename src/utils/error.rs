use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown band: {name}")]
    UnknownBandError { name: String },

    #[error("Invalid moment '{value}': {reason}")]
    InvalidMomentError { value: String, reason: String },
}

impl TicketError {
    /// Short message suitable for printing to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            TicketError::IoError(e) => format!("Could not read a file: {}", e),
            TicketError::SerializationError(_) => "Could not render the quote as JSON".to_string(),
            TicketError::TomlError(_) => "The pricing configuration file is not valid TOML".to_string(),
            TicketError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            TicketError::UnknownBandError { name } => {
                format!("'{}' is not in the band list", name)
            }
            TicketError::InvalidMomentError { value, .. } => {
                format!("'{}' is not a valid date and time", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TicketError::IoError(_) => "Check that the file exists and is readable",
            TicketError::SerializationError(_) => "Retry without --json",
            TicketError::TomlError(_) => {
                "Fix the configuration file or run without --config to use the default prices"
            }
            TicketError::InvalidConfigValueError { .. } => {
                "Rates must be between 0 and 1, the fee must not be negative and the peak hour must be 0-23"
            }
            TicketError::UnknownBandError { .. } => "Run `concert-tickets bands` to see the available bands",
            TicketError::InvalidMomentError { .. } => "Use the format YYYY-MM-DDTHH:MM, e.g. 2026-10-16T19:30",
        }
    }

    /// Process exit code for the CLI. Configuration problems are 2, bad user input 1, IO 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            TicketError::UnknownBandError { .. } | TicketError::InvalidMomentError { .. } => 1,
            TicketError::TomlError(_) | TicketError::InvalidConfigValueError { .. } => 2,
            TicketError::IoError(_) | TicketError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
