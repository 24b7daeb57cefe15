use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io(source) => format!("A file could not be read or written: {}", source),
            Self::Config { message } => format!("The configuration is invalid: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("The configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Io(_) => "Check that the input file exists and the output location is writable",
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration file or command-line flags and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
