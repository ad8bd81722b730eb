use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to read input '{path}': {reason}")]
    InputReadError { path: String, reason: String },

    #[error("Malformed combined name '{value}': expected exactly one comma between last and first name")]
    MalformedNameError { value: String },

    #[error("Failed to write output '{path}': {reason}")]
    OutputWriteError { path: String, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputReadError { .. } => ErrorCategory::Input,
            EtlError::MalformedNameError { .. } => ErrorCategory::Data,
            EtlError::OutputWriteError { .. } => ErrorCategory::Output,
            EtlError::CsvError(_) => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::System,
            EtlError::InvalidConfigValueError { .. } | EtlError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::InputReadError { .. }
            | EtlError::MalformedNameError { .. }
            | EtlError::CsvError(_)
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorSeverity::High,
            EtlError::OutputWriteError { .. } | EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputReadError { path, reason } => {
                format!("Could not read the input file '{}': {}", path, reason)
            }
            EtlError::MalformedNameError { value } => {
                format!("The name '{}' is not in the expected 'Last, First' format", value)
            }
            EtlError::OutputWriteError { path, reason } => {
                format!("Could not write the batch file '{}': {}", path, reason)
            }
            EtlError::CsvError(e) => format!("The input could not be parsed as CSV: {}", e),
            EtlError::IoError(e) => format!("Filesystem operation failed: {}", e),
            EtlError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
            EtlError::MissingConfigError { field } => {
                format!("Missing required option: {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::InputReadError { .. } | EtlError::CsvError(_) => {
                "Check that the input file exists and is a readable CSV with a name column and an email column".to_string()
            }
            EtlError::MalformedNameError { .. } => {
                "Fix the offending row in the source spreadsheet so the name reads 'Last, First'".to_string()
            }
            EtlError::OutputWriteError { .. } | EtlError::IoError(_) => {
                "Check permissions and free space on the output directory".to_string()
            }
            EtlError::InvalidConfigValueError { .. } | EtlError::MissingConfigError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
        }
    }
}
