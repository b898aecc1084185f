use thiserror::Error;

/// Error type that captures input and output failures around the forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error(
        "input file does not contain the correct fields \
         (expected name, transaction_type, amount, frequency, next_date)"
    )]
    InvalidHeader,
    #[error("transaction_type for {name} must be 'income' or 'expense'")]
    InvalidDirection { name: String },
    #[error("amount of '{value}' for {name} is invalid")]
    InvalidAmount { name: String, value: String },
    #[error("invalid frequency '{value}' for {name}")]
    InvalidFrequency { name: String, value: String },
    #[error("next_date for {name} is in an invalid format, use YYYY-MM-DD")]
    InvalidDate { name: String },
    #[error("forecast days must be greater than 0")]
    InvalidHorizon,
    #[error("input file '{0}' not found")]
    InputNotFound(String),
}
