use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Empty reservation token in {input:?}")]
    EmptyToken { input: String },

    #[error("Invalid seat letter {letter:?} in reservation {token:?}")]
    InvalidSeatLetter { token: String, letter: char },

    #[error("Invalid row number in reservation {token:?}")]
    InvalidRowNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Row {row} of reservation {token:?} is outside the cabin (rows 1..={rows})")]
    RowOutOfRange {
        token: String,
        row: usize,
        rows: usize,
    },
}

impl ReservationError {
    /// True for errors caused by a malformed reservation token.
    pub fn is_token_error(&self) -> bool {
        !matches!(self, ReservationError::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, ReservationError>;
