use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A required container or element is absent, nested wrongly, or has too
    /// few children (missing table, missing series `name`, short rows, ...).
    #[error("invalid chart structure: {0}")]
    Structure(String),

    /// A present value is empty where required or fails numeric validation.
    #[error("invalid chart value: {0}")]
    Value(String),

    /// Anything else that makes data unusable outside the extraction
    /// taxonomy: bad primitive geometry, failed JSON round-trips.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv input error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChartError {
    #[must_use]
    pub fn is_structure(&self) -> bool {
        matches!(self, Self::Structure(_))
    }

    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}
