use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown measure type: {0}")]
    UnknownMeasureType(String),
}
