use thiserror::Error;

/// Errors raised by the computation crates.
///
/// Missing balance-sheet line items are deliberately NOT represented
/// here at the per-ratio level: a ratio whose inputs are absent comes
/// back as `None` ("not available") so one gap never aborts the rest of
/// the call. `MissingData` is reserved for whole-call failures, e.g. an
/// empty price window.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Undefined result: {0}")]
    Domain(String),

    #[error("Missing data: {0}")]
    MissingData(String),
}
