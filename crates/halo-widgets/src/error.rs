use halo_dial::DialError;
use thiserror::Error;

/// Widget composition errors.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Dial error: {0}")]
    Dial(#[from] DialError),

    /// The snapshot lacks a record this widget needs. Callers are expected to
    /// hold off rendering until upstream data arrives.
    #[error("Missing data: {0}")]
    MissingData(&'static str),

    #[error("Unknown widget: {0}")]
    UnknownWidget(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
