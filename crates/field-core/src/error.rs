use thiserror::Error;

/// Rejected grid parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("grid parameter `{0}` must be finite")]
    NonFinite(&'static str),
    #[error("padding must be >= 0, got {0}")]
    NegativePadding(f32),
    #[error("element radius must be > 0, got {0}")]
    NonPositiveRadius(f32),
}
