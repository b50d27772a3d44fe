use thiserror::Error;

use dc_core::DcError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    NetworkError(#[from] DcError),

    #[error("configuration error: {0}")]
    ConfigLoadError(String),
}
