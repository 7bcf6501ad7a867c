use thiserror::Error;
use vt_core::CoreError;

#[derive(Debug, Error)]
pub enum AnimError {
    #[error("journey speed must be positive and finite, got {0} km/h")]
    InvalidSpeed(f64),

    #[error("journey refresh rate must be positive and finite, got {0} Hz")]
    InvalidRefreshRate(f64),

    #[error("journey endpoint out of range: {0}")]
    Coordinate(#[from] CoreError),

    #[error("failed to spawn tick thread: {0}")]
    Io(#[from] std::io::Error),
}

pub type AnimResult<T> = Result<T, AnimError>;
