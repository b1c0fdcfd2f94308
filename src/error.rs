use thiserror::Error;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel element not found: {id}")]
    MissingElement { id: String },

    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
