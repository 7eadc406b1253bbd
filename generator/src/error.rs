//! FILENAME: generator/src/error.rs

use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid node weights: {0}")]
    InvalidWeights(#[from] WeightedError),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
