use thiserror::Error;

use crate::extract::ExtractionError;
use crate::spec::ValidationError;

#[derive(Error, Debug)]
pub enum WizError {
    /// The candidate specification broke one or more field constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The model response did not contain a JSON object at all.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    /// Provider, network or filesystem failure, passed through untouched.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

#[cfg(test)]
impl WizError {
    pub fn violations(&self) -> Option<&ValidationError> {
        match self {
            WizError::Validation(v) => Some(v),
            _ => None,
        }
    }
}
