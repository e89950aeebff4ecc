use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Step {0} is out of range (expected 1..=3)")]
    StepOutOfRange(u8),
}

pub type DomainResult<T> = Result<T, DomainError>;
