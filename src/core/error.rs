use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("step {step} is out of range (total steps: {total})")]
    StepOutOfRange { step: usize, total: usize },
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("unknown ui mode `{0}`")]
    UnknownMode(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
