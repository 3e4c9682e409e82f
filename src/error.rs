use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid seed data: {0}")]
    InvalidSeedData(String),

    #[error("invalid {kind} value '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },
}
