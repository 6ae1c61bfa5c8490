use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// Caller supplied no usable input. The message is shown to the caller.
    #[error("{0}")]
    InvalidInput(String),

    #[error("LLM API error: {0}")]
    ExternalServiceError(String),

    /// The model reply contained no parseable JSON object.
    #[error("no JSON object found in model reply")]
    NoJsonFound,

    /// The model reply parsed as JSON but did not match the meal plan shape.
    #[error("model reply failed schema validation: {0}")]
    SchemaValidation(String),
}
