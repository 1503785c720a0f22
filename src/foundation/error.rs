pub type FieldResult<T> = Result<T, FieldError>;

#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    #[error("missing resource: {0}")]
    MissingResource(String),

    #[error("data format error: {0}")]
    DataFormat(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("formatting error: {0}")]
    Cosmetic(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FieldError {
    pub fn missing_resource(msg: impl Into<String>) -> Self {
        Self::MissingResource(msg.into())
    }

    pub fn data_format(msg: impl Into<String>) -> Self {
        Self::DataFormat(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn cosmetic(msg: impl Into<String>) -> Self {
        Self::Cosmetic(msg.into())
    }

    /// `true` when an input is absent, so the artifact is skipped rather than reported as failed.
    pub fn skips_artifact(&self) -> bool {
        matches!(self, Self::MissingResource(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
