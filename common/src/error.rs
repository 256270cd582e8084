use std::fmt::Display;

/// Body of a lookup failure response, a single human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// A human-readable error message
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Body of a validation failure response, one message per violated constraint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorsBody {
    /// Human-readable error messages
    pub errors: Vec<String>,
}

impl ErrorsBody {
    pub fn new(errors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }
}
