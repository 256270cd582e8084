use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use herodex_common::error::{ErrorBody, ErrorsBody};
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A direct lookup missed; carries the entity kind, e.g. `"Hero"`.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// One or more field constraints were violated. Always recoverable and
    /// always leaves the store unchanged.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Database(anyhow::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Database(value.into())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Any(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound(_) => HttpResponse::NotFound().json(ErrorBody::new(self)),
            Self::Validation(errors) => {
                HttpResponse::UnprocessableEntity().json(ErrorsBody::new(errors.clone()))
            }
            Self::Database(err) => HttpResponse::InternalServerError().json(ErrorBody::new(err)),
            Self::Any(err) => HttpResponse::InternalServerError().json(ErrorBody::new(err)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(Error::NotFound("Hero").to_string(), "Hero not found");
        assert_eq!(Error::NotFound("Power").to_string(), "Power not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::NotFound("Hero").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::validation("whatever").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
