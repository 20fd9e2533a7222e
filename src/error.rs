use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Error locking db_conn")]
    Lock,
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct TemplateError(#[from] pub tera::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ClientInput,
    Internal,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Failed to insert user into the database: {0}")]
    Database(#[from] DbError),
    #[error("Blocking task failed")]
    Blocking,
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields | Self::InvalidEmail => ErrorKind::ClientInput,
            Self::Hashing(_) | Self::Database(_) | Self::Blocking => ErrorKind::Internal,
        }
    }

    /// Text sent back to the client. Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::ClientInput => self.to_string(),
            ErrorKind::Internal => "Internal server error".to_owned(),
        }
    }
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ClientInput => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}
