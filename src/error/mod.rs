mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;

#[derive(Debug, Clone, Copy)]
pub struct Error<'a> {
    status: StatusCode,
    code: &'static str,
    message: &'a str,
}

pub type Result<T = ()> = std::result::Result<T, Error<'static>>;

impl<'a> Error<'a> {
    #[inline]
    const fn new(status: StatusCode, code: &'static str, message: &'a str) -> Error<'a> {
        Self {
            status,
            code,
            message,
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }
}

impl IntoResponse for Error<'_> {
    #[inline]
    fn into_response(self) -> Response {
        let body = axum::Json(json!({
            "code": self.code(),
            "message": self.message(),
        }));

        (self.status, body).into_response()
    }
}

impl From<DbErr> for Error<'_> {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error<'_> {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to deserialize json: {:?}", error);
        constants::JSON_SYNTAX_ERROR
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $message:literal) => {
        pub const $name: $crate::error::Error<'static> = $crate::error::Error::new(
            ::axum::http::StatusCode::$status,
            $code,
            $message,
        );
    };
}

pub(crate) use const_error;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn error_response_has_json_content_type() {
        let error = Error::new(StatusCode::BAD_REQUEST, "test", "test error");
        let response = error.into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE);

        assert!(content_type.is_some());
        assert_eq!(content_type.unwrap(), "application/json");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
