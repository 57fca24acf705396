use crate::error::{self, Error};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = axum::Json::from_request(req, state).await;

        match json {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(JsonRejection::JsonDataError(_)) => Err(error::JSON_MISSING_FIELDS),
            Err(JsonRejection::JsonSyntaxError(_)) => Err(error::JSON_SYNTAX_ERROR),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(error::JSON_CONTENT_TYPE),
            Err(err) => {
                error!("unhandled json rejection: {:?}", err);
                Err(error::INTERNAL)
            }
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|err| {
            debug!("invalid request: {:?}", err);
            error::JSON_VALIDATE_INVALID
        })?;

        Ok(ValidatedJson(value))
    }
}
