use crate::{
    error,
    extractors::{Json, ValidatedJson},
    jwt::JwtTrait,
    state::StateTrait,
    utils::verify_password,
    Result,
};
use axum::extract::State;
use entity::users;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    #[validate(email)]
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
    token: String,
}

/// POST /api/user/login
///
/// Unknown usernames and wrong passwords produce the same response, so the
/// endpoint cannot be used to probe which accounts exist.
pub async fn login<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Response>> {
    let user = users::Entity::find_by_username(&request.username)
        .one(state.db())
        .await?
        .ok_or(error::INVALID_CREDENTIALS)?;

    if !verify_password(&request.password, &user.password) {
        return Err(error::INVALID_CREDENTIALS);
    }

    let token = state.jwt().encode(&user)?;

    Ok(Json(Response {
        success: true,
        message: "logged in",
        token,
    }))
}
