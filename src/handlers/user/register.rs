use crate::{
    error::{self, DatabaseError},
    extractors::{Json, ValidatedJson},
    state::StateTrait,
    utils::{hash_password, valid_text},
    Result,
};
use axum::{extract::State, http::StatusCode};
use entity::users;
use sea_orm::{EntityTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    first_name: String,
    last_name: String,
    #[validate(email)]
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    success: bool,
    message: &'static str,
}

/// POST /api/user/register
///
/// The credential is stored as a salted hash, never verbatim. The username
/// lookup is a fast path; the unique index on the column is what actually
/// guarantees no duplicate sneaks in between check and insert.
pub async fn register<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    if !valid_text(&request.first_name)
        || !valid_text(&request.last_name)
        || !valid_text(&request.password)
    {
        return Err(error::JSON_VALIDATE_INVALID);
    }

    let taken = users::Entity::find_by_username(&request.username)
        .count(state.db())
        .await?;

    if taken > 0 {
        return Err(error::USER_ALREADY_EXISTS);
    }

    let user = users::ActiveModel {
        username: Set(request.username),
        password: Set(hash_password(&request.password)?),
        first_name: Set(request.first_name.trim().to_owned()),
        last_name: Set(request.last_name.trim().to_owned()),
        ..Default::default()
    };

    let result = users::Entity::insert(user).exec(state.db()).await;

    if let Err(err) = result {
        if err.unique_violation() {
            return Err(error::USER_ALREADY_EXISTS);
        }

        return Err(err.into());
    }

    info!("registered new user");

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            message: "user registered",
        }),
    ))
}
