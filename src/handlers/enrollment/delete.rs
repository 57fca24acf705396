use crate::{error, extractors::Json, jwt::Claims, state::StateTrait, Result};
use axum::extract::{Path, State};
use chrono::Utc;
use entity::{event_enrollments, events};
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
}

/// DELETE /api/event/:id/enrollment
///
/// Withdrawal obeys the same calendar-day freeze as enrollment.
pub async fn delete_enrollment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(event_id): Path<i32>,
) -> Result<Json<Response>> {
    let now = Utc::now().naive_utc();

    let event = events::Entity::find_by_id(event_id)
        .one(state.db())
        .await?
        .ok_or(error::EVENT_NOT_FOUND)?;

    if !super::starts_after_today(event.start_date, now) {
        return Err(error::EVENT_ALREADY_STARTED);
    }

    let enrollment = event_enrollments::Entity::find_by_event_and_user(event_id, claims.id)
        .one(state.db())
        .await?
        .ok_or(error::NOT_ENROLLED)?;

    event_enrollments::Entity::delete_by_id(enrollment.id)
        .exec(state.db())
        .await?;

    info!(event_id, "user withdrew enrollment");

    Ok(Json(Response {
        message: "enrollment cancelled",
    }))
}
