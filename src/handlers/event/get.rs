use super::EventResponse;
use crate::{error, extractors::Json, state::StateTrait, Result};
use axum::extract::{Path, State};
use entity::events;
use sea_orm::EntityTrait;

/// GET /api/event/:id
pub async fn get_event<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<EventResponse>> {
    let event = events::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::EVENT_NOT_FOUND)?;

    let mut responses = super::to_responses(state.db(), vec![event]).await?;
    let response = responses.pop().ok_or(error::EVENT_NOT_FOUND)?;

    Ok(Json(response))
}
