use crate::{error, extractors::Json, jwt::Claims, state::StateTrait, Result};
use axum::extract::{Path, State};
use entity::event_locations;
use sea_orm::EntityTrait;

/// GET /api/event-location/:id
pub async fn get_location<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<i32>,
) -> Result<Json<event_locations::Model>> {
    let location = event_locations::Entity::find_by_id(id)
        .one(state.db())
        .await?
        .ok_or(error::LOCATION_NOT_FOUND)?;

    // someone else's venue is indistinguishable from a missing one
    if location.id_creator_user != claims.id {
        return Err(error::LOCATION_NOT_FOUND);
    }

    Ok(Json(location))
}
