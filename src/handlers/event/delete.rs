use crate::{error, extractors::Json, jwt::Claims, state::StateTrait, Result};
use axum::extract::{Path, State};
use entity::{event_enrollments, event_tags, events};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    message: &'static str,
}

/// DELETE /api/event/:id
///
/// Refused while anyone is enrolled; the tag links go with the event.
pub async fn delete_event<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(id): Path<i32>,
) -> Result<Json<Response>> {
    let txn = state.db().begin().await?;

    let event = events::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(error::EVENT_NOT_FOUND)?;

    if event.id_creator_user != claims.id {
        return Err(error::EVENT_NOT_FOUND);
    }

    let enrolled = event_enrollments::Entity::find_for_event(event.id)
        .count(&txn)
        .await?;

    if enrolled > 0 {
        return Err(error::EVENT_HAS_ENROLLMENTS);
    }

    event_tags::Entity::delete_many()
        .filter(event_tags::Column::IdEvent.eq(event.id))
        .exec(&txn)
        .await?;

    events::Entity::delete_by_id(event.id).exec(&txn).await?;

    txn.commit().await?;

    info!(event_id = event.id, "deleted event");

    Ok(Json(Response {
        message: "event deleted",
    }))
}
