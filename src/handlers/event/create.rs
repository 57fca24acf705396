use super::{EventFields, EventResponse};
use crate::{
    error,
    extractors::{Json, ValidatedJson},
    jwt::Claims,
    state::StateTrait,
    Result,
};
use axum::{extract::State, http::StatusCode};
use entity::events;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

/// POST /api/event
///
/// The event row and its tag links land in one transaction, so a failed tag
/// insert cannot leave a half-created event behind.
pub async fn create_event<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    ValidatedJson(request): ValidatedJson<EventFields>,
) -> Result<(StatusCode, Json<EventResponse>)> {
    let txn = state.db().begin().await?;

    super::validate_against_location(&txn, &request).await?;

    let event = events::ActiveModel {
        name: Set(request.name.trim().to_owned()),
        description: Set(request.description.trim().to_owned()),
        id_event_location: Set(request.id_event_location),
        start_date: Set(request.start_date),
        duration_in_minutes: Set(request.duration_in_minutes),
        price: Set(request.price),
        enabled_for_enrollment: Set(request.enabled_for_enrollment),
        max_assistance: Set(request.max_assistance),
        id_creator_user: Set(claims.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if let Some(names) = &request.tags {
        super::replace_tags(&txn, event.id, names).await?;
    }

    txn.commit().await?;

    let mut responses = super::to_responses(state.db(), vec![event]).await?;
    let response = responses.pop().ok_or(error::INTERNAL)?;

    Ok((StatusCode::CREATED, Json(response)))
}
