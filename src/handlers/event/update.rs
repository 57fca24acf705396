use super::{EventFields, EventResponse};
use crate::{error, extractors::Json, jwt::Claims, state::StateTrait, Result};
use axum::extract::State;
use entity::events;
use sea_orm::{EntityTrait, IntoActiveModel, Set, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Request {
    id: i32,
    #[serde(flatten)]
    #[validate(nested)]
    fields: EventFields,
}

/// PUT /api/event
///
/// Only the creator may edit an event; anyone else gets the same answer as
/// for an event that does not exist. The ownership lookup comes first, so a
/// non-owner learns nothing from a body that also fails validation.
pub async fn update_event<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Json(request): Json<Request>,
) -> Result<Json<EventResponse>> {
    let txn = state.db().begin().await?;

    let event = events::Entity::find_by_id(request.id)
        .one(&txn)
        .await?
        .ok_or(error::EVENT_NOT_FOUND)?;

    if event.id_creator_user != claims.id {
        return Err(error::EVENT_NOT_FOUND);
    }

    request.validate().map_err(|err| {
        debug!("invalid request: {:?}", err);
        error::JSON_VALIDATE_INVALID
    })?;

    let fields = &request.fields;
    super::validate_against_location(&txn, fields).await?;

    let mut active = event.into_active_model();
    active.name = Set(fields.name.trim().to_owned());
    active.description = Set(fields.description.trim().to_owned());
    active.id_event_location = Set(fields.id_event_location);
    active.start_date = Set(fields.start_date);
    active.duration_in_minutes = Set(fields.duration_in_minutes);
    active.price = Set(fields.price);
    active.enabled_for_enrollment = Set(fields.enabled_for_enrollment);
    active.max_assistance = Set(fields.max_assistance);

    let event = events::Entity::update(active).exec(&txn).await?;

    if let Some(names) = &fields.tags {
        super::replace_tags(&txn, event.id, names).await?;
    }

    txn.commit().await?;

    let mut responses = super::to_responses(state.db(), vec![event]).await?;
    let response = responses.pop().ok_or(error::INTERNAL)?;

    Ok(Json(response))
}
