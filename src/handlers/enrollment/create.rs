use crate::{
    error::{self, DatabaseError},
    extractors::Json,
    jwt::Claims,
    state::StateTrait,
    Result,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use entity::{event_enrollments, events};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, QuerySelect,
    Set, TransactionTrait,
};

/// POST /api/event/:id/enrollment
///
/// The whole check-then-insert sequence runs in one transaction with the
/// event row locked, so two racing requests cannot both pass the capacity
/// check. The unique index on (event, user) backstops the duplicate check
/// the same way.
pub async fn create_enrollment<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Path(event_id): Path<i32>,
) -> Result<(StatusCode, Json<event_enrollments::Model>)> {
    let now = Utc::now().naive_utc();
    let txn = state.db().begin().await?;

    let mut query = events::Entity::find_by_id(event_id);

    // sqlite has no row locks, but it also has no concurrent writers
    if txn.get_database_backend() == DatabaseBackend::Postgres {
        query = query.lock_exclusive();
    }

    let event = query.one(&txn).await?.ok_or(error::EVENT_NOT_FOUND)?;

    if !super::starts_after_today(event.start_date, now) {
        return Err(error::EVENT_ALREADY_STARTED);
    }

    if !event.enabled_for_enrollment {
        return Err(error::ENROLLMENT_CLOSED);
    }

    let duplicate = event_enrollments::Entity::find_by_event_and_user(event_id, claims.id)
        .count(&txn)
        .await?;

    if duplicate > 0 {
        return Err(error::ALREADY_ENROLLED);
    }

    let enrolled = event_enrollments::Entity::find_for_event(event_id)
        .count(&txn)
        .await?;

    if enrolled >= event.max_assistance as u64 {
        return Err(error::CAPACITY_FULL);
    }

    let enrollment = event_enrollments::ActiveModel {
        id_event: Set(event_id),
        id_user: Set(claims.id),
        registration_date_time: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await;

    let enrollment = match enrollment {
        Ok(enrollment) => enrollment,
        Err(err) if err.unique_violation() => return Err(error::ALREADY_ENROLLED),
        Err(err) => return Err(err.into()),
    };

    txn.commit().await?;

    info!(event_id, "user enrolled");

    Ok((StatusCode::CREATED, Json(enrollment)))
}
