mod create;
mod delete;

use crate::state::StateTrait;
use axum::{routing::post, Router};
use chrono::NaiveDateTime;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/:id/enrollment",
        post(create::create_enrollment::<S>).delete(delete::delete_enrollment::<S>),
    )
}

/// Enrollment changes close at the start of the event's calendar day, not at
/// its exact start time.
fn starts_after_today(start_date: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_date.date() > now.date()
}
