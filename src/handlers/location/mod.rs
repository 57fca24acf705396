mod get;
mod list;

use crate::state::StateTrait;
use axum::{routing::get as get_method, Router};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get_method(list::list_locations::<S>))
        .route("/:id", get_method(get::get_location::<S>))
}
