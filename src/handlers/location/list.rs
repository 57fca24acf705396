use crate::{
    extractors::Json,
    jwt::Claims,
    state::StateTrait,
    utils::{PageQuery, Pagination},
    Result,
};
use axum::extract::{Query, State};
use entity::event_locations;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response {
    collection: Vec<event_locations::Model>,
    pagination: Pagination,
}

/// GET /api/event-location
///
/// Scoped to the venues the authenticated user created.
pub async fn list_locations<S: StateTrait>(
    State(state): State<S>,
    claims: Claims,
    Query(page): Query<PageQuery>,
) -> Result<Json<Response>> {
    let limit = page.limit.unwrap_or(state.config().default_page_limit);
    let offset = page.offset.unwrap_or(0);

    let query = event_locations::Entity::find_by_creator(claims.id);

    let total = query.clone().count(state.db()).await?;

    let collection = query
        .order_by_asc(event_locations::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(state.db())
        .await?;

    Ok(Json(Response {
        collection,
        pagination: Pagination::new(limit, offset, total),
    }))
}
