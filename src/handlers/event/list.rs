use super::EventResponse;
use crate::{extractors::Json, state::StateTrait, utils::Pagination, Result};
use axum::extract::{Query, State};
use chrono::{Duration, NaiveDate, NaiveTime};
use entity::{event_tags, events, tags};
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct Params {
    limit: Option<u64>,
    offset: Option<u64>,
    name: Option<String>,
    startdate: Option<NaiveDate>,
    tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    collection: Vec<EventResponse>,
    pagination: Pagination,
}

/// GET /api/event
///
/// Public listing. Filters are applied inside the query, so `total` and
/// `nextPage` always describe the filtered collection, including the tag
/// filter, which joins through the link table.
pub async fn list_events<S: StateTrait>(
    State(state): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Response>> {
    let limit = params.limit.unwrap_or(state.config().default_page_limit);
    let offset = params.offset.unwrap_or(0);

    let mut query = events::Entity::find();

    if let Some(name) = &params.name {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col((
                events::Entity,
                events::Column::Name,
            ))))
            .like(format!("%{}%", name.to_lowercase())),
        );
    }

    if let Some(day) = params.startdate {
        let start = day.and_time(NaiveTime::MIN);
        let end = (day + Duration::days(1)).and_time(NaiveTime::MIN);

        query = query
            .filter(events::Column::StartDate.gte(start))
            .filter(events::Column::StartDate.lt(end));
    }

    if let Some(tag) = &params.tag {
        query = query
            .join(JoinType::InnerJoin, events::Relation::EventTags.def())
            .join(JoinType::InnerJoin, event_tags::Relation::Tag.def())
            .filter(
                Expr::expr(Func::lower(Expr::col((tags::Entity, tags::Column::Name))))
                    .like(format!("%{}%", tag.to_lowercase())),
            )
            .distinct();
    }

    let total = query.clone().count(state.db()).await?;

    let page = query
        .order_by_asc(events::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(state.db())
        .await?;

    let collection = super::to_responses(state.db(), page).await?;

    Ok(Json(Response {
        collection,
        pagination: Pagination::new(limit, offset, total),
    }))
}
