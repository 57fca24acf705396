mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::{error, state::StateTrait, utils::valid_text, Result};
use axum::{routing::get as get_method, Router};
use chrono::NaiveDateTime;
use entity::{event_locations, event_tags, events, locations, provinces, tags, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/",
            get_method(list::list_events::<S>)
                .post(create::create_event::<S>)
                .put(update::update_event::<S>),
        )
        .route(
            "/:id",
            get_method(get::get_event::<S>).delete(delete::delete_event::<S>),
        )
}

/// Writable portion of an event, shared by the create and update bodies.
#[derive(Debug, Deserialize, Validate)]
pub struct EventFields {
    pub name: String,
    pub description: String,
    pub id_event_location: i32,
    pub start_date: NaiveDateTime,
    #[validate(range(min = 0))]
    pub duration_in_minutes: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub enabled_for_enrollment: bool,
    #[validate(range(min = 0))]
    pub max_assistance: i32,
    pub tags: Option<Vec<String>>,
}

/// Rules every write must clear before a row is touched: free-text fields of
/// useful length, a venue that exists, and a headcount the venue can hold.
async fn validate_against_location<C: ConnectionTrait>(
    db: &C,
    fields: &EventFields,
) -> Result<()> {
    if !valid_text(&fields.name) || !valid_text(&fields.description) {
        return Err(error::JSON_VALIDATE_INVALID);
    }

    let location = event_locations::Entity::find_by_id(fields.id_event_location)
        .one(db)
        .await?
        .ok_or(error::EVENT_LOCATION_INVALID)?;

    if fields.max_assistance > location.max_capacity {
        return Err(error::MAX_ASSISTANCE_TOO_LARGE);
    }

    Ok(())
}

/// Replaces the tag set of an event. Tags are shared rows keyed by name, so
/// unknown names are inserted first and existing ones are linked as-is.
async fn replace_tags<C: ConnectionTrait>(db: &C, event_id: i32, names: &[String]) -> Result<()> {
    event_tags::Entity::delete_many()
        .filter(event_tags::Column::IdEvent.eq(event_id))
        .exec(db)
        .await?;

    for name in names {
        let tag = match tags::Entity::find_by_name(name).one(db).await? {
            Some(tag) => tag,
            None => {
                tags::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };

        let link = event_tags::ActiveModel {
            id_event: Set(event_id),
            id_tag: Set(tag.id),
        };

        event_tags::Entity::insert(link)
            .exec_without_returning(db)
            .await?;
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvinceResponse {
    pub id: i32,
    pub name: String,
    pub full_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub province: Option<ProvinceResponse>,
}

#[derive(Debug, Serialize)]
pub struct EventLocationResponse {
    pub id: i32,
    pub name: String,
    pub full_address: String,
    pub max_capacity: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub location: Option<LocationResponse>,
}

/// Creator as exposed to readers. Deliberately a projection: the stored
/// credential hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct CreatorResponse {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDateTime,
    pub duration_in_minutes: i32,
    pub price: f64,
    pub enabled_for_enrollment: bool,
    pub max_assistance: i32,
    pub event_location: Option<EventLocationResponse>,
    pub creator_user: Option<CreatorResponse>,
    pub tags: Vec<tags::Model>,
}

/// Builds the nested read model for a page of events with one batched query
/// per joined table instead of a query per row.
async fn to_responses<C: ConnectionTrait>(
    db: &C,
    events: Vec<events::Model>,
) -> Result<Vec<EventResponse>> {
    let event_locs = events.load_one(event_locations::Entity, db).await?;
    let creators = events.load_one(users::Entity, db).await?;
    let tag_sets = events
        .load_many_to_many(tags::Entity, event_tags::Entity, db)
        .await?;

    let loc_models: Vec<event_locations::Model> =
        event_locs.iter().flatten().cloned().collect();
    let inner_locs = loc_models.load_one(locations::Entity, db).await?;

    let inner_models: Vec<locations::Model> = inner_locs.iter().flatten().cloned().collect();
    let province_rows = inner_models.load_one(provinces::Entity, db).await?;

    let mut province_of: HashMap<i32, ProvinceResponse> = HashMap::new();
    for (location, province) in inner_models.iter().zip(province_rows) {
        if let Some(province) = province {
            province_of.insert(
                location.id,
                ProvinceResponse {
                    id: province.id,
                    name: province.name,
                    full_name: province.full_name,
                    latitude: province.latitude,
                    longitude: province.longitude,
                },
            );
        }
    }

    // keyed by the event_location id, not the inner location id
    let mut location_of: HashMap<i32, LocationResponse> = HashMap::new();
    for (event_loc, location) in loc_models.iter().zip(inner_locs) {
        if let Some(location) = location {
            let province = province_of.get(&location.id).cloned();
            location_of.insert(
                event_loc.id,
                LocationResponse {
                    id: location.id,
                    name: location.name,
                    latitude: location.latitude,
                    longitude: location.longitude,
                    province,
                },
            );
        }
    }

    let responses = events
        .into_iter()
        .zip(event_locs)
        .zip(creators)
        .zip(tag_sets)
        .map(|(((event, event_loc), creator), tags)| EventResponse {
            id: event.id,
            name: event.name,
            description: event.description,
            start_date: event.start_date,
            duration_in_minutes: event.duration_in_minutes,
            price: event.price,
            enabled_for_enrollment: event.enabled_for_enrollment,
            max_assistance: event.max_assistance,
            event_location: event_loc.map(|el| {
                let location = location_of.get(&el.id).cloned();
                EventLocationResponse {
                    id: el.id,
                    name: el.name,
                    full_address: el.full_address,
                    max_capacity: el.max_capacity,
                    latitude: el.latitude,
                    longitude: el.longitude,
                    location,
                }
            }),
            creator_user: creator.map(|user| CreatorResponse {
                id: user.id,
                username: user.username,
                first_name: user.first_name,
                last_name: user.last_name,
            }),
            tags,
        })
        .collect();

    Ok(responses)
}
