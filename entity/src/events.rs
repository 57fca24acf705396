use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const FK_EVENTS_EVENT_LOCATION: &str = "FK_events_event_location";
    pub const FK_EVENTS_CREATOR: &str = "FK_events_creator";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub id_event_location: i32,
    pub start_date: DateTime,
    pub duration_in_minutes: i32,
    pub price: f64,
    pub enabled_for_enrollment: bool,
    pub max_assistance: i32,
    pub id_creator_user: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_locations::Entity",
        from = "Column::IdEventLocation",
        to = "super::event_locations::Column::Id"
    )]
    EventLocation,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::IdCreatorUser",
        to = "super::users::Column::Id"
    )]
    CreatorUser,
    #[sea_orm(has_many = "super::event_enrollments::Entity")]
    EventEnrollments,
    #[sea_orm(has_many = "super::event_tags::Entity")]
    EventTags,
}

impl Related<super::event_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventLocation.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorUser.def()
    }
}

impl Related<super::event_enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventEnrollments.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_tags::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
