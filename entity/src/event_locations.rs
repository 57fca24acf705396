use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const FK_EVENT_LOCATIONS_LOCATION: &str = "FK_event_locations_location";
    pub const FK_EVENT_LOCATIONS_CREATOR: &str = "FK_event_locations_creator";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_location: i32,
    pub name: String,
    pub full_address: String,
    pub max_capacity: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub id_creator_user: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::IdLocation",
        to = "super::locations::Column::Id"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::IdCreatorUser",
        to = "super::users::Column::Id"
    )]
    CreatorUser,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_creator(user_id: i32) -> Select<Entity> {
        Self::find().filter(Column::IdCreatorUser.eq(user_id))
    }
}
