use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const UC_EVENT_ENROLLMENTS_EVENT_USER: &str = "UC_event_enrollments_event_user";
    pub const FK_EVENT_ENROLLMENTS_EVENT: &str = "FK_event_enrollments_event";
    pub const FK_EVENT_ENROLLMENTS_USER: &str = "FK_event_enrollments_user";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event_enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_event: i32,
    pub id_user: i32,
    pub registration_date_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::IdEvent",
        to = "super::events::Column::Id"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::IdUser",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_for_event(event_id: i32) -> Select<Entity> {
        Self::find().filter(Column::IdEvent.eq(event_id))
    }

    #[inline]
    pub fn find_by_event_and_user(event_id: i32, user_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::IdEvent.eq(event_id))
            .filter(Column::IdUser.eq(user_id))
    }
}
