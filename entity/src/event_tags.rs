use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_EVENT_TAGS: &str = "PK_event_tags";
    pub const FK_EVENT_TAGS_EVENT: &str = "FK_event_tags_event";
    pub const FK_EVENT_TAGS_TAG: &str = "FK_event_tags_tag";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_event: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_tag: i32,
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
        belongs_to = "super::tags::Entity",
        from = "Column::IdTag",
        to = "super::tags::Column::Id"
    )]
    Tag,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
