use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const UC_TAGS_NAME: &str = "UC_tags_name";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_tags::Entity")]
    EventTags,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_tags::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_tags::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_name(name: &str) -> Select<Entity> {
        Self::find().filter(Column::Name.eq(name))
    }
}
