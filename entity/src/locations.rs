use sea_orm::entity::prelude::*;
use serde::Serialize;

pub mod constraints {
    pub const FK_LOCATIONS_PROVINCE: &str = "FK_locations_province";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub id_province: i32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::provinces::Entity",
        from = "Column::IdProvince",
        to = "super::provinces::Column::Id"
    )]
    Province,
    #[sea_orm(has_many = "super::event_locations::Entity")]
    EventLocations,
}

impl Related<super::provinces::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Province.def()
    }
}

impl Related<super::event_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventLocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
