use entity::{
    event_locations::{self, constraints::*},
    locations, users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(event_locations::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(event_locations::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::IdLocation)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::FullAddress)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::MaxCapacity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_locations::Column::IdCreatorUser)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_LOCATIONS_LOCATION)
                            .from(event_locations::Entity, event_locations::Column::IdLocation)
                            .to(locations::Entity, locations::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_LOCATIONS_CREATOR)
                            .from(
                                event_locations::Entity,
                                event_locations::Column::IdCreatorUser,
                            )
                            .to(users::Entity, users::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(event_locations::Entity).to_owned())
            .await
    }
}
