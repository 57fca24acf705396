use entity::{
    locations::{self, constraints::*},
    provinces,
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
                    .table(locations::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(locations::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(locations::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(locations::Column::IdProvince)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(locations::Column::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(locations::Column::Longitude)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LOCATIONS_PROVINCE)
                            .from(locations::Entity, locations::Column::IdProvince)
                            .to(provinces::Entity, provinces::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(locations::Entity).to_owned())
            .await
    }
}
