use entity::{
    event_locations,
    events::{self, constraints::*},
    users,
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
                    .table(events::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(events::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(events::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(events::Column::Description).text().not_null())
                    .col(
                        ColumnDef::new(events::Column::IdEventLocation)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(events::Column::StartDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(events::Column::DurationInMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(events::Column::Price).double().not_null())
                    .col(
                        ColumnDef::new(events::Column::EnabledForEnrollment)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(events::Column::MaxAssistance)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(events::Column::IdCreatorUser)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_EVENT_LOCATION)
                            .from(events::Entity, events::Column::IdEventLocation)
                            .to(event_locations::Entity, event_locations::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_CREATOR)
                            .from(events::Entity, events::Column::IdCreatorUser)
                            .to(users::Entity, users::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(events::Entity).to_owned())
            .await
    }
}
