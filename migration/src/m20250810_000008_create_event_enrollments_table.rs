use entity::{
    event_enrollments::{self, constraints::*},
    events, users,
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
                    .table(event_enrollments::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(event_enrollments::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(event_enrollments::Column::IdEvent)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_enrollments::Column::IdUser)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(event_enrollments::Column::RegistrationDateTime)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ENROLLMENTS_EVENT)
                            .from(event_enrollments::Entity, event_enrollments::Column::IdEvent)
                            .to(events::Entity, events::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_ENROLLMENTS_USER)
                            .from(event_enrollments::Entity, event_enrollments::Column::IdUser)
                            .to(users::Entity, users::Column::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // one enrollment per (event, user) pair, enforced by the store
        manager
            .create_index(
                Index::create()
                    .name(UC_EVENT_ENROLLMENTS_EVENT_USER)
                    .table(event_enrollments::Entity)
                    .col(event_enrollments::Column::IdEvent)
                    .col(event_enrollments::Column::IdUser)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(event_enrollments::Entity).to_owned())
            .await
    }
}
