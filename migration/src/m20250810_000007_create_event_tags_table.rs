use entity::{
    event_tags::{self, constraints::*},
    events, tags,
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
                    .table(event_tags::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(event_tags::Column::IdEvent)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(event_tags::Column::IdTag).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name(PK_EVENT_TAGS)
                            .col(event_tags::Column::IdEvent)
                            .col(event_tags::Column::IdTag),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_TAGS_EVENT)
                            .from(event_tags::Entity, event_tags::Column::IdEvent)
                            .to(events::Entity, events::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_TAGS_TAG)
                            .from(event_tags::Entity, event_tags::Column::IdTag)
                            .to(tags::Entity, tags::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(event_tags::Entity).to_owned())
            .await
    }
}
