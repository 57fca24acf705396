pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users_table;
mod m20250810_000002_create_provinces_table;
mod m20250810_000003_create_locations_table;
mod m20250810_000004_create_event_locations_table;
mod m20250810_000005_create_events_table;
mod m20250810_000006_create_tags_table;
mod m20250810_000007_create_event_tags_table;
mod m20250810_000008_create_event_enrollments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users_table::Migration),
            Box::new(m20250810_000002_create_provinces_table::Migration),
            Box::new(m20250810_000003_create_locations_table::Migration),
            Box::new(m20250810_000004_create_event_locations_table::Migration),
            Box::new(m20250810_000005_create_events_table::Migration),
            Box::new(m20250810_000006_create_tags_table::Migration),
            Box::new(m20250810_000007_create_event_tags_table::Migration),
            Box::new(m20250810_000008_create_event_enrollments_table::Migration),
        ]
    }
}
