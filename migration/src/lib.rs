pub use sea_orm_migration::prelude::*;

mod m20181127_000001_hero;
mod m20181127_000002_app_setting;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20181127_000001_hero::Migration),
            Box::new(m20181127_000002_app_setting::Migration),
        ]
    }
}
