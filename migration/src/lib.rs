pub use sea_orm_migration::prelude::*;

mod m20260803_000001_create_users;
mod m20260803_000002_create_exchanges;
mod m20260804_000001_create_pairs_prices;
mod m20260804_000002_create_user_exchanges;
mod m20260805_000001_create_user_period_changes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260803_000001_create_users::Migration),
            Box::new(m20260803_000002_create_exchanges::Migration),
            Box::new(m20260804_000001_create_pairs_prices::Migration),
            Box::new(m20260804_000002_create_user_exchanges::Migration),
            Box::new(m20260805_000001_create_user_period_changes::Migration),
        ]
    }
}
