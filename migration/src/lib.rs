pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_gigs_table;
mod m20260801_000003_create_bids_table;
mod m20260801_000004_create_user_reviews_table;
mod m20260801_000005_create_orders_table;
mod m20260801_000006_create_conversations_table;
mod m20260801_000007_create_messages_table;
mod m20260805_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_gigs_table::Migration),
            Box::new(m20260801_000003_create_bids_table::Migration),
            Box::new(m20260801_000004_create_user_reviews_table::Migration),
            Box::new(m20260801_000005_create_orders_table::Migration),
            Box::new(m20260801_000006_create_conversations_table::Migration),
            Box::new(m20260801_000007_create_messages_table::Migration),
            Box::new(m20260805_000001_add_indexes::Migration),
        ]
    }
}
