use sea_orm_migration::prelude::*;

mod m20260801_000001_create_found_items;
mod m20260801_000002_create_lost_items;
mod m20260801_000003_create_claimed_items;
mod m20260801_000004_create_feedbacks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_found_items::Migration),
            Box::new(m20260801_000002_create_lost_items::Migration),
            Box::new(m20260801_000003_create_claimed_items::Migration),
            Box::new(m20260801_000004_create_feedbacks::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
