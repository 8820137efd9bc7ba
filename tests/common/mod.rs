use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::env;
use tokio::sync::OnceCell;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Set up test database connection and bring the schema up to date.
/// Uses TEST_DATABASE_URL environment variable or falls back to default.
/// Migrations run once per test binary; tests share the database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    // RUST_LOG-driven logging for test debugging; ignore repeat init
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();

    let database_url = env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
        "postgresql://pricetracker_user@localhost:5432/pricetracker_test".to_string()
    });

    let db = Database::connect(&database_url).await?;
    MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        assert!(db.is_ok(), "Test database connection should succeed");
    }
}
