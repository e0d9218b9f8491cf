//! Database module
//!
//! Pool creation, embedded migrations and schema verification.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Tables the stores read and write
const REQUIRED_TABLES: &[&str] = &["accounts", "operation_types", "transactions"];

/// Open the connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the migrations embedded from `migrations/`
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Verify database connectivity
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check if required tables exist and reference data is seeded
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    for table in REQUIRED_TABLES.iter().copied() {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    let operation_types: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM operation_types")
        .fetch_one(pool)
        .await?;

    if operation_types == 0 {
        tracing::error!("Table 'operation_types' is empty. Please run database seed.");
        return Ok(false);
    }

    tracing::info!("Schema verified: {} operation types seeded", operation_types);
    Ok(true)
}
