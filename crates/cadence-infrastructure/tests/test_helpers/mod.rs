use sqlx::SqlitePool;

use cadence_infrastructure::persistence::Database;

/// Fresh in-memory database with migrations applied.
pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}
