use deadpool_postgres::Pool;

use crate::document_store::error::Result;

/// Create the `documents` table if it does not exist
///
/// Idempotent; safe to run on every startup. The id column is assigned by
/// the database and is never reused.
pub async fn init_documents_table(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;

    conn.batch_execute(
        "CREATE TABLE IF NOT EXISTS documents (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            metadata TEXT
        )",
    )
    .await?;

    Ok(())
}
