use crate::domain::term::entity::used_term;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement,
};
use tracing::info;

/// Opens a connection handle holding at most one connection.
///
/// Each request gets its own handle; dropping it closes the connection.
pub async fn connect_scoped(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(1)
        .min_connections(0)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Creates `used_terms` and its recency index if absent.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Starting database schema synchronization...");

    create_table_if_not_exists(db, used_term::Entity).await?;
    create_index_if_not_exists(
        db,
        "idx_used_terms_category_timestamp",
        "used_terms",
        &["category", "timestamp"],
    )
    .await?;

    info!("'used_terms' table is ready.");
    Ok(())
}

async fn create_table_if_not_exists<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table: {}", e);
        e
    })
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("CREATE INDEX {} ON {} ({})", index_name, table_name, cols);
    let stmt = Statement::from_string(backend, sql);

    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) if is_already_exists(&e) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to create index {}: {}", index_name, e);
            Err(e)
        }
    }
}

fn is_already_exists(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("already exists")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }
    }

    #[tokio::test]
    async fn ensure_schema_should_create_table_then_index() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([ok(), ok()])
            .into_connection();

        // Act
        ensure_schema(&db).await.unwrap();

        // Assert
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("CREATE TABLE IF NOT EXISTS `used_terms`"));
        assert!(log.contains("AUTO_INCREMENT"));
        assert!(log.contains("CURRENT_TIMESTAMP"));
        assert!(log.contains("CREATE INDEX idx_used_terms_category_timestamp"));
    }

    #[tokio::test]
    async fn ensure_schema_should_tolerate_existing_index() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([ok()])
            .append_exec_errors([DbErr::Custom(
                "Duplicate key name 'idx_used_terms_category_timestamp'".to_string(),
            )])
            .into_connection();

        assert!(ensure_schema(&db).await.is_ok());
    }

    #[tokio::test]
    async fn ensure_schema_should_surface_table_failure() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_errors([DbErr::Custom("access denied".to_string())])
            .into_connection();

        assert!(ensure_schema(&db).await.is_err());
    }
}
