use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::config::AppSettings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Owner of the process-wide connection pool
///
/// Request handlers never touch the pool directly; they open a scoped session with
/// [`DatabaseConnections::begin_session`] and hand it back through
/// [`DatabaseConnections::commit_session`]. A session that is dropped without being
/// committed (early return, `?`, panic) is rolled back and its connection released.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub primary: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the database named in the settings
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn init(settings: &AppSettings) -> Result<Self, InternalError> {
        let database_url = settings.database_url();

        let primary = Database::connect(database_url)
            .await
            .map_err(|e| InternalError::database("connect_database", e))?;

        tracing::debug!("Connected to database: {}", database_url);

        Ok(Self { primary })
    }

    /// Run all pending migrations
    pub async fn migrate(&self) -> Result<(), InternalError> {
        Migrator::up(&self.primary, None)
            .await
            .map_err(|e| InternalError::database("run_migrations", e))?;

        tracing::debug!("Database migrations completed");

        Ok(())
    }

    /// Open the per-request session
    pub async fn begin_session(&self) -> Result<DatabaseTransaction, InternalError> {
        self.primary
            .begin()
            .await
            .map_err(|source| DatabaseError::SessionBegin { source }.into())
    }

    /// Commit and release a session opened with `begin_session`
    pub async fn commit_session(txn: DatabaseTransaction) -> Result<(), InternalError> {
        txn.commit()
            .await
            .map_err(|source| DatabaseError::SessionCommit { source }.into())
    }
}

impl std::fmt::Debug for DatabaseConnections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConnections")
            .field("primary", &"<connection>")
            .finish()
    }
}
