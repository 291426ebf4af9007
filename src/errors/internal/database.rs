use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Starting session failed: {source}")]
    SessionBegin {
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Committing session failed: {source}")]
    SessionCommit {
        #[source]
        source: sea_orm::DbErr,
    },
}
