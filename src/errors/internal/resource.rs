use thiserror::Error;

use crate::types::internal::ResourceKind;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: ResourceKind, id: i64 },
}

impl ResourceError {
    pub fn not_found(resource: ResourceKind, id: i64) -> Self {
        Self::NotFound { resource, id }
    }
}
