// Internal types - not exposed over the API
pub mod resource;
pub mod timestamp;

pub use resource::ResourceKind;
