// Transfer shapes - poem-openapi request/response objects
pub mod common;
pub mod items;
pub mod tasks;
