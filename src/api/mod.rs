//! HTTP surface: router, handlers, and error responses.

pub mod errors;
pub mod orders;
pub mod products;
pub mod routes;
