//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_storage_backend;
mod postgres_storage_backend;

pub use in_memory_storage_backend::InMemoryStorageBackend;
pub use postgres_storage_backend::PostgresStorageBackend;
