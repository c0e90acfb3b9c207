//! Database repositories
//!
//! Provides data access layer for database operations.
//!
//! Repository functions return `sqlx::Error` unclassified; the service
//! layer translates storage failures into the API error taxonomy.

pub mod product;
pub mod user;

pub use product::{ProductChanges, ProductRecord, ProductRepository};
pub use user::{UserRecord, UserRepository};
