//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth layer. Storage failures are translated into
//! the API error taxonomy at this boundary.

pub mod product;
pub mod user;

pub use product::ProductService;
pub use user::UserService;
