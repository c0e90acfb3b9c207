//! Authentication module
//!
//! Provides JWT-based authentication with argon2 password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, InvalidToken, JwtService};
pub use middleware::CurrentUser;
pub use password::PasswordService;
