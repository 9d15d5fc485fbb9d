//! Session authentication: cookie-correlated, database-backed sessions.

pub mod handlers;
pub mod middleware;

pub use handlers::*;
pub use middleware::{AuthContext, OptionalAuth, SESSION_COOKIE_NAME};
