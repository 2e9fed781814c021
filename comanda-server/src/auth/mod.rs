//! Authentication module
//!
//! - [`JwtService`] - token signing and validation
//! - [`CurrentUser`] - per-request identity context
//! - [`require_auth`] / [`require_admin`] - middleware

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
