//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod user;

// Catalog
pub mod product;

// Orders
pub mod order;

// Re-exports
pub use order::{Order, OrderId, OrderLine};
pub use product::{Product, ProductId};
pub use user::{Rol, User, UserCreate, UserId};
