//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult, ok};
