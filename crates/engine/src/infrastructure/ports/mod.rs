//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Use cases, policies and
//! commands are concrete types that receive ports as `Arc<dyn ...>`.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::*;
