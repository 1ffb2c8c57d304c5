//! Grimoire Engine library.
//!
//! Application layer of the rules catalogue.
//!
//! ## Structure
//!
//! - `use_cases/` - Command handlers, update commands and the error taxonomy
//! - `services/` - Name availability policies
//! - `infrastructure/` - Repository ports and in-memory adapters
//! - `config` / `seed` - Environment configuration and JSON seed files
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod seed;
pub mod services;
pub mod use_cases;

/// End-to-end scenarios against the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
