//! Infrastructure implementations.
//!
//! Repository ports and the in-memory adapters behind them.

pub mod memory;
pub mod ports;
