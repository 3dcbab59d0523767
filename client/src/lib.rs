//! Client-side utilities for interacting with the GIF portal program.
//!
//! Includes the RPC bridge, instruction-building context, account view decoding, and the
//! wallet capability abstraction.

pub mod bridge;
pub mod context;
pub mod error;
pub mod logs;
pub mod pretty;
pub mod transactions;
pub mod views;
pub mod wallet;

pub use logs::LogColor;
