//! # Utilities Module
//!
//! ## Role
//! Cross-cutting helpers that don't belong in the reduction itself.
//!
//! ## Sub-modules
//! - `threading`: Rayon thread pool configuration
//! - `telemetry`: Run reports and duration formatting

pub mod telemetry;
pub mod threading;
