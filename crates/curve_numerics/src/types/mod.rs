//! Shared types.
//!
//! This module provides:
//! - `error`: Structured error type for the checked root finder
//!
//! # Re-exports
//!
//! - [`SolverError`] from `error`

pub mod error;

pub use error::SolverError;
