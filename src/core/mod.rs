//! core
//!
//! Core domain rules for clang-sweep.
//!
//! # Modules
//!
//! - [`filter`] - Extension allow-lists per tool
//! - [`suppression`] - Line filter loaded from `.clang-tidy.supp`
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Pure functions where possible; file reads are explicit and small
//! - Missing optional files mean defaults, never errors

pub mod config;
pub mod filter;
pub mod suppression;
