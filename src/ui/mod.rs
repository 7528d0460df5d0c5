//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, tool output echo, progress reporting
//!
//! # Design
//!
//! All user-facing output goes through this module so quiet, verbose and
//! JSON modes are handled in one place. Internal diagnostics use `tracing`
//! instead (see [`crate::logging`]).

pub mod output;
