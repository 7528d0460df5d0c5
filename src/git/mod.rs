//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. No other module imports
//! `git2`, and nothing shells out to the git CLI.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Listing the files tracked in a revision's tree under a source root
//!
//! # Invariants
//!
//! - Listing reads committed trees only, never the working tree
//! - Listing failures are fatal to the caller; there is no partial result

mod interface;

pub use interface::{Git, GitError};
