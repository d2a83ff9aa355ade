//! Domain layer for the Zroster plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or rendering concerns: the roster [`Entry`] model and
//! the crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Roster entry model
//!
//! # Examples
//!
//! ```
//! use zroster::domain::Entry;
//!
//! let entry = Entry::new(1, "Ann".to_string());
//! assert!(!entry.favorite);
//! ```

pub mod entry;
pub mod error;

pub use entry::{Entry, EntryId};
pub use error::{Result, ZrosterError};
