//! Core components shared by every part of the logging pipeline.
//!
//! ### [`error`] - Error handling
//! A single [`LogError`] enum covers configuration, filter, initialisation
//! and registration failures. All fallible operations return [`LogResult`].

pub mod error;

pub use error::{LogError, LogResult};
