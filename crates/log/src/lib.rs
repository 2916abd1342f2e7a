//! # fieldlog - Structured logging with `MessageFields`
//!
//! A `tracing-subscriber` layer that runs an enricher chain over every event
//! before rendering it. The headline enricher, [`MessageFieldsEnricher`],
//! groups an event's own fields under a nested `MessageFields` property.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fieldlog::prelude::*;
//!
//! fn main() -> Result<()> {
//!     LoggerBuilder::new()
//!         .format(Format::Json)
//!         .enrich()
//!         .with_message_fields_except(&["Password"])
//!         .build()?;
//!
//!     info!(Username = "joegauchoii", Environment = "Development", "User logged in");
//!     Ok(())
//! }
//! ```
//!
//! Produces (JSON format):
//!
//! ```text
//! {"timestamp":"...","level":"info","target":"app","message":"User logged in",
//!  "Username":"joegauchoii","Environment":"Development",
//!  "MessageFields":{"Username":"joegauchoii","Environment":"Development"}}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
pub mod enrich;
pub mod event;
mod format;
mod layer;

// Public API
pub use builder::{Enrichment, LoggerBuilder};
pub use config::{Config, Fields, Format, Level, MessageFieldsConfig, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use enrich::{Enricher, MessageFieldsEnricher, MessageFieldsExt};
pub use layer::EnrichLayer;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Enricher, Format, Level, LoggerBuilder, MessageFieldsEnricher, MessageFieldsExt,
        Result, auto_init, debug, error, info, init, init_with, trace, warn,
    };

    pub use tracing::{Span, field};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Result type for logger operations
pub type Result<T> = LogResult<T>;

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
pub fn auto_init() -> Result<()> {
    if std::env::var("FIELDLOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> Result<()> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<()> {
    LoggerBuilder::from_config(config).build()
}
