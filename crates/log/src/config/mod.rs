//! Configuration types
//!
//! - `base`: Core configuration structs (Config, Format, Level)
//! - `writer`: Output destination
//! - `fields`: Global fields and MessageFields settings
//! - `presets`: Pre-configured setups (development, production, env)

mod base;
mod fields;
mod presets;
mod writer;

pub use base::{Config, Format, Level};
pub use fields::{Fields, MessageFieldsConfig};
pub use writer::WriterConfig;
