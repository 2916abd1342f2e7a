//! `tracing-subscriber` integration
//!
//! [`EnrichLayer`] turns every `tracing` event into a [`LogEvent`], runs the
//! enricher chain and writes the rendered line.
//!
//! [`LogEvent`]: crate::event::LogEvent

mod enrich;
mod visitor;

pub use enrich::EnrichLayer;
