//! Layer running the enricher chain on every event

// Standard library
use std::io::Write;
use std::sync::Arc;

// External dependencies
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::{Context, Layer},
};

// Internal crates
use super::visitor::PropertyVisitor;
use crate::config::{Format, Level};
use crate::enrich::{DefaultPropertyFactory, Enricher};
use crate::event::LogEvent;
use crate::format;

/// Layer that enriches and renders events
pub struct EnrichLayer<W> {
    enrichers: Arc<[Arc<dyn Enricher>]>,
    format: Format,
    make_writer: W,
}

impl<W> std::fmt::Debug for EnrichLayer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichLayer")
            .field("enrichers", &self.enrichers.len())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl<W> EnrichLayer<W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    /// Create a layer from an enricher chain, an output format and a writer
    pub fn new(
        enrichers: impl IntoIterator<Item = Arc<dyn Enricher>>,
        format: Format,
        make_writer: W,
    ) -> Self {
        Self {
            enrichers: enrichers.into_iter().collect(),
            format,
            make_writer,
        }
    }

    /// Run every enricher on the event, in registration order
    pub fn enrich_event(&self, event: &mut LogEvent) {
        let factory = DefaultPropertyFactory;
        for enricher in self.enrichers.iter() {
            enricher.enrich(event, &factory);
        }
    }
}

impl<S, W> Layer<S> for EnrichLayer<W>
where
    S: Subscriber,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = PropertyVisitor::default();
        event.record(&mut visitor);
        let mut log_event = visitor.into_event(Level::from(metadata.level()), metadata.target());

        self.enrich_event(&mut log_event);

        let rendered = match self.format {
            Format::Json => format::render_json(&log_event),
            Format::Compact => format::render_compact(&log_event),
        };
        let Ok(mut line) = rendered else {
            return;
        };
        line.push('\n');

        let mut writer = self.make_writer.make_writer_for(metadata);
        // Sinks have nowhere to report their own failures
        let _ = writer.write_all(line.as_bytes());
    }
}
