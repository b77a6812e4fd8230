//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the logging service.
//!
//! This module provides a tracing-subscriber layer that routes tracing
//! events into a [`LoggingService`], so code instrumented with the standard
//! tracing macros (`debug!`, `info!`, `warn!`, `error!`) shares the
//! service's level filtering, formatting, and mute behaviour.
//!
//! # Level mapping
//!
//! - `TRACE` and `DEBUG` events log at `DEBUG`
//! - `INFO` events log at `INFO`
//! - `WARN` events log at `WARNING`
//! - `ERROR` events render with the `[ERROR]` prefix but do **not**
//!   terminate the process; the fatal exit stays an explicit
//!   [`LoggingService::fatal`] call

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::error_tag::ErrorTag;
use crate::service::LoggingService;

/// Tracing layer routing events into a [`LoggingService`].
pub struct ServiceLayer {
    service: Arc<LoggingService>,
}

impl ServiceLayer {
    /// Creates a layer that forwards events to the given service.
    #[must_use]
    pub const fn new(service: Arc<LoggingService>) -> Self {
        Self { service }
    }
}

impl<S> Layer<S> for ServiceLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        match *event.metadata().level() {
            Level::TRACE | Level::DEBUG => self.service.debug(&visitor.message),
            Level::INFO => self.service.info(&visitor.message),
            Level::WARN => self.service.warning(&visitor.message),
            Level::ERROR => self
                .service
                .write_error_line(&visitor.message, ErrorTag::None),
        }
    }
}

/// Extracts the `message` field of a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        }
    }
}

/// Installs a global subscriber that routes all tracing events into
/// `service`.
///
/// Panics if a global subscriber is already set, like
/// `tracing_subscriber`'s own `init` helpers.
pub fn init_tracing(service: Arc<LoggingService>) {
    tracing_subscriber::registry()
        .with(ServiceLayer::new(service))
        .init();
}
