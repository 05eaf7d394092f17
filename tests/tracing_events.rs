//! Event tests for the `tracing` output of status_errors
//!
//! A capturing layer records every event emitted while it is the thread's
//! default subscriber, so level and fields can be asserted directly.

use status_errors::{ErrorDescriptor, ErrorMethodTable, StatusCode, bad_request_with, gateway_timeout};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// ============================================================================
// CAPTURE LAYER
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

struct FieldVisitor(BTreeMap<String, String>);

impl Visit for FieldVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor(BTreeMap::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

/// Run `f` with a capturing subscriber and return what it recorded.
fn capture(f: impl FnOnce()) -> Vec<CapturedEvent> {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    layer.events()
}

// ============================================================================
// RECORD EMISSION
// ============================================================================

#[test]
fn client_error_emits_warn() {
    let events = capture(|| bad_request_with("missing id").log_entry().emit());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.field("status_code"), Some("400"));
    assert_eq!(event.field("reason"), Some("Bad Request"));
    assert_eq!(event.field("error_message"), Some("missing id"));
}

#[test]
fn server_error_emits_error() {
    let events = capture(|| gateway_timeout().log_entry().emit());

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.field("status_code"), Some("504"));
    assert_eq!(event.field("error_message"), Some("Gateway Timeout"));
}

#[test]
fn emitted_message_is_truncated() {
    let events = capture(|| bad_request_with("x".repeat(5000)).log_entry().emit());

    let message = events[0].field("error_message").unwrap();
    assert!(message.len() <= 1024);
    assert!(message.ends_with("...[TRUNCATED]"));
}

// ============================================================================
// TABLE CONSTRUCTION
// ============================================================================

#[test]
fn duplicate_name_emits_debug() {
    let descriptors = [
        ErrorDescriptor::new_static("dup", StatusCode::BadRequest, "first"),
        ErrorDescriptor::new_static("dup", StatusCode::GatewayTimeout, "second"),
    ];
    let events = capture(|| {
        let table = ErrorMethodTable::build(&descriptors);
        assert_eq!(table.len(), 1);
    });

    let debug: Vec<&CapturedEvent> = events.iter().filter(|e| e.level == Level::DEBUG).collect();
    assert_eq!(debug.len(), 1);
    assert_eq!(debug[0].field("name"), Some("dup"));
    assert_eq!(debug[0].field("replaced"), Some("400"));
    assert_eq!(debug[0].field("status_code"), Some("504"));
}

#[test]
fn distinct_names_emit_no_debug() {
    let descriptors = [
        ErrorDescriptor::new_static("a", StatusCode::BadRequest, "A"),
        ErrorDescriptor::new_static("b", StatusCode::NotFound, "B"),
    ];
    let events = capture(|| {
        let _ = ErrorMethodTable::build(&descriptors);
    });

    assert!(events.iter().all(|e| e.level != Level::DEBUG));
}
