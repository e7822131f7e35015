//! OTLP JSON span formatter.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON,
//! one complete `resourceSpans` document per exported batch.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime};

/// Formats batches of spans as OTLP JSON documents.
pub struct SpanFormatter {
    resource: Resource,
    scope_name: &'static str,
}

impl SpanFormatter {
    /// Creates a formatter that tags every batch with `resource` and reports
    /// spans under the instrumentation scope `scope_name`.
    pub const fn new(resource: Resource, scope_name: &'static str) -> Self {
        Self {
            resource,
            scope_name,
        }
    }

    /// Formats a batch as one OTLP JSON document.
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": {"attributes": [{"key": "service.name", "value": {"stringValue": "rosterview"}}]},
    ///     "scopeSpans": [{"scope": {"name": "rosterview"}, "spans": [...]}]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| json!({ "key": k.to_string(), "value": Self::format_attribute_value(v) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope_name },
                    "spans": spans
                }]
            }]
        })
    }

    fn format_span(span: &SpanData) -> JsonValue {
        let (status_code, status_message) = Self::format_status(&span.status);
        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": parent_span_id,
            "name": span.name,
            "kind": Self::span_kind_to_int(&span.span_kind),
            "startTimeUnixNano": unix_nanos(span.start_time),
            "endTimeUnixNano": unix_nanos(span.end_time),
            "attributes": Self::format_attributes(&span.attributes),
            "events": Self::format_events(&span.events),
            "links": Self::format_links(&span.links),
            "status": { "code": status_code, "message": status_message },
        })
    }

    /// OTLP span kind codes: internal 1 through consumer 5.
    const fn span_kind_to_int(kind: &SpanKind) -> u8 {
        match kind {
            SpanKind::Internal => 1,
            SpanKind::Server => 2,
            SpanKind::Client => 3,
            SpanKind::Producer => 4,
            SpanKind::Consumer => 5,
        }
    }

    fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| json!({ "key": kv.key.to_string(), "value": Self::format_attribute_value(&kv.value) }))
            .collect()
    }

    /// Maps attribute values to OTLP `AnyValue` JSON. Integers are strings,
    /// arrays fall back to their debug form.
    fn format_attribute_value(value: &Value) -> JsonValue {
        match value {
            Value::Bool(b) => json!({ "boolValue": b }),
            Value::I64(i) => json!({ "intValue": i.to_string() }),
            Value::F64(f) => json!({ "doubleValue": f }),
            Value::String(s) => json!({ "stringValue": s.to_string() }),
            Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
        }
    }

    fn format_events(events: &[Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                json!({
                    "timeUnixNano": unix_nanos(event.timestamp),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    fn format_links(links: &[Link]) -> Vec<JsonValue> {
        links
            .iter()
            .map(|link| {
                json!({
                    "traceId": format!("{:032x}", link.span_context.trace_id()),
                    "spanId": format!("{:016x}", link.span_context.span_id()),
                    "attributes": Self::format_attributes(&link.attributes),
                })
            })
            .collect()
    }

    /// OTLP status as `(code, message)`: unset 0, ok 1, error 2.
    fn format_status(status: &Status) -> (u8, String) {
        match status {
            Status::Unset => (0, String::new()),
            Status::Ok => (1, String::new()),
            Status::Error { description } => (2, description.to_string()),
        }
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope_name", &self.scope_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "rosterview")]);
        let doc = SpanFormatter::new(resource, "rosterview").format_batch(&[]);

        let resource_spans = &doc["resourceSpans"][0];
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "rosterview");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));

        let attrs = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "rosterview" }
        })));
    }

    #[test]
    fn test_attribute_values() {
        assert_eq!(
            SpanFormatter::format_attribute_value(&Value::I64(42)),
            json!({ "intValue": "42" })
        );
        assert_eq!(
            SpanFormatter::format_attribute_value(&Value::Bool(true)),
            json!({ "boolValue": true })
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SpanFormatter::format_status(&Status::Unset), (0, String::new()));
        assert_eq!(
            SpanFormatter::format_status(&Status::error("load failed")),
            (2, "load failed".to_string())
        );
    }

    #[test]
    fn test_unix_nanos_before_epoch_is_zero() {
        let before = SystemTime::UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(unix_nanos(before), "0");
    }
}
