//! The value union stored at graph nodes.
//!
//! A closed set of kinds, exhaustively matched by both the graph traversal
//! and the renderer. The two raw-text leaf kinds ([`Callback`] and
//! [`UtcInstant`]) carry source that must reach the output unquoted;
//! [`ExtLeaf`] covers externally-owned values the core hands to the
//! renderer verbatim.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde_json::Number;

use crate::graph::OptionGraph;

/// A value stored in an [`OptionGraph`] node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Ordered, heterogeneous array literal. Not path-traversable.
    Sequence(Vec<Value>),
    /// Nested graph node. Unwraps transparently on render.
    Graph(OptionGraph),
    /// Raw JS source text, rendered unquoted and unescaped.
    Callback(Callback),
    /// UTC calendar instant, rendered as a `Date.UTC(...)` call.
    Instant(UtcInstant),
    /// Externally-owned leaf, rendered only by a registered encoder.
    Ext(ExtLeaf),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&OptionGraph> {
        match self {
            Value::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Deep-convert a borrowed JSON document. Objects become nested graphs
    /// (insertion order preserved), arrays become sequences.
    pub fn from_json(json: &serde_json::Value) -> Value {
        Value::from(json.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut graph = OptionGraph::new();
                for (key, value) in map {
                    // Direct insert: object keys are keys, never paths.
                    graph.insert(key, Value::from(value));
                }
                Value::Graph(graph)
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Value {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        // Non-finite floats have no literal form; degrade to null like the
        // rest of the tolerant-builder surface.
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Sequence(items)
    }
}

impl From<OptionGraph> for Value {
    fn from(graph: OptionGraph) -> Value {
        Value::Graph(graph)
    }
}

impl From<Callback> for Value {
    fn from(callback: Callback) -> Value {
        Value::Callback(callback)
    }
}

impl From<UtcInstant> for Value {
    fn from(instant: UtcInstant) -> Value {
        Value::Instant(instant)
    }
}

impl From<ExtLeaf> for Value {
    fn from(leaf: ExtLeaf) -> Value {
        Value::Ext(leaf)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Value {
        Value::Instant(UtcInstant::from_datetime(&dt))
    }
}

/// A JS function body stored as literal source text.
///
/// The renderer emits the body exactly as stored, with no quoting or
/// escaping, so the consuming library receives a function rather than a
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    body: String,
}

impl Callback {
    pub fn new(body: impl Into<String>) -> Callback {
        Callback { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A calendar instant in UTC, rendered as `Date.UTC(y,m0,d,h,mi,s)`.
///
/// The month is 1-based here and 0-based in the rendered call, matching
/// what `Date.UTC` expects. Field ranges are checked at render time, not
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl UtcInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> UtcInstant {
        UtcInstant {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Capture a date-time in any zone as its UTC field values.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> UtcInstant {
        let utc = dt.with_timezone(&Utc);
        UtcInstant {
            year: utc.year(),
            month: utc.month(),
            day: utc.day(),
            hour: utc.hour(),
            minute: utc.minute(),
            second: utc.second(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for UtcInstant {
    fn from(dt: DateTime<Tz>) -> UtcInstant {
        UtcInstant::from_datetime(&dt)
    }
}

/// An externally-owned opaque leaf: a kind tag plus an arbitrary payload.
///
/// The graph passes these through unmodified; rendering requires an encoder
/// registered for the kind (see [`crate::Renderer::with_encoder`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtLeaf {
    kind: String,
    payload: serde_json::Value,
}

impl ExtLeaf {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> ExtLeaf {
        ExtLeaf {
            kind: kind.into(),
            payload,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
