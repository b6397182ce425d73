//! JS-object-literal rendering.
//!
//! Turns an [`OptionGraph`] into the pretty-printed, non-strict object
//! literal a charting library evaluates in the browser: unquoted
//! identifier keys, raw function bodies, `Date.UTC(...)` call expressions.
//! The output is deliberately NOT strict JSON.
//!
//! Rendering either produces the complete text or fails as a whole with a
//! [`RenderError`] naming the offending dotted path — partial output is
//! never returned.

mod escape;

pub use escape::escape;

use std::collections::HashMap;

use thiserror::Error;

use chartopt_keypath::{is_identifier, join};

use crate::graph::OptionGraph;
use crate::value::{UtcInstant, Value};

/// Encoder for an externally-owned leaf kind.
///
/// Receives the leaf payload and returns the raw replacement text to splice
/// into the output, or a message describing why it could not.
pub type LeafEncoder = fn(&serde_json::Value) -> Result<String, String>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("empty callback body at `{path}`")]
    EmptyCallback { path: String },
    #[error("calendar instant field out of range at `{path}`")]
    InvalidInstant { path: String },
    #[error("no encoder registered for leaf kind `{kind}` at `{path}`")]
    UnregisteredKind { kind: String, path: String },
    #[error("encoder for leaf kind `{kind}` failed at `{path}`: {message}")]
    Encoder {
        kind: String,
        path: String,
        message: String,
    },
}

/// Render `root` with the default two-space [`Renderer`].
pub fn render(root: &OptionGraph) -> Result<String, RenderError> {
    Renderer::new().render(root)
}

/// Configurable renderer: indentation plus the leaf-encoder registry.
///
/// The registry is how new opaque leaf kinds join the output format
/// without touching the graph or the walker:
///
/// ```
/// use chartopt::{ExtLeaf, OptionGraph, Renderer};
///
/// let renderer = Renderer::new().with_encoder("color-stop", |payload| {
///     let stop = payload.get("stop").and_then(|v| v.as_f64()).ok_or("missing stop")?;
///     let color = payload.get("color").and_then(|v| v.as_str()).ok_or("missing color")?;
///     Ok(format!("[{stop}, \"{color}\"]"))
/// });
///
/// let mut graph = OptionGraph::new();
/// graph.set(
///     "fillColor.stops",
///     chartopt::Value::Sequence(vec![
///         ExtLeaf::new("color-stop", serde_json::json!({"stop": 0.0, "color": "#AA4643"})).into(),
///     ]),
/// );
/// assert!(renderer.render(&graph).unwrap().contains("[0, \"#AA4643\"]"));
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    tab: String,
    encoders: HashMap<String, LeafEncoder>,
}

impl Default for Renderer {
    fn default() -> Renderer {
        Renderer::new()
    }
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer {
            tab: "  ".to_string(),
            encoders: HashMap::new(),
        }
    }

    /// Replace the per-level indentation string.
    pub fn with_tab(mut self, tab: impl Into<String>) -> Renderer {
        self.tab = tab.into();
        self
    }

    /// Register an encoder for an [`crate::ExtLeaf`] kind.
    pub fn with_encoder(mut self, kind: impl Into<String>, encoder: LeafEncoder) -> Renderer {
        self.encoders.insert(kind.into(), encoder);
        self
    }

    /// Render `root` as a pretty-printed JS object literal.
    pub fn render(&self, root: &OptionGraph) -> Result<String, RenderError> {
        let mut out = String::new();
        let mut path = Vec::new();
        self.write_graph(&mut out, root, "", &mut path)?;
        Ok(out)
    }

    fn write_graph(
        &self,
        out: &mut String,
        graph: &OptionGraph,
        indent: &str,
        path: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        if graph.is_empty() {
            out.push_str("{}");
            return Ok(());
        }
        let inner = format!("{indent}{}", self.tab);
        out.push_str("{\n");
        let last = graph.len() - 1;
        for (i, (key, value)) in graph.iter().enumerate() {
            out.push_str(&inner);
            write_key(out, key);
            out.push_str(": ");
            path.push(key.to_string());
            self.write_value(out, value, &inner, path)?;
            path.pop();
            if i < last {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str(indent);
        out.push('}');
        Ok(())
    }

    fn write_value(
        &self,
        out: &mut String,
        value: &Value,
        indent: &str,
        path: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::String(s) => {
                out.push('"');
                out.push_str(&escape(s));
                out.push('"');
            }
            Value::Sequence(items) => self.write_sequence(out, items, indent, path)?,
            Value::Graph(graph) => self.write_graph(out, graph, indent, path)?,
            Value::Callback(callback) => {
                if callback.body().trim().is_empty() {
                    return Err(RenderError::EmptyCallback { path: dotted(path) });
                }
                out.push_str(callback.body());
            }
            Value::Instant(instant) => write_instant(out, instant, path)?,
            Value::Ext(leaf) => {
                let encoder =
                    self.encoders
                        .get(leaf.kind())
                        .ok_or_else(|| RenderError::UnregisteredKind {
                            kind: leaf.kind().to_string(),
                            path: dotted(path),
                        })?;
                match encoder(leaf.payload()) {
                    Ok(raw) => out.push_str(&raw),
                    Err(message) => {
                        return Err(RenderError::Encoder {
                            kind: leaf.kind().to_string(),
                            path: dotted(path),
                            message,
                        })
                    }
                }
            }
        }
        Ok(())
    }

    fn write_sequence(
        &self,
        out: &mut String,
        items: &[Value],
        indent: &str,
        path: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        if items.is_empty() {
            out.push_str("[]");
            return Ok(());
        }
        // Leaf-only sequences stay on one line; anything holding a nested
        // container gets one element per line.
        let flat = items
            .iter()
            .all(|item| !matches!(item, Value::Graph(_) | Value::Sequence(_)));
        if flat {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                path.push(i.to_string());
                self.write_value(out, item, indent, path)?;
                path.pop();
            }
            out.push(']');
        } else {
            let inner = format!("{indent}{}", self.tab);
            out.push_str("[\n");
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                out.push_str(&inner);
                path.push(i.to_string());
                self.write_value(out, item, &inner, path)?;
                path.pop();
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(indent);
            out.push(']');
        }
        Ok(())
    }
}

/// The dotted path of the value currently being written, for errors.
fn dotted(path: &[String]) -> String {
    join(path)
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        out.push('"');
        out.push_str(&escape(key));
        out.push('"');
    }
}

fn write_instant(
    out: &mut String,
    instant: &UtcInstant,
    path: &[String],
) -> Result<(), RenderError> {
    if instant.month == 0 || instant.month > 12 || instant.day == 0 {
        return Err(RenderError::InvalidInstant { path: dotted(path) });
    }
    // Date.UTC takes a 0-based month; the model stores 1-based.
    use std::fmt::Write;
    let _ = write!(
        out,
        "Date.UTC({},{},{},{},{},{})",
        instant.year,
        instant.month - 1,
        instant.day,
        instant.hour,
        instant.minute,
        instant.second
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Callback, ExtLeaf};
    use serde_json::json;

    #[test]
    fn scalars_follow_json_rules() {
        let mut graph = OptionGraph::new();
        graph.set("s", "text");
        graph.set("n", 42i64);
        graph.set("f", 2.5);
        graph.set("b", true);
        graph.set("z", Value::Null);
        let out = render(&graph).unwrap();
        assert!(out.contains("s: \"text\""));
        assert!(out.contains("n: 42"));
        assert!(out.contains("f: 2.5"));
        assert!(out.contains("b: true"));
        assert!(out.contains("z: null"));
    }

    #[test]
    fn nested_graphs_unwrap_transparently() {
        let mut graph = OptionGraph::new();
        graph.set("chart.type", "area");
        let out = render(&graph).unwrap();
        assert_eq!(out, "{\n  chart: {\n    type: \"area\"\n  }\n}");
    }

    #[test]
    fn callback_body_is_raw() {
        let mut graph = OptionGraph::new();
        graph.set("f", Callback::new("function(){return 1;}"));
        let out = render(&graph).unwrap();
        assert!(out.contains("f: function(){return 1;}"));
        assert!(!out.contains("\"function"));
    }

    #[test]
    fn instant_renders_zero_based_month() {
        let mut graph = OptionGraph::new();
        graph.set("d", UtcInstant::new(2020, 1, 2, 3, 4, 5));
        let out = render(&graph).unwrap();
        assert!(out.contains("d: Date.UTC(2020,0,2,3,4,5)"));
    }

    #[test]
    fn non_identifier_keys_are_quoted() {
        let mut graph = OptionGraph::new();
        graph.insert("data-label", 1i64);
        graph.insert("plain", 2i64);
        let out = render(&graph).unwrap();
        assert!(out.contains("\"data-label\": 1"));
        assert!(out.contains("plain: 2"));
    }

    #[test]
    fn string_values_are_escaped() {
        let mut graph = OptionGraph::new();
        graph.set("t", "line1\n\"two\"");
        let out = render(&graph).unwrap();
        assert!(out.contains(r#"t: "line1\n\"two\"""#));
    }

    #[test]
    fn leaf_sequence_is_one_line() {
        let mut graph = OptionGraph::new();
        graph.set("data", Value::Sequence(vec![1i64.into(), 2i64.into(), 3i64.into()]));
        let out = render(&graph).unwrap();
        assert!(out.contains("data: [1, 2, 3]"));
    }

    #[test]
    fn container_sequence_is_multi_line() {
        let mut series = OptionGraph::new();
        series.set("name", "Rain");
        let mut graph = OptionGraph::new();
        graph.set("series", Value::Sequence(vec![Value::Graph(series)]));
        let out = render(&graph).unwrap();
        assert_eq!(
            out,
            "{\n  series: [\n    {\n      name: \"Rain\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn empty_containers() {
        let mut graph = OptionGraph::new();
        graph.set("a", OptionGraph::new());
        graph.set("b", Value::Sequence(vec![]));
        let out = render(&graph).unwrap();
        assert!(out.contains("a: {}"));
        assert!(out.contains("b: []"));
    }

    #[test]
    fn ext_leaf_uses_registered_encoder() {
        let renderer = Renderer::new().with_encoder("verbatim", |payload| {
            payload
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| "payload must be a string".to_string())
        });
        let mut graph = OptionGraph::new();
        graph.set("raw", ExtLeaf::new("verbatim", json!("window.innerWidth")));
        let out = renderer.render(&graph).unwrap();
        assert!(out.contains("raw: window.innerWidth"));
    }

    #[test]
    fn unregistered_kind_fails_whole_render() {
        let mut graph = OptionGraph::new();
        graph.set("ok", 1i64);
        graph.set("chart.bad", ExtLeaf::new("mystery", json!(null)));
        let err = render(&graph).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnregisteredKind {
                kind: "mystery".to_string(),
                path: "chart.bad".to_string(),
            }
        );
    }

    #[test]
    fn failing_encoder_reports_path_and_message() {
        let renderer = Renderer::new().with_encoder("verbatim", |payload| {
            payload
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| "payload must be a string".to_string())
        });
        let mut graph = OptionGraph::new();
        graph.set("raw", ExtLeaf::new("verbatim", json!(5)));
        let err = renderer.render(&graph).unwrap_err();
        assert_eq!(
            err,
            RenderError::Encoder {
                kind: "verbatim".to_string(),
                path: "raw".to_string(),
                message: "payload must be a string".to_string(),
            }
        );
    }

    #[test]
    fn empty_callback_fails() {
        let mut graph = OptionGraph::new();
        graph.set("events.load", Callback::new("   "));
        let err = render(&graph).unwrap_err();
        assert_eq!(
            err,
            RenderError::EmptyCallback {
                path: "events.load".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_instant_fails_with_sequence_index_path() {
        let mut graph = OptionGraph::new();
        graph.set(
            "xAxis.categories",
            Value::Sequence(vec![UtcInstant::new(2020, 13, 1, 0, 0, 0).into()]),
        );
        let err = render(&graph).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidInstant {
                path: "xAxis.categories.0".to_string()
            }
        );
    }

    #[test]
    fn renderer_tab_is_configurable() {
        let mut graph = OptionGraph::new();
        graph.set("a.b", 1i64);
        let out = Renderer::new().with_tab("    ").render(&graph).unwrap();
        assert_eq!(out, "{\n    a: {\n        b: 1\n    }\n}");
    }
}
