//! The dotted-path merge graph.
//!
//! An [`OptionGraph`] is a mutable tree of string-keyed nodes addressed by
//! `.`-separated paths. Writes auto-vivify intermediate nodes, replace
//! wholesale at the terminal key, and never fail: a write that would have
//! to descend through a scalar, sequence, or opaque leaf is silently
//! dropped and the existing value kept. That tolerance is the contract —
//! callers build speculative paths from optional bound data without
//! presence checks — so the only observability for dropped writes is the
//! [`OptionGraph::dropped_writes`] counter and a `tracing` debug event.

use indexmap::map::Entry;
use indexmap::IndexMap;

use chartopt_keypath::split_first;

use crate::value::Value;

/// A node in the option tree.
///
/// Child order is insertion order and is preserved through cloning and
/// overlays, which keeps rendering deterministic.
#[derive(Debug, Clone, Default)]
pub struct OptionGraph {
    nodes: IndexMap<String, Value>,
    dropped: u64,
}

impl OptionGraph {
    pub fn new() -> OptionGraph {
        OptionGraph::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Top-level entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Store `value` directly under `key`, replacing any prior value.
    ///
    /// Unlike [`set`](OptionGraph::set), the key is never split: a key
    /// containing `.` becomes one literal child key. This is the escape
    /// hatch conversions from external maps use.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut OptionGraph {
        self.nodes.insert(key.into(), value.into());
        self
    }

    /// Assign `value` at the dotted `path`, replacing whatever was at the
    /// terminal key — scalar, sequence, or whole subtree alike.
    ///
    /// Missing intermediate nodes are created as empty graphs. If an
    /// intermediate key already holds a non-graph value, the write is
    /// dropped and the existing value kept; no error is raised.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut OptionGraph {
        self.set_value(path, value.into());
        self
    }

    fn set_value(&mut self, path: &str, value: Value) {
        let (head, rest) = split_first(path);
        let Some(rest) = rest else {
            self.nodes.insert(head.to_string(), value);
            return;
        };
        match self.nodes.entry(head.to_string()) {
            Entry::Vacant(slot) => {
                let mut child = OptionGraph::new();
                child.set_value(rest, value);
                slot.insert(Value::Graph(child));
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Graph(child) => child.set_value(rest, value),
                _ => {
                    self.dropped += 1;
                    tracing::debug!(path, head, "dropped write through non-traversable value");
                }
            },
        }
    }

    /// Read the value at the dotted `path`.
    ///
    /// Returns `None` for absent keys and whenever traversal would have to
    /// descend through a non-graph value — sequences are deliberately not
    /// path-addressable.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let (head, rest) = split_first(path);
        match rest {
            None => self.nodes.get(head),
            Some(rest) => match self.nodes.get(head)? {
                Value::Graph(child) => child.get(rest),
                _ => None,
            },
        }
    }

    /// Overlay the top-level entries of `overlay` onto this graph.
    ///
    /// Single-level merge: each top-level key of the overlay is `set` on
    /// this graph, so a subtree in the overlay replaces the base subtree
    /// under the same key wholesale. Keys only in the base are untouched.
    /// The overlay is read-only — shared defaults graphs stay pristine —
    /// and `apply(None)` is a no-op.
    pub fn apply<'a>(&mut self, overlay: impl Into<Option<&'a OptionGraph>>) -> &mut OptionGraph {
        let Some(overlay) = overlay.into() else {
            return self;
        };
        for key in overlay.keys() {
            let value = overlay.get(key).cloned().unwrap_or(Value::Null);
            self.set_value(key, value);
        }
        self
    }

    /// Total writes dropped at non-traversable boundaries in this subtree.
    ///
    /// Production behavior never changes on a drop; this exists so tests
    /// can assert that nothing was silently discarded.
    pub fn dropped_writes(&self) -> u64 {
        self.dropped + self.nodes.values().map(value_drops).sum::<u64>()
    }
}

fn value_drops(value: &Value) -> u64 {
    match value {
        Value::Graph(graph) => graph.dropped_writes(),
        Value::Sequence(items) => items.iter().map(value_drops).sum(),
        _ => 0,
    }
}

// Identity is the tree contents; diagnostic counters don't participate.
impl PartialEq for OptionGraph {
    fn eq(&self, other: &OptionGraph) -> bool {
        self.nodes == other.nodes
    }
}
