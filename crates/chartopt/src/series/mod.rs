//! Series construction from bound source records.
//!
//! Source records arrive as `serde_json::Value` documents exposing a
//! dotted-path lookup. [`build_series`] turns a collection of them into
//! the `series` subtree, one child graph per record; [`ChartBuilder`]
//! composes that with a defaults overlay and explicit per-path overrides
//! in the order the component layer expects.
//!
//! Field resolution is tolerant throughout: a record that cannot resolve a
//! path simply omits that field. A bad mapping never aborts the
//! collection.

use std::collections::HashMap;

use chartopt_keypath::lookup;

use crate::graph::OptionGraph;
use crate::value::Value;

/// Per-series keys forwarded from source records when they resolve.
const AUXILIARY_KEYS: [&str; 3] = ["pointStart", "pointInterval", "type"];

/// Where each series field comes from within a source record.
///
/// Resolution precedence per key, highest first:
/// 1. an explicit [`rename`](SeriesMapping::rename) entry,
/// 2. the alternate path binding ([`name_path`](SeriesMapping::name_path) /
///    [`data_path`](SeriesMapping::data_path), for those two keys only),
/// 3. the key itself.
#[derive(Debug, Clone, Default)]
pub struct SeriesMapping {
    renames: HashMap<String, String>,
    name_path: Option<String>,
    data_path: Option<String>,
}

impl SeriesMapping {
    pub fn new() -> SeriesMapping {
        SeriesMapping::default()
    }

    /// Map an output key to a record path.
    pub fn rename(mut self, key: impl Into<String>, path: impl Into<String>) -> SeriesMapping {
        self.renames.insert(key.into(), path.into());
        self
    }

    /// Alternate record path for the series `name`.
    pub fn name_path(mut self, path: impl Into<String>) -> SeriesMapping {
        self.name_path = Some(path.into());
        self
    }

    /// Alternate record path for the series `data`.
    pub fn data_path(mut self, path: impl Into<String>) -> SeriesMapping {
        self.data_path = Some(path.into());
        self
    }

    fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(path) = self.renames.get(key) {
            return path;
        }
        let alternate = match key {
            "name" => self.name_path.as_deref(),
            "data" => self.data_path.as_deref(),
            _ => None,
        };
        alternate.filter(|path| !path.is_empty()).unwrap_or(key)
    }
}

/// Build the `series` value from source records.
///
/// Each record yields one child graph with `name` and `data` resolved via
/// the mapping, plus the well-known auxiliary keys when present on the
/// record. Unresolvable fields are omitted per record.
pub fn build_series(records: &[serde_json::Value], mapping: &SeriesMapping) -> Value {
    let mut series = Vec::with_capacity(records.len());
    for record in records {
        let mut child = OptionGraph::new();
        for key in ["name", "data"] {
            if let Some(found) = lookup(record, mapping.resolve(key)) {
                child.set(key, Value::from_json(found));
            }
        }
        for key in AUXILIARY_KEYS {
            if let Some(found) = lookup(record, mapping.resolve(key)) {
                child.set(key, Value::from_json(found));
            }
        }
        series.push(Value::Graph(child));
    }
    Value::Sequence(series)
}

/// Assembles a complete option graph from its sources.
///
/// Build order matters and is fixed: the series subtree first, then the
/// bound overlay graph, then the raw dotted assignments — so the most
/// explicit source wins.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    records: Vec<serde_json::Value>,
    mapping: SeriesMapping,
    overlay: Option<OptionGraph>,
    assignments: Vec<(String, Value)>,
}

impl ChartBuilder {
    pub fn new() -> ChartBuilder {
        ChartBuilder::default()
    }

    /// Source records for the `series` subtree.
    pub fn records(mut self, records: impl IntoIterator<Item = serde_json::Value>) -> ChartBuilder {
        self.records.extend(records);
        self
    }

    pub fn mapping(mut self, mapping: SeriesMapping) -> ChartBuilder {
        self.mapping = mapping;
        self
    }

    /// A defaults/override graph applied after the series are built.
    pub fn overlay(mut self, overlay: OptionGraph) -> ChartBuilder {
        self.overlay = Some(overlay);
        self
    }

    /// Queue a raw dotted-path assignment, applied last.
    pub fn set(mut self, path: impl Into<String>, value: impl Into<Value>) -> ChartBuilder {
        self.assignments.push((path.into(), value.into()));
        self
    }

    pub fn build(self) -> OptionGraph {
        let mut graph = OptionGraph::new();
        if !self.records.is_empty() {
            graph.set("series", build_series(&self.records, &self.mapping));
        }
        graph.apply(self.overlay.as_ref());
        for (path, value) in self.assignments {
            graph.set(&path, value);
        }
        graph
    }
}
