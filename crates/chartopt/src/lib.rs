//! chartopt — chart option graphs and their JS-object-literal rendering.
//!
//! Charting libraries in the Highcharts family are configured with one big
//! nested options object. This crate assembles that object from multiple,
//! independently specified sources — bound data records, defaults overlays,
//! explicit per-path overrides — and renders it as the non-strict object
//! literal the browser evaluates: unquoted keys, raw function bodies, and
//! `Date.UTC(...)` call expressions alongside ordinary JSON data.
//!
//! - [`graph`] — [`OptionGraph`], the dotted-path merge tree.
//! - [`value`] — the [`Value`] union, including the raw-callback and
//!   calendar-instant leaf kinds.
//! - [`js_literal`] — the renderer and its pluggable leaf-encoder registry.
//! - [`series`] — helpers that turn collections of source records into the
//!   `series` subtree.
//!
//! # Example
//!
//! ```
//! use chartopt::{render, Callback, OptionGraph};
//!
//! let mut graph = OptionGraph::new();
//! graph
//!     .set("chart.type", "area")
//!     .set("title.text", "Monthly rainfall")
//!     .set("tooltip.formatter", Callback::new("function(){return this.y;}"));
//!
//! let js = render(&graph).unwrap();
//! assert!(js.contains("type: \"area\""));
//! assert!(js.contains("formatter: function(){return this.y;}"));
//! ```

pub mod graph;
pub mod js_literal;
pub mod series;
pub mod value;

pub use graph::OptionGraph;
pub use js_literal::{render, LeafEncoder, RenderError, Renderer};
pub use series::{build_series, ChartBuilder, SeriesMapping};
pub use value::{Callback, ExtLeaf, UtcInstant, Value};
