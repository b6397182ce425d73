//! `chart-render` — render a chart option graph as a JS object literal.
//!
//! Usage:
//!   chart-render [path=value]...
//!
//! The base document is read from stdin as a JSON object. Each argument
//! assigns a value at a dotted key path, applied in order after the
//! document is loaded; the value side is parsed as JSON, with bare words
//! falling back to strings. The rendered literal goes to stdout.

use std::io::{self, Read, Write};

use chartopt::{render, OptionGraph, Value};
use chartopt_keypath::validate_key_path;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc: serde_json::Value = match serde_json::from_str(buf.trim()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("stdin is not valid JSON: {e}");
            std::process::exit(1);
        }
    };
    let mut graph: OptionGraph = match Value::from(doc) {
        Value::Graph(graph) => graph,
        _ => {
            eprintln!("stdin document must be a JSON object");
            std::process::exit(1);
        }
    };

    for arg in std::env::args().skip(1) {
        let Some((path, raw)) = arg.split_once('=') else {
            eprintln!("argument must be path=value: {arg}");
            std::process::exit(1);
        };
        if let Err(e) = validate_key_path(path) {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
        let value: Value = match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(parsed) => parsed.into(),
            Err(_) => raw.into(),
        };
        graph.set(path, value);
    }

    match render(&graph) {
        Ok(text) => {
            io::stdout().write_all(text.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
