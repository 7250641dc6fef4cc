//! Tracing configuration for the routegen binary.
//!
//! Supports three output formats controlled by `ROUTEGEN_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one span per
//!   resolved entity
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why was a controller dropped?
//! ROUTEGEN_LOG=debug ROUTEGEN_LOG_FORMAT=tree routegen dumps/
//!
//! # Attribute-level decisions for one crate
//! ROUTEGEN_LOG="routegen_resolver=trace" routegen dumps/
//! ```
//!
//! The subscriber is only initialised when `ROUTEGEN_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("ROUTEGEN_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `ROUTEGEN_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("ROUTEGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ROUTEGEN_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with the route model on stdout.
pub fn init_tracing() {
    let has_routegen_log = std::env::var("ROUTEGEN_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_routegen_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
