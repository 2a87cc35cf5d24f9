//! Log output for binaries.
//!
//! Nothing is logged unless `ANNOT_LOG` (or, failing that, `RUST_LOG`) holds
//! a filter in `RUST_LOG` syntax. `ANNOT_LOG_FORMAT` picks the layout:
//!
//! - `text` (default): one line per event
//! - `tree`: events indented under the resolve span that produced them
//! - `json`: one JSON object per event
//!
//! ```bash
//! ANNOT_LOG=trace ANNOT_LOG_FORMAT=tree annot -c App\\UserController manifests/
//! ANNOT_LOG="annot_resolver=debug" annot -c App\\UserController manifests/
//! ```
//!
//! Everything goes to stderr; stdout carries only the report.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};
use tracing_tree::HierarchicalLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Pick the filter directives to use, `ANNOT_LOG` before `RUST_LOG`.
///
/// `None` means logging stays off.
pub fn filter_directives(annot_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    annot_log.or(rust_log)
}

/// Install the global subscriber if a log filter is configured.
pub fn init_tracing() {
    let Some(directives) = filter_directives(
        std::env::var("ANNOT_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    ) else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);
    let format = LogFormat::parse(&std::env::var("ANNOT_LOG_FORMAT").unwrap_or_default());

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Tree => HierarchicalLayer::new(2)
            .with_indent_lines(true)
            .with_targets(true)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
    };

    Registry::default().with(layer.with_filter(filter)).init();
}
