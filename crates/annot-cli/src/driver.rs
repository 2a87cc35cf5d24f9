//! Resolve one class from parsed arguments and render the result.

use crate::args::{CliArgs, OutputFormat};
use crate::manifest::load_registry;
use crate::reporter::{Reporter, render_json, render_method_json};
use anyhow::{Context, Result};
use annot::AnnotationResolver;
use tracing::info;

/// Run the resolver for `args` and return what should be printed.
///
/// A `--method` that has no resolved annotations is reported in the output,
/// not as an error.
pub fn run(args: &CliArgs, color: bool) -> Result<String> {
    let registry = load_registry(&args.paths)?;

    let resolved = AnnotationResolver::new(&registry)
        .with_filter(args.filter.as_deref())
        .resolve(args.class.as_str())
        .with_context(|| format!("failed to resolve annotations of '{}'", args.class))?;
    info!(
        class = %args.class,
        methods = resolved.len(),
        "resolved annotations"
    );

    let reporter = Reporter::new(color);
    match args.method.as_deref() {
        Some(name) => match resolved.get_resolved(name) {
            Some(info) => match args.format {
                OutputFormat::Text => Ok(reporter.render_method(info)),
                OutputFormat::Json => render_method_json(info, args.pretty),
            },
            None => Ok(format!(
                "method '{name}' has no resolved annotations in '{}'\n",
                args.class
            )),
        },
        None => match args.format {
            OutputFormat::Text => Ok(reporter.render_class(&resolved)),
            OutputFormat::Json => render_json(&resolved, args.pretty),
        },
    }
}
