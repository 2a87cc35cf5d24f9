use anyhow::Result;
use annot::{MethodAnnotationInfo, ParameterSet, ResolvedAnnotations};
use colored::Colorize;

/// Renders resolved annotations as indented text.
///
/// ```text
/// App\BlogController (2 methods)
///   indexAction
///     @route
///       path = "/app/blog/"
///   createForm
///     (no annotations)
/// ```
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render_class(&self, resolved: &ResolvedAnnotations) -> String {
        let count = resolved.len();
        let mut out = format!(
            "{} ({} method{})\n",
            self.class_name(resolved.class_name()),
            count,
            if count == 1 { "" } else { "s" }
        );
        for (_, info) in resolved {
            self.write_method(&mut out, info, "  ");
        }
        out
    }

    pub fn render_method(&self, info: &MethodAnnotationInfo) -> String {
        let mut out = String::new();
        self.write_method(&mut out, info, "");
        out
    }

    fn write_method(&self, out: &mut String, info: &MethodAnnotationInfo, indent: &str) {
        out.push_str(indent);
        out.push_str(&self.method_name(info.name()));
        out.push('\n');
        self.write_parameters(out, info.parameters(), &format!("{indent}  "));
    }

    fn write_parameters(&self, out: &mut String, parameters: &ParameterSet, indent: &str) {
        if parameters.is_empty() {
            out.push_str(indent);
            out.push_str("(no annotations)\n");
            return;
        }
        for (group, params) in parameters {
            out.push_str(indent);
            out.push_str(&self.group_name(group));
            out.push('\n');
            for (name, value) in params {
                out.push_str(&format!("{indent}  {name} = {value}\n"));
            }
        }
    }

    fn class_name(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn method_name(&self, name: &str) -> String {
        if self.color {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }

    fn group_name(&self, group: &str) -> String {
        let label = format!("@{group}");
        if self.color {
            label.yellow().to_string()
        } else {
            label
        }
    }
}

pub fn render_json(resolved: &ResolvedAnnotations, pretty: bool) -> Result<String> {
    to_json(resolved, pretty)
}

pub fn render_method_json(info: &MethodAnnotationInfo, pretty: bool) -> Result<String> {
    to_json(info, pretty)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}
