//! Descriptor rendering for the command-line front end

use crate::attribute::AttributeDescriptor;
use crate::config::OutputFormat;

/// Render one descriptor in the requested format
pub fn render(
    attr: &AttributeDescriptor,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(attr)),
        OutputFormat::Canonical => Ok(attr.to_string()),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(attr),
        OutputFormat::Json => serde_json::to_string(attr),
    }
}

fn render_text(attr: &AttributeDescriptor) -> String {
    let ty = attr.attr_type();
    let mut out = format!("{}\n  type: {} ({})", attr.name(), ty, ty.generator_name());

    for (key, value) in attr.options() {
        out.push_str(&format!("\n  {}: {}", key, value));
    }
    out
}
