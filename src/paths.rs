//! Output path resolution for template entries.
//! Entry paths can themselves be templates, so a set can name generated
//! files after parameter values independently of their contents.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Opening marker of a template expression inside an entry path.
const EXPR_MARKER: &str = "{{";

/// Resolves the on-disk output path for a template entry.
///
/// The raw relative path is rendered as a template when it carries an
/// expression marker, then a trailing `.skl` tag is stripped. The suffix
/// check is exact-length and case-sensitive and applied once, so
/// `name.skl.skl` keeps one tag. Paths without expressions or tag pass
/// through verbatim.
pub fn resolve_entry_path(
    raw: &str,
    context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
) -> Result<String> {
    let rendered = if raw.contains(EXPR_MARKER) {
        engine.render(raw, context)?
    } else {
        raw.to_string()
    };

    match rendered.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(rendered),
    }
}
