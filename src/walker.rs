//! Template tree traversal and output generation.
//! Combines path resolution and content rendering to produce the final
//! tree under the destination directory.

use crate::error::{Error, Result};
use crate::paths::resolve_entry_path;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Walks the template tree and writes every rendered entry under
/// `output_root/dest_name`.
///
/// Directories drive recursion but are never written themselves; parent
/// directories of each entry are created on demand. Entry paths are taken
/// relative to `templates_dir`, so the source tree prefix never appears in
/// output paths. The first error aborts the walk and leaves files written
/// by earlier entries in place.
pub fn walk(
    templates_dir: &Path,
    output_root: &Path,
    dest_name: &str,
    context: &serde_json::Value,
    engine: &dyn TemplateRenderer,
) -> Result<()> {
    for dir_entry in WalkDir::new(templates_dir).sort_by_file_name() {
        let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(templates_dir)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = relative_path.to_str().ok_or_else(|| {
            Error::TemplateError(format!(
                "non-unicode entry path: {}",
                relative_path.display()
            ))
        })?;

        debug!("Processing entry: {}", relative_path);

        let resolved = resolve_entry_path(relative_path, context, engine)?;
        let target = output_root.join(dest_name).join(&resolved);

        debug!("Resolved target: {}", target.display());

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = fs::read_to_string(entry.path())?;
        let rendered = engine.render(&content, context)?;
        fs::write(&target, rendered)?;

        println!("Rendered: '{}'", target.display());
    }

    Ok(())
}
