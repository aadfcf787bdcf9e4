//! skel's main application entry point and orchestration logic.
//! Handles command-line argument parsing, parameter document resolution,
//! and coordinates interactions between different modules.

use skel::{
    cli::{get_args, Args},
    editor::CommandEditor,
    error::{default_error_handler, Result},
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    store::resolve_document,
    template_set::TemplateSet,
    walker::walk,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the template set under the templates root
/// 2. Resolves the parameter document, optionally through the edit loop
/// 3. Injects the reserved `template` and `dest` keys
/// 4. Walks the template tree and writes the rendered output
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let bridge = CommandEditor;
    let prompter = DialoguerPrompter::new();

    let set = TemplateSet::locate(&args.templates, &args.template)?;
    let mut doc =
        resolve_document(&set.values_path(), args.edit, &args.editor, &bridge, &prompter)?;

    let dest = args.destination.unwrap_or_else(|| set.name.clone());
    doc.insert(
        "template".to_string(),
        serde_json::Value::String(set.name.clone()),
    );
    doc.insert("dest".to_string(), serde_json::Value::String(dest.clone()));

    let context = serde_json::Value::Object(doc.into_iter().collect());
    walk(&set.templates_dir(), &args.output, &dest, &context, &engine)?;

    println!(
        "Template generation completed successfully in {}.",
        args.output.join(&dest).display()
    );
    Ok(())
}
