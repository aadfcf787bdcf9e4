//! Template rendering functionality for skel.
//! Wraps a MiniJinja environment extended with inflection filters so
//! template authors get the usual string helpers in entry paths and
//! contents alike.

use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the extended filter set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        env.add_filter("snake_case", |value: String| value.to_snake_case());
        env.add_filter("screaming_snake_case", |value: String| {
            value.to_screaming_snake_case()
        });
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("title_case", |value: String| value.to_title_case());
        env.add_filter("plural", |value: String| value.to_plural());
        env.add_filter("singular", |value: String| value.to_singular());
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// Rendering is pure: the same template and context always produce the
    /// same output. Undefined variables render as empty values; syntax and
    /// evaluation failures are returned as `Error::RenderError`.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("entry", template).map_err(Error::RenderError)?;

        let tmpl = env.get_template("entry").map_err(Error::RenderError)?;

        tmpl.render(context).map_err(Error::RenderError)
    }
}
