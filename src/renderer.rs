//! Template rendering functionality for stamp.
//! The renderer is an explicitly constructed instance injected into the
//! pipeline; no process-wide template engine state.

use minijinja::Environment;
use serde::Serialize;

use crate::error::{Error, Result};

/// The fixed set of named string values substituted into template
/// placeholders for one scaffolding run.
#[derive(Debug, Clone, Serialize)]
pub struct RenderParams {
    /// Generated invocation string, e.g. `npm init react-lib@0.2.1`
    pub exe: String,
    /// Version of the generator
    pub version: String,
    /// Project name, taken from the directory argument
    pub name: String,
    /// Derived package name, scoped as `@org/name` when an organization
    /// is given
    pub pkg: String,
    /// Organization scope, if any
    pub org: Option<String>,
}

impl RenderParams {
    pub fn new(name: &str, org: Option<&str>, exe: &str, version: &str) -> Self {
        let pkg = match org {
            Some(org) => format!("@{}/{}", org, name),
            None => name.to_string(),
        };
        Self {
            exe: exe.to_string(),
            version: version.to_string(),
            name: name.to_string(),
            pkg,
            org: org.map(str::to_string),
        }
    }

    /// Converts the parameters into a template context.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::Context)
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
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
    /// # Errors
    /// * `Error::Render` if:
    ///   - Template addition fails
    ///   - Template retrieval fails
    ///   - Template rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::Render)?;

        let tmpl = env.get_template("temp").map_err(Error::Render)?;

        tmpl.render(context).map_err(Error::Render)
    }
}
