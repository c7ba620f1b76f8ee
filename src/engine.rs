//! Handlebars rendering host
//!
//! Every helper in a [`HelperRegistry`] is bridged into a `Handlebars`
//! instance under its registered name. Helpers return values rather than
//! writing to the output directly, so they work both as plain expressions
//! (`{{snakeCase name}}`) and as sub-expressions
//! (`{{#if (match "_id$" name)}}`).

use crate::config::HelperConfig;
use crate::error::{Error, Result};
use crate::helpers::{Helper, HelperRegistry};
use crate::template::Template;
use handlebars::{Context, Handlebars, HelperDef, RenderContext, RenderError, ScopedJson};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Adapts a registry helper to the handlebars calling convention
struct HelperBridge {
    helper: Arc<dyn Helper>,
}

impl HelperDef for HelperBridge {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &handlebars::Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> std::result::Result<ScopedJson<'reg, 'rc>, RenderError> {
        let args: Vec<Value> = h.params().iter().map(|p| p.value().clone()).collect();

        self.helper.validate_args(&args).map_err(to_render_error)?;
        let value = self
            .helper
            .call(&args, Some(ctx.data()))
            .map_err(to_render_error)?;

        Ok(ScopedJson::Derived(value))
    }
}

fn to_render_error(err: Error) -> RenderError {
    RenderError::new(err.to_string())
}

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

/// Template engine with the helper registry installed
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    registry: Arc<HelperRegistry>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create an engine using the built-in catalogue and default settings
    pub fn new() -> Self {
        let config = HelperConfig::default();
        Self::with_registry(Arc::new(HelperRegistry::with_config(&config)), &config)
    }

    /// Create an engine from a configuration
    pub fn with_config(config: &HelperConfig) -> Self {
        Self::with_registry(Arc::new(HelperRegistry::with_config(config)), config)
    }

    /// Create an engine around an already built registry
    pub fn with_registry(registry: Arc<HelperRegistry>, config: &HelperConfig) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(config.strict_mode);
        if !config.escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        for name in registry.list() {
            if let Some(helper) = registry.get(&name) {
                handlebars.register_helper(&name, Box::new(HelperBridge { helper }));
            }
        }
        log::debug!("Template engine ready with {} helpers", registry.count());

        Self {
            handlebars,
            registry,
        }
    }

    pub fn registry(&self) -> &HelperRegistry {
        &self.registry
    }

    /// Render a template source directly
    pub fn render<T: Serialize>(&self, source: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(source, data)
            .map_err(|e| Error::render(e.to_string()))
    }

    /// Register a partial, usable as `{{> name}}`
    pub fn register_partial(&mut self, name: &str, source: &str) -> Result<()> {
        log::debug!("Registering partial: {}", name);
        self.handlebars
            .register_partial(name, source)
            .map_err(|e| {
                Error::template(format!("Partial '{}' failed to compile: {}", name, e))
            })
    }

    /// Register a named template
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<()> {
        log::debug!("Registering template: {}", name);
        self.handlebars
            .register_template_string(name, source)
            .map_err(|e| {
                Error::template(format!("Template '{}' failed to compile: {}", name, e))
            })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a named template
    pub fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(Error::template(format!("Template '{}' not registered", name)));
        }
        self.handlebars
            .render(name, data)
            .map_err(|e| Error::render(e.to_string()))
    }

    /// Register a set of templates: partials as partials, the rest by name
    pub fn load(&mut self, templates: &[Template]) -> Result<()> {
        for template in templates {
            if template.is_partial() {
                self.register_partial(&template.name, &template.source)?;
            } else {
                self.register_template(&template.name, &template.source)?;
            }
        }
        Ok(())
    }

    /// Render a file-producing template: its body and its output path
    pub fn render_output<T: Serialize>(
        &self,
        template: &Template,
        data: &T,
    ) -> Result<RenderedFile> {
        let output = template.output.as_deref().ok_or_else(|| {
            Error::template(format!(
                "Template '{}' is a partial and has no output path",
                template.name
            ))
        })?;

        let content = if self.has_template(&template.name) {
            self.render_template(&template.name, data)?
        } else {
            self.render(&template.source, data)?
        };
        let path = self.render(output, data)?.trim().to_string();
        if path.is_empty() {
            return Err(Error::render(format!(
                "Template '{}' rendered an empty output path from '{}'",
                template.name, output
            )));
        }

        Ok(RenderedFile { path, content })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
