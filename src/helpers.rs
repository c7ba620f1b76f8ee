//! Template helper registry
//!
//! A helper is a named, stateless function invoked from a template
//! expression. The host passes the declared positional arguments plus the
//! current render context; the return value is substituted into the output.
//!
//! The registry is filled once at setup and then shared read-only (usually
//! behind an `Arc`) by every render, so lookups need no locking.

use crate::builtin;
use crate::config::HelperConfig;
use crate::error::{Error, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for helper function results
pub type HelperResult = Result<Value>;

/// Trait for template helper functions
pub trait Helper: Send + Sync {
    /// Execute the helper
    ///
    /// # Arguments
    /// * `args` - Positional arguments from the template expression
    /// * `context` - The data the template is being rendered with
    fn call(&self, args: &[Value], context: Option<&Value>) -> HelperResult;

    /// Number of positional parameters the helper declares
    fn arity(&self) -> usize;

    /// Get the helper's name (for debugging)
    fn name(&self) -> &str {
        "unnamed"
    }

    /// Get the helper's description (for documentation)
    fn description(&self) -> &str {
        "No description available"
    }

    /// Validate arguments before execution
    fn validate_args(&self, _args: &[Value]) -> Result<()> {
        Ok(())
    }
}

/// Function-based helper implementation
///
/// Arguments are bound to the declared arity before `func` runs: absent
/// trailing arguments become `Value::Null` and extra ones are dropped, so
/// `func` can index `args[..arity]` freely.
struct FunctionHelper<F>
where
    F: Fn(&[Value], Option<&Value>) -> HelperResult + Send + Sync,
{
    func: F,
    name: String,
    arity: usize,
    description: String,
}

impl<F> Helper for FunctionHelper<F>
where
    F: Fn(&[Value], Option<&Value>) -> HelperResult + Send + Sync,
{
    fn call(&self, args: &[Value], context: Option<&Value>) -> HelperResult {
        let bound = bind_args(&self.name, self.arity, args);
        (self.func)(&bound, context)
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Fit `args` to exactly `arity` values, padding with the missing sentinel
pub fn bind_args<'a>(name: &str, arity: usize, args: &'a [Value]) -> Cow<'a, [Value]> {
    match args.len() {
        n if n == arity => Cow::Borrowed(args),
        n if n > arity => {
            log::trace!(
                "Helper '{}' takes {} argument(s), ignoring {} extra",
                name,
                arity,
                n - arity
            );
            Cow::Borrowed(&args[..arity])
        }
        _ => {
            let mut bound = args.to_vec();
            bound.resize(arity, Value::Null);
            Cow::Owned(bound)
        }
    }
}

/// Registry for template helpers
pub struct HelperRegistry {
    helpers: HashMap<String, Arc<dyn Helper>>,
}

// Manual Debug implementation since Arc<dyn Helper> doesn't implement Debug
impl std::fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helper_count", &self.helpers.len())
            .field("helper_names", &self.list())
            .finish()
    }
}

impl HelperRegistry {
    /// Create a registry holding the built-in catalogue with default settings
    pub fn new() -> Self {
        Self::with_config(&HelperConfig::default())
    }

    /// Create a registry holding the built-in catalogue
    pub fn with_config(config: &HelperConfig) -> Self {
        let mut registry = Self::empty();
        builtin::register_builtins(&mut registry, config);
        registry
    }

    /// Create a registry with no helpers at all
    pub fn empty() -> Self {
        Self {
            helpers: HashMap::new(),
        }
    }

    /// Register a helper, replacing any previous helper with the same name
    pub fn register(&mut self, name: &str, helper: impl Helper + 'static) {
        if self.helpers.contains_key(name) {
            log::debug!("Replacing template helper: {}", name);
        } else {
            log::debug!("Registering template helper: {}", name);
        }
        self.helpers.insert(name.to_string(), Arc::new(helper));
    }

    /// Register a function as a helper
    pub fn register_fn<F>(&mut self, name: &str, arity: usize, description: &str, func: F)
    where
        F: Fn(&[Value], Option<&Value>) -> HelperResult + Send + Sync + 'static,
    {
        let helper = FunctionHelper {
            func,
            name: name.to_string(),
            arity,
            description: description.to_string(),
        };
        self.register(name, helper);
    }

    /// Get a helper by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Helper>> {
        self.helpers.get(name).cloned()
    }

    /// Check if a helper exists
    pub fn exists(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Get the number of registered helpers
    pub fn count(&self) -> usize {
        self.helpers.len()
    }

    /// List all registered helper names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.helpers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Arity and description of a helper
    pub fn describe(&self, name: &str) -> Option<(usize, String)> {
        self.helpers
            .get(name)
            .map(|h| (h.arity(), h.description().to_string()))
    }

    /// Call a helper by name
    pub fn call(&self, name: &str, args: &[Value], context: Option<&Value>) -> HelperResult {
        match self.helpers.get(name) {
            Some(helper) => {
                helper.validate_args(args)?;
                helper.call(args, context)
            }
            None => Err(Error::helper_not_found(name)),
        }
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
