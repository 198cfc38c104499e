//! Plugin capability interface and the ordered plugin chain.
//!
//! A [`Plugin`] contributes text fragments at fixed hook points of the
//! generated mock. Every hook has a default implementation that contributes
//! nothing, so a plugin only implements the hooks it cares about.
//!
//! [`PluginSet`] runs a hook across all registered plugins in registration
//! order and concatenates what they return. The generator never inspects
//! the merged fragments.
//!
//! # Examples
//!
//! ```
//! use cmockgen_codegen::{FunctionHook, Plugin, PluginSet};
//! use cmockgen_core::{FunctionDescriptor, Result};
//!
//! #[derive(Debug)]
//! struct CallCounter;
//!
//! impl Plugin for CallCounter {
//!     fn name(&self) -> &str {
//!         "call_counter"
//!     }
//!
//!     fn instance_structure(&self, function: &FunctionDescriptor) -> Result<Vec<String>> {
//!         Ok(vec![format!("  int {}_CallCount;\n", function.name())])
//!     }
//! }
//!
//! let plugins = PluginSet::new().with(CallCounter);
//! let function = FunctionDescriptor::builder("uart_read", "int").build();
//!
//! let fragments = plugins.run(FunctionHook::InstanceStructure, &function).unwrap();
//! assert_eq!(fragments, vec!["  int uart_read_CallCount;\n".to_string()]);
//! ```

use cmockgen_core::{Error, FunctionDescriptor, Result};
use std::fmt;

/// Code-generation capability contributing fragments at hook points.
pub trait Plugin: Send + Sync {
    /// Name used in logs and error reports.
    fn name(&self) -> &str;

    /// `#include` lines the mock source needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn include_files(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Fields added to the mock instance structure for `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn instance_structure(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Declarations added to the mock header for `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn mock_function_declarations(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Statements added to `<mock>_Verify` for `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn mock_verify(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Statements added to `<mock>_Destroy` for `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn mock_destroy(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Statements at the top of the stub body of `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn mock_implementation_prefix(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Statements in the stub body of `function`, before the return.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin cannot produce its fragment.
    fn mock_implementation(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Per-function hook points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionHook {
    /// [`Plugin::instance_structure`]
    InstanceStructure,
    /// [`Plugin::mock_function_declarations`]
    MockFunctionDeclarations,
    /// [`Plugin::mock_verify`]
    MockVerify,
    /// [`Plugin::mock_destroy`]
    MockDestroy,
    /// [`Plugin::mock_implementation_prefix`]
    MockImplementationPrefix,
    /// [`Plugin::mock_implementation`]
    MockImplementation,
}

impl FunctionHook {
    /// Hook name as used in logs and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InstanceStructure => "instance_structure",
            Self::MockFunctionDeclarations => "mock_function_declarations",
            Self::MockVerify => "mock_verify",
            Self::MockDestroy => "mock_destroy",
            Self::MockImplementationPrefix => "mock_implementation_prefix",
            Self::MockImplementation => "mock_implementation",
        }
    }

    fn invoke(self, plugin: &dyn Plugin, function: &FunctionDescriptor) -> Result<Vec<String>> {
        match self {
            Self::InstanceStructure => plugin.instance_structure(function),
            Self::MockFunctionDeclarations => plugin.mock_function_declarations(function),
            Self::MockVerify => plugin.mock_verify(function),
            Self::MockDestroy => plugin.mock_destroy(function),
            Self::MockImplementationPrefix => plugin.mock_implementation_prefix(function),
            Self::MockImplementation => plugin.mock_implementation(function),
        }
    }
}

impl fmt::Display for FunctionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of plugins.
///
/// Registration order is the order in which plugin fragments appear in
/// every generated block.
#[derive(Default)]
pub struct PluginSet {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginSet {
    /// Creates an empty plugin chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plugin, builder style.
    #[must_use]
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.register(Box::new(plugin));
        self
    }

    /// Appends a plugin.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        tracing::debug!("Registered plugin '{}'", plugin.name());
        self.plugins.push(plugin);
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` if no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Names of the registered plugins, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.name())
    }

    /// Collects every plugin's include lines into one fragment.
    ///
    /// # Errors
    ///
    /// Returns `Error::PluginFailed` for the first plugin that fails.
    pub fn include_files(&self) -> Result<String> {
        let mut merged = String::new();
        for plugin in &self.plugins {
            let lines = plugin
                .include_files()
                .map_err(|e| plugin_failure(plugin.as_ref(), "include_files", e))?;
            for line in lines {
                merged.push_str(&line);
            }
        }
        Ok(merged)
    }

    /// Runs `hook` for `function` across all plugins.
    ///
    /// # Errors
    ///
    /// Returns `Error::PluginFailed` for the first plugin that fails; no
    /// later plugin is queried.
    pub fn run(&self, hook: FunctionHook, function: &FunctionDescriptor) -> Result<Vec<String>> {
        let mut merged = Vec::new();
        for plugin in &self.plugins {
            let lines = hook
                .invoke(plugin.as_ref(), function)
                .map_err(|e| plugin_failure(plugin.as_ref(), hook.as_str(), e))?;
            merged.extend(lines);
        }
        Ok(merged)
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSet")
            .field("plugins", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

fn plugin_failure(plugin: &dyn Plugin, hook: &str, error: Error) -> Error {
    if error.is_plugin_error() {
        return error;
    }
    tracing::warn!("Plugin '{}' failed in hook '{}': {}", plugin.name(), hook, error);
    Error::PluginFailed {
        plugin: plugin.name().to_string(),
        hook: hook.to_string(),
        message: error.to_string(),
    }
}
