//! Resolved configuration snapshot for one generation run.

use cmockgen_core::{ContextSource, MockName, ModuleName, Result};

/// Values every generation step reads.
///
/// Built once by [`GenerationContext::resolve`], which queries each
/// [`ContextSource`] method exactly once. The context is read-only
/// afterwards; the mock name is derived at resolution time and cached.
///
/// # Examples
///
/// ```
/// use cmockgen_codegen::GenerationContext;
/// use cmockgen_core::{MockConfig, ModuleName};
///
/// let config = MockConfig::builder().mock_prefix("Mock").build();
/// let context = GenerationContext::resolve(&config, ModuleName::new("PoutPoutFish")).unwrap();
///
/// assert_eq!(context.mock_name().as_str(), "MockPoutPoutFish");
/// assert_eq!(context.indent(), "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    module_name: ModuleName,
    mock_name: MockName,
    indent: String,
    symbol_prefix: String,
    include_block: String,
    framework_header: String,
}

impl GenerationContext {
    /// Resolves the context for `module_name` from a configuration source.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub fn resolve<S>(source: &S, module_name: ModuleName) -> Result<Self>
    where
        S: ContextSource + ?Sized,
    {
        let indent = source.indent()?;
        let symbol_prefix = source.symbol_prefix()?;
        let include_block = source.include_block()?;
        let framework_header = source.framework_header()?;
        let mock_name = MockName::derive(&symbol_prefix, &module_name);

        tracing::debug!(
            module = %module_name,
            mock = %mock_name,
            "Resolved generation context"
        );

        Ok(Self {
            module_name,
            mock_name,
            indent,
            symbol_prefix,
            include_block,
            framework_header,
        })
    }

    /// Name of the mocked module.
    #[must_use]
    pub const fn module_name(&self) -> &ModuleName {
        &self.module_name
    }

    /// Root symbol of the mock (`symbol_prefix + module_name`).
    #[must_use]
    pub const fn mock_name(&self) -> &MockName {
        &self.mock_name
    }

    /// Indentation unit.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Symbol prefix the mock name was derived from.
    #[must_use]
    pub fn symbol_prefix(&self) -> &str {
        &self.symbol_prefix
    }

    /// Pre-rendered extra include directives.
    #[must_use]
    pub fn include_block(&self) -> &str {
        &self.include_block
    }

    /// Test framework header.
    #[must_use]
    pub fn framework_header(&self) -> &str {
        &self.framework_header
    }
}
