//! Mock header and source generation.
//!
//! [`MockGenerator`] emits the fixed C skeleton of a mock and solicits
//! plugin fragments at each hook point. Each step appends to a
//! caller-supplied [`MockOutput`]; the drivers [`MockGenerator::create_header`]
//! and [`MockGenerator::create_source`] run the steps in their fixed order.
//!
//! Source layout:
//!
//! 1. preamble (includes)
//! 2. instance structure
//! 3. extern declarations
//! 4. one stub per function
//! 5. `<mock>_Verify`, `<mock>_Init`, `<mock>_Destroy`
//!
//! # Examples
//!
//! ```
//! use cmockgen_codegen::{GenerationContext, MockGenerator, MockOutput, PluginSet};
//! use cmockgen_core::{MockConfig, ModuleName};
//!
//! let config = MockConfig::default();
//! let context = GenerationContext::resolve(&config, ModuleName::new("uart")).unwrap();
//! let generator = MockGenerator::with_default_returns(context, PluginSet::new());
//!
//! let mut output = MockOutput::new();
//! generator.init_function(&mut output);
//!
//! assert_eq!(output.render(), "void Mockuart_Init(void)\n{\n  Mockuart_Destroy();\n}\n\n");
//! ```

use crate::context::GenerationContext;
use crate::output::{GeneratedFile, GeneratedMock, MockOutput};
use crate::plugin::{FunctionHook, PluginSet};
use crate::returns::{ReturnValueHandler, ZeroedReturn};
use cmockgen_core::{FunctionDescriptor, Result};
use std::fmt;
use std::path::Path;

const BANNER: &str = "/* AUTOGENERATED FILE. DO NOT EDIT. */\n";

/// Generator for one mocked module.
pub struct MockGenerator {
    context: GenerationContext,
    plugins: PluginSet,
    returns: Box<dyn ReturnValueHandler>,
}

impl MockGenerator {
    /// Creates a generator with a custom return-value handler.
    #[must_use]
    pub fn new(
        context: GenerationContext,
        plugins: PluginSet,
        returns: impl ReturnValueHandler + 'static,
    ) -> Self {
        Self {
            context,
            plugins,
            returns: Box::new(returns),
        }
    }

    /// Creates a generator whose stubs return zero-initialized values.
    #[must_use]
    pub fn with_default_returns(context: GenerationContext, plugins: PluginSet) -> Self {
        Self::new(context, plugins, ZeroedReturn)
    }

    /// Resolved generation context.
    #[must_use]
    pub const fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Registered plugin chain.
    #[must_use]
    pub const fn plugins(&self) -> &PluginSet {
        &self.plugins
    }

    fn mock_name(&self) -> &str {
        self.context.mock_name().as_str()
    }

    fn indent(&self) -> &str {
        self.context.indent()
    }

    /// Generates the mock header and source for `functions`.
    ///
    /// Either both files are produced or neither is.
    ///
    /// # Errors
    ///
    /// Propagates any plugin or return-handler failure.
    pub fn generate(&self, functions: &[FunctionDescriptor]) -> Result<GeneratedMock> {
        let mock_name = self.context.mock_name();
        tracing::info!(
            "Generating {} for {} function(s)",
            mock_name,
            functions.len()
        );

        let header = self.create_header(functions)?;
        let source = self.create_source(functions)?;

        let mut generated = GeneratedMock::new(mock_name.clone());
        generated.add_file(GeneratedFile {
            path: mock_name.header_file(),
            content: header.render(),
        });
        generated.add_file(GeneratedFile {
            path: mock_name.source_file(),
            content: source.render(),
        });

        tracing::info!("Generated {} ({} files)", mock_name, generated.file_count());
        Ok(generated)
    }

    /// Builds the complete mock header.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn create_header(&self, functions: &[FunctionDescriptor]) -> Result<MockOutput> {
        let mut output = MockOutput::new();
        self.header_preamble(&mut output, &self.context.mock_name().header_file());
        self.function_declarations(&mut output, functions)?;
        self.header_epilogue(&mut output);
        Ok(output)
    }

    /// Builds the complete mock source.
    ///
    /// # Errors
    ///
    /// Propagates any plugin or return-handler failure.
    pub fn create_source(&self, functions: &[FunctionDescriptor]) -> Result<MockOutput> {
        let mut output = MockOutput::new();
        self.source_preamble(&mut output, &self.context.mock_name().source_file())?;
        self.instance_structure(&mut output, functions)?;
        self.extern_declarations(&mut output);
        for function in functions {
            self.implementation(&mut output, function)?;
        }
        self.verify_function(&mut output, functions)?;
        self.init_function(&mut output);
        self.destroy_function(&mut output, functions)?;
        Ok(output)
    }

    /// Emits the banner, include guard, includes and lifecycle prototypes.
    pub fn header_preamble(&self, output: &mut MockOutput, header_filename: &str) {
        let guard = include_guard(header_filename);
        let mock_name = self.mock_name();

        output.push(BANNER);
        output.push(format!("#ifndef {guard}\n"));
        output.push(format!("#define {guard}\n\n"));
        output.push(self.context.include_block());
        output.push(format!(
            "#include \"{}\"\n\n",
            self.context.module_name().header_file()
        ));
        output.push(format!("void {mock_name}_Init(void);\n"));
        output.push(format!("void {mock_name}_Destroy(void);\n"));
        output.push(format!("void {mock_name}_Verify(void);\n\n"));
    }

    /// Emits each function's plugin declarations into the header.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn function_declarations(
        &self,
        output: &mut MockOutput,
        functions: &[FunctionDescriptor],
    ) -> Result<()> {
        for function in functions {
            output.extend(
                self.plugins
                    .run(FunctionHook::MockFunctionDeclarations, function)?,
            );
        }
        Ok(())
    }

    /// Closes the include guard.
    pub fn header_epilogue(&self, output: &mut MockOutput) {
        output.push("\n#endif\n");
    }

    /// Emits the banner and includes of the mock source.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn source_preamble(&self, output: &mut MockOutput, source_filename: &str) -> Result<()> {
        output.push(BANNER);
        output.push("#include <string.h>\n");
        output.push("#include <stdlib.h>\n");
        output.push("#include <setjmp.h>\n");
        output.push(format!("#include \"{}\"\n", self.context.framework_header()));
        output.push(self.plugins.include_files()?);
        output.push(format!("#include \"{}\"\n\n", companion_header(source_filename)));
        Ok(())
    }

    /// Emits the static instance structure holding all mock state.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn instance_structure(
        &self,
        output: &mut MockOutput,
        functions: &[FunctionDescriptor],
    ) -> Result<()> {
        let indent = self.indent();

        output.push(format!("static struct {}Instance\n", self.mock_name()));
        output.push("{\n");
        // C does not allow an empty struct.
        if functions.is_empty() {
            output.push(format!("{indent}unsigned char placeHolder;\n"));
        }
        output.push(format!("{indent}unsigned char allocFailure;\n"));
        for function in functions {
            output.extend(self.plugins.run(FunctionHook::InstanceStructure, function)?);
        }
        output.push("} Mock;\n\n");
        Ok(())
    }

    /// Emits the externs shared by all mocks for aborts and call ordering.
    pub fn extern_declarations(&self, output: &mut MockOutput) {
        output.push("extern jmp_buf AbortFrame;\n");
        output.push("extern int GlobalExpectOrder;\n");
        output.push("extern int GlobalVerifyOrder;\n");
        output.push("\n");
    }

    /// Emits `<mock>_Verify`.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn verify_function(
        &self,
        output: &mut MockOutput,
        functions: &[FunctionDescriptor],
    ) -> Result<()> {
        output.push(format!("void {}_Verify(void)\n{{\n", self.mock_name()));
        output.push(format!(
            "{}TEST_ASSERT_EQUAL(0, Mock.allocFailure);\n",
            self.indent()
        ));
        for function in functions {
            output.extend(self.plugins.run(FunctionHook::MockVerify, function)?);
        }
        output.push("}\n\n");
        Ok(())
    }

    /// Emits `<mock>_Init`, which simply resets the mock.
    pub fn init_function(&self, output: &mut MockOutput) {
        let mock_name = self.mock_name();
        output.push(format!("void {mock_name}_Init(void)\n{{\n"));
        output.push(format!("{}{mock_name}_Destroy();\n", self.indent()));
        output.push("}\n\n");
    }

    /// Emits `<mock>_Destroy`.
    ///
    /// Per-function teardown runs before the instance structure is wiped,
    /// since it may still read fields the `memset` clears.
    ///
    /// # Errors
    ///
    /// Propagates any plugin failure.
    pub fn destroy_function(
        &self,
        output: &mut MockOutput,
        functions: &[FunctionDescriptor],
    ) -> Result<()> {
        output.push(format!("void {}_Destroy(void)\n{{\n", self.mock_name()));
        for function in functions {
            output.extend(self.plugins.run(FunctionHook::MockDestroy, function)?);
        }
        output.push(format!(
            "{}memset(&Mock, 0, sizeof(Mock));\n",
            self.indent()
        ));
        output.push("}\n\n");
        Ok(())
    }

    /// Emits the stub definition replacing `function`.
    ///
    /// # Errors
    ///
    /// Propagates any plugin or return-handler failure.
    pub fn implementation(
        &self,
        output: &mut MockOutput,
        function: &FunctionDescriptor,
    ) -> Result<()> {
        if let Some(attributes) = function.attributes().filter(|a| !a.is_empty()) {
            output.push(format!("{attributes} "));
        }

        let modifier = function
            .modifier()
            .filter(|m| !m.is_empty())
            .map_or_else(String::new, |m| format!("{m} "));
        output.push(format!(
            "{modifier}{} {}({})\n",
            function.return_type(),
            function.name(),
            function.parameter_text()
        ));
        output.push("{\n");
        output.extend(
            self.plugins
                .run(FunctionHook::MockImplementationPrefix, function)?,
        );
        output.extend(self.plugins.run(FunctionHook::MockImplementation, function)?);
        output.push(
            self.returns
                .render_return_handling(function, self.indent())?,
        );
        output.push("}\n\n");
        Ok(())
    }
}

impl fmt::Debug for MockGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockGenerator")
            .field("context", &self.context)
            .field("plugins", &self.plugins)
            .finish_non_exhaustive()
    }
}

/// Include-guard symbol for a header file name.
///
/// `MockPoutPoutFish.h` becomes `_MOCKPOUTPOUTFISH_H`.
fn include_guard(header_filename: &str) -> String {
    let file_name = Path::new(header_filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(header_filename);

    let symbol: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("_{symbol}")
}

/// Header file name matching a source file name.
fn companion_header(source_filename: &str) -> String {
    let header = Path::new(source_filename).with_extension("h");
    header
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| format!("{source_filename}.h"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard("MockPoutPoutFish.h"), "_MOCKPOUTPOUTFISH_H");
        assert_eq!(include_guard("mocks/Mock_uart-v2.h"), "_MOCK_UART_V2_H");
        assert_eq!(include_guard("Mockadc"), "_MOCKADC");
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockGenerator>();
    }

    #[test]
    fn test_companion_header() {
        assert_eq!(companion_header("MockPoutPoutFish.c"), "MockPoutPoutFish.h");
        assert_eq!(companion_header("build/Mockuart.c"), "Mockuart.h");
        assert_eq!(companion_header("Mockspi"), "Mockspi.h");
    }
}
