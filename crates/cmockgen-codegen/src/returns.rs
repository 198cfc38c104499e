//! Return-value handling at the end of each stub body.

use cmockgen_core::{FunctionDescriptor, Result};

/// Produces the fragment that hands a stub's return value back to the caller.
///
/// The generator calls this exactly once per stub, after all plugin
/// fragments, and appends the returned fragment verbatim.
pub trait ReturnValueHandler: Send + Sync {
    /// Renders the return statement(s) for `function`.
    ///
    /// # Errors
    ///
    /// Returns an error if no return code can be produced for the function.
    fn render_return_handling(
        &self,
        function: &FunctionDescriptor,
        indent: &str,
    ) -> Result<String>;
}

/// Returns a zero-initialized value of the function's return type.
///
/// The local is zero-initialized in its declaration, so const-qualified
/// return types are never written after initialization. Void functions get
/// an empty fragment.
///
/// # Examples
///
/// ```
/// use cmockgen_codegen::{ReturnValueHandler, ZeroedReturn};
/// use cmockgen_core::FunctionDescriptor;
///
/// let function = FunctionDescriptor::builder("uart_read", "int").build();
/// let code = ZeroedReturn.render_return_handling(&function, "  ").unwrap();
///
/// assert_eq!(code, "  int cmock_retval = {0};\n  return cmock_retval;\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroedReturn;

impl ReturnValueHandler for ZeroedReturn {
    fn render_return_handling(
        &self,
        function: &FunctionDescriptor,
        indent: &str,
    ) -> Result<String> {
        if function.returns_void() {
            return Ok(String::new());
        }

        let return_type = function.return_type();
        Ok(format!(
            "{indent}{return_type} cmock_retval = {{0}};\n{indent}return cmock_retval;\n"
        ))
    }
}
