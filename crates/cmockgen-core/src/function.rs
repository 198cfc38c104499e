//! Function descriptors handed over by the header parser.
//!
//! A [`FunctionDescriptor`] is the normalized, immutable representation of
//! one parsed C function signature. The generator only reads descriptors;
//! it never reorders or rewrites them.
//!
//! The parser exchanges descriptors as JSON using its own field names
//! (`rettype`, `args_string`, `var_arg`). Serde maps that wire shape onto
//! the typed representation, turning the parameter list into the tagged
//! [`Parameters`] enum.
//!
//! # Examples
//!
//! ```
//! use cmockgen_core::{FunctionDescriptor, Parameters};
//!
//! let json = r#"{
//!     "name": "uart_write",
//!     "rettype": "int",
//!     "args_string": "const char* buf, int len",
//!     "args": ["const char* buf", "int len"]
//! }"#;
//!
//! let function: FunctionDescriptor = serde_json::from_str(json).unwrap();
//! assert_eq!(function.name(), "uart_write");
//! assert_eq!(function.args().len(), 2);
//! assert_eq!(function.parameter_text(), "const char* buf, int len");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Parameter list of a C function.
///
/// C distinguishes `f()` (unspecified parameters) from `f(void)` (no
/// parameters), so both are kept apart from a real parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Parameters {
    /// Declared with empty parentheses.
    #[default]
    Empty,
    /// Declared with the literal `void`.
    Void,
    /// Any other declaration, kept verbatim.
    List {
        /// Parameter list text exactly as declared
        text: String,
        /// Individual parameter declarations, in order
        args: Vec<String>,
    },
}

impl Parameters {
    /// Classifies the parser's `(args_string, args)` pair.
    ///
    /// Only an exact `""` or `"void"` with no arguments is canonicalized;
    /// any other text is kept as declared, including surrounding spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::Parameters;
    ///
    /// assert_eq!(Parameters::from_parts("void", vec![]), Parameters::Void);
    /// assert_eq!(Parameters::from_parts("", vec![]), Parameters::Empty);
    /// assert!(matches!(
    ///     Parameters::from_parts("int a", vec!["int a".to_string()]),
    ///     Parameters::List { .. }
    /// ));
    /// ```
    #[must_use]
    pub fn from_parts(text: impl Into<String>, args: Vec<String>) -> Self {
        let text = text.into();
        if args.is_empty() {
            match text.as_str() {
                "" => return Self::Empty,
                "void" => return Self::Void,
                _ => {}
            }
        }
        Self::List { text, args }
    }

    /// Parameter list text exactly as declared.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Void => "void",
            Self::List { text, .. } => text,
        }
    }

    /// Individual parameter declarations.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Self::Empty | Self::Void => &[],
            Self::List { args, .. } => args,
        }
    }
}

/// One parsed C function signature.
///
/// Fields are private; descriptors are built once (by deserialization or
/// [`FunctionDescriptor::builder`]) and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireFunction", into = "WireFunction")]
pub struct FunctionDescriptor {
    name: String,
    return_type: String,
    modifier: Option<String>,
    attributes: Option<String>,
    parameters: Parameters,
    variadic: Option<String>,
}

impl FunctionDescriptor {
    /// Starts building a descriptor for `name` returning `return_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmockgen_core::FunctionDescriptor;
    ///
    /// let function = FunctionDescriptor::builder("SupaFunction", "int")
    ///     .args("uint32 sandwiches", vec!["uint32 sandwiches".to_string()])
    ///     .variadic("corn ...")
    ///     .build();
    ///
    /// assert_eq!(function.parameter_text(), "uint32 sandwiches, corn ...");
    /// ```
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> FunctionDescriptorBuilder {
        FunctionDescriptorBuilder::new(name, return_type)
    }

    /// Function identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return type expression.
    #[must_use]
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Storage-class or qualifier prefix, if declared.
    #[must_use]
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Compiler attribute text, if declared.
    #[must_use]
    pub fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }

    /// Parameter list.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Parameter list text exactly as declared.
    #[must_use]
    pub fn args_text(&self) -> &str {
        self.parameters.text()
    }

    /// Individual parameter declarations, in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.parameters.args()
    }

    /// Trailing variadic marker, if any.
    #[must_use]
    pub fn variadic(&self) -> Option<&str> {
        self.variadic.as_deref()
    }

    /// Full text between the parentheses of the mock definition.
    ///
    /// `args_text` alone, or `args_text, variadic` when a variadic marker
    /// is present.
    #[must_use]
    pub fn parameter_text(&self) -> String {
        match &self.variadic {
            Some(variadic) => format!("{}, {variadic}", self.args_text()),
            None => self.args_text().to_string(),
        }
    }

    /// Returns `true` if the function returns nothing.
    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type.trim() == "void"
    }
}

/// Builder for [`FunctionDescriptor`].
#[derive(Debug, Clone)]
pub struct FunctionDescriptorBuilder {
    inner: FunctionDescriptor,
}

impl FunctionDescriptorBuilder {
    fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            inner: FunctionDescriptor {
                name: name.into(),
                return_type: return_type.into(),
                modifier: None,
                attributes: None,
                parameters: Parameters::Empty,
                variadic: None,
            },
        }
    }

    /// Sets the storage-class or qualifier prefix.
    #[must_use]
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.inner.modifier = Some(modifier.into());
        self
    }

    /// Sets the compiler attribute text.
    #[must_use]
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.inner.attributes = Some(attributes.into());
        self
    }

    /// Sets the parameter list from declared text and individual arguments.
    #[must_use]
    pub fn args(mut self, text: impl Into<String>, args: Vec<String>) -> Self {
        self.inner.parameters = Parameters::from_parts(text, args);
        self
    }

    /// Sets the parameter list directly.
    #[must_use]
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.inner.parameters = parameters;
        self
    }

    /// Sets the trailing variadic marker.
    #[must_use]
    pub fn variadic(mut self, variadic: impl Into<String>) -> Self {
        self.inner.variadic = Some(variadic.into());
        self
    }

    /// Finishes the descriptor.
    #[must_use]
    pub fn build(self) -> FunctionDescriptor {
        self.inner
    }
}

/// Parser wire format of one function.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireFunction {
    name: String,
    rettype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<String>,
    #[serde(default)]
    args_string: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    var_arg: Option<String>,
}

impl From<WireFunction> for FunctionDescriptor {
    fn from(wire: WireFunction) -> Self {
        Self {
            name: wire.name,
            return_type: wire.rettype,
            modifier: wire.modifier,
            attributes: wire.attributes,
            parameters: Parameters::from_parts(wire.args_string, wire.args),
            variadic: wire.var_arg,
        }
    }
}

impl From<FunctionDescriptor> for WireFunction {
    fn from(function: FunctionDescriptor) -> Self {
        let args_string = function.args_text().to_string();
        let args = match function.parameters {
            Parameters::List { args, .. } => args,
            Parameters::Empty | Parameters::Void => Vec::new(),
        };
        Self {
            name: function.name,
            rettype: function.return_type,
            modifier: function.modifier,
            attributes: function.attributes,
            args_string,
            args,
            var_arg: function.variadic,
        }
    }
}

/// Output document of the header parser for one module.
///
/// # Examples
///
/// ```
/// use cmockgen_core::ParsedHeader;
///
/// let header = ParsedHeader::from_json_str(r#"{"functions": []}"#).unwrap();
/// assert!(header.functions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHeader {
    /// Functions in declaration order
    #[serde(default)]
    pub functions: Vec<FunctionDescriptor>,
}

impl ParsedHeader {
    /// Parses a parser document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if the text is not a valid
    /// parser document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError {
            message: format!("invalid function descriptor document: {e}"),
            source: Some(e),
        })
    }

    /// Reads a parser document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `Error::SerializationError` if its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!("Read function descriptors from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Names declared more than once, in first-occurrence order.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for function in &self.functions {
            *counts.entry(function.name()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for function in &self.functions {
            let name = function.name();
            if counts.get(name).copied().unwrap_or_default() > 1 && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_text_without_variadic() {
        let function = FunctionDescriptor::builder("SupaFunction", "bool")
            .args(
                "uint32 sandwiches, const char* named",
                vec!["uint32 sandwiches".to_string(), "const char* named".to_string()],
            )
            .build();

        assert_eq!(function.parameter_text(), "uint32 sandwiches, const char* named");
        assert_eq!(function.args().len(), 2);
    }

    #[test]
    fn test_parameter_text_with_variadic() {
        let function = FunctionDescriptor::builder("SupaFunction", "int")
            .args("uint32 sandwiches", vec!["uint32 sandwiches".to_string()])
            .variadic("corn ...")
            .build();

        assert_eq!(function.parameter_text(), "uint32 sandwiches, corn ...");
    }

    #[test]
    fn test_void_and_empty_parameters_are_distinct() {
        let void = FunctionDescriptor::builder("f", "void").args("void", vec![]).build();
        let empty = FunctionDescriptor::builder("g", "void").build();

        assert_eq!(void.parameters(), &Parameters::Void);
        assert_eq!(void.args_text(), "void");
        assert!(void.args().is_empty());
        assert_eq!(empty.parameters(), &Parameters::Empty);
        assert_eq!(empty.args_text(), "");
    }

    #[test]
    fn test_padded_parameter_text_kept_verbatim() {
        let padded = FunctionDescriptor::builder("f", "void").args(" void ", vec![]).build();
        let blank = FunctionDescriptor::builder("g", "void").args("  ", vec![]).build();

        assert_eq!(padded.args_text(), " void ");
        assert_eq!(padded.parameter_text(), " void ");
        assert!(padded.args().is_empty());
        assert_eq!(blank.args_text(), "  ");
    }

    #[test]
    fn test_optional_fields_absent_by_default() {
        let function = FunctionDescriptor::builder("f", "int").build();
        assert!(function.modifier().is_none());
        assert!(function.attributes().is_none());
        assert!(function.variadic().is_none());
        assert!(!function.returns_void());
    }

    #[test]
    fn test_deserialize_parser_wire_format() {
        let json = r#"{
            "name": "SupaFunction",
            "rettype": "bool",
            "modifier": "static",
            "attributes": "__inline",
            "args_string": "uint32 sandwiches",
            "args": ["uint32 sandwiches"],
            "var_arg": null
        }"#;

        let function: FunctionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(function.name(), "SupaFunction");
        assert_eq!(function.return_type(), "bool");
        assert_eq!(function.modifier(), Some("static"));
        assert_eq!(function.attributes(), Some("__inline"));
        assert_eq!(function.variadic(), None);
        assert_eq!(function.args(), ["uint32 sandwiches".to_string()]);
    }

    #[test]
    fn test_deserialize_void_args() {
        let json = r#"{"name": "reset", "rettype": "void", "args_string": "void", "args": []}"#;
        let function: FunctionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(function.parameters(), &Parameters::Void);
        assert!(function.returns_void());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let function = FunctionDescriptor::builder("f", "int")
            .args("int a", vec!["int a".to_string()])
            .build();
        let value = serde_json::to_value(&function).unwrap();
        assert_eq!(value["rettype"], "int");
        assert_eq!(value["args_string"], "int a");
        assert!(value.get("var_arg").is_none());
    }

    #[test]
    fn test_parsed_header_invalid_json() {
        let err = ParsedHeader::from_json_str("{\"functions\": [").unwrap_err();
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_parsed_header_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("uart.json");
        std::fs::write(
            &path,
            r#"{"functions": [{"name": "uart_init", "rettype": "void", "args_string": "void"}]}"#,
        )
        .unwrap();

        let header = ParsedHeader::from_file(&path).unwrap();
        assert_eq!(header.functions.len(), 1);
        assert_eq!(header.functions[0].name(), "uart_init");
    }

    #[test]
    fn test_parsed_header_missing_file() {
        let err = ParsedHeader::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_duplicate_names() {
        let header = ParsedHeader {
            functions: vec![
                FunctionDescriptor::builder("a", "int").build(),
                FunctionDescriptor::builder("b", "int").build(),
                FunctionDescriptor::builder("a", "int").build(),
                FunctionDescriptor::builder("a", "int").build(),
            ],
        };
        assert_eq!(header.duplicate_names(), vec!["a"]);
    }
}
