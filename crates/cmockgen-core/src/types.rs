//! Strong domain types for mock generation.
//!
//! Module names and mock names are both plain identifiers in C, which makes
//! them easy to mix up. Newtypes keep them apart.
//!
//! # Examples
//!
//! ```
//! use cmockgen_core::{MockName, ModuleName};
//!
//! let module = ModuleName::new("PoutPoutFish");
//! let mock = MockName::derive("Mock", &module);
//! assert_eq!(mock.as_str(), "MockPoutPoutFish");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the C module being mocked (the header's base name).
///
/// # Examples
///
/// ```
/// use cmockgen_core::ModuleName;
///
/// let module = ModuleName::new("uart");
/// assert_eq!(module.as_str(), "uart");
/// assert_eq!(module.header_file(), "uart.h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(String);

impl ModuleName {
    /// Creates a new module name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the module name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the file name of the original module header.
    #[must_use]
    pub fn header_file(&self) -> String {
        format!("{}.h", self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Root symbol of a generated mock: symbol prefix followed by module name.
///
/// Every public symbol of the generated mock (`<mock>_Init`,
/// `<mock>_Verify`, the instance struct tag, the file names) is built
/// from this value.
///
/// # Examples
///
/// ```
/// use cmockgen_core::{MockName, ModuleName};
///
/// let mock = MockName::derive("Mock", &ModuleName::new("uart"));
/// assert_eq!(mock.header_file(), "Mockuart.h");
/// assert_eq!(mock.source_file(), "Mockuart.c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MockName(String);

impl MockName {
    /// Derives the mock name from a symbol prefix and module name.
    #[must_use]
    pub fn derive(prefix: &str, module: &ModuleName) -> Self {
        Self(format!("{prefix}{}", module.as_str()))
    }

    /// Returns the mock name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the generated mock header.
    #[must_use]
    pub fn header_file(&self) -> String {
        format!("{}.h", self.0)
    }

    /// File name of the generated mock source.
    #[must_use]
    pub fn source_file(&self) -> String {
        format!("{}.c", self.0)
    }
}

impl fmt::Display for MockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_name_is_prefix_plus_module() {
        let module = ModuleName::new("PoutPoutFish");
        assert_eq!(MockName::derive("Mock", &module).as_str(), "MockPoutPoutFish");
        assert_eq!(MockName::derive("", &module).as_str(), "PoutPoutFish");
    }

    #[test]
    fn test_module_display() {
        let module = ModuleName::from("spi");
        assert_eq!(format!("{module}"), "spi");
        assert_eq!(module.header_file(), "spi.h");
    }

    #[test]
    fn test_mock_file_names() {
        let mock = MockName::derive("Fake", &ModuleName::new("adc"));
        assert_eq!(mock.header_file(), "Fakeadc.h");
        assert_eq!(mock.source_file(), "Fakeadc.c");
        assert_eq!(mock.to_string(), "Fakeadc");
    }
}
