//! Constant table built from `global` declarations during one parse pass

use std::collections::HashMap;

/// Name to raw value mapping for declared globals
///
/// A later declaration of the same name replaces the earlier value, so a lookup always
/// sees the most recent declaration processed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    values: HashMap<String, String>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) a constant, returning the value it replaced
    pub fn declare(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
