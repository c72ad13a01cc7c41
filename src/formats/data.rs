//! Data formats backed by serde
//!
//! These render the same tree as the XML output, one object per node tagged with its
//! `kind`. An unresolved constant reference has a `null` value here rather than the
//! `undefined` sentinel used in XML text.

use crate::ast::Document;
use crate::formats::{Format, FormatError};

/// The `json` output format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        JsonFormat { pretty }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON object with a `nodes` array"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        rendered.map_err(|e| FormatError::SerializationError {
            format: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

/// The `yaml` output format
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML mapping with a `nodes` sequence"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError {
            format: self.name().to_string(),
            message: e.to_string(),
        })
    }
}
