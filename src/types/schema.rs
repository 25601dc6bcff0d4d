//! Data schema types for the wizard's tabular-extraction step.
//!
//! The user defines the columns of the table they want scraped; the schema
//! travels to the external extraction LLM as-is. Only shape and validation
//! live here.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// One column of the target table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    /// Stable identifier for UI bookkeeping
    pub id: String,

    /// Column name (snake_case by convention)
    pub name: String,

    /// What the extractor should look for
    pub description: String,

    /// An example value to anchor the extractor
    pub example: String,
}

impl DataField {
    /// Create a field with a name; description and example start empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            example: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the example value.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }
}

/// The full user-defined schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConfig {
    #[serde(default)]
    pub data_fields: Vec<DataField>,
}

impl SchemaConfig {
    /// Create a schema from fields.
    pub fn new(fields: impl IntoIterator<Item = DataField>) -> Self {
        Self {
            data_fields: fields.into_iter().collect(),
        }
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.data_fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Validate the schema: at least one field, every name non-empty and
    /// unique.
    pub fn validate(&self) -> Result<()> {
        if self.data_fields.is_empty() {
            return Err(AnalysisError::invalid_input("schema has no data fields"));
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.data_fields {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(AnalysisError::invalid_input(format!(
                    "field {} has an empty name",
                    field.id
                )));
            }
            if !seen.insert(name) {
                return Err(AnalysisError::invalid_input(format!(
                    "duplicate field name: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// The stock real-estate schema the wizard offers as a starting point.
pub fn property_fields() -> Vec<DataField> {
    [
        ("1", "reference_number", "Property reference (like SV2171)", "SV2171"),
        ("2", "price", "Price in euros (number only, no currency)", "650000"),
        ("3", "built_size", "Built area in square meters (number only)", "180"),
        ("4", "living_area", "Living area in square meters (number only)", "150"),
        ("5", "bedrooms", "Number of bedrooms (number only)", "3"),
        ("6", "bathrooms", "Number of bathrooms (number only)", "2"),
        ("7", "en_suite", "Number of en-suite bathrooms (number only)", "1"),
        ("8", "floors", "Number of floors (number only)", "2"),
        ("9", "terrace_size", "Terrace size in square meters (number only)", "25"),
        ("10", "plot_size", "Plot size in square meters (number only)", "500"),
        ("11", "pool", "Pool type (\"Private\", \"Communal\", or null)", "Private"),
        ("12", "garden", "Garden type (\"Private\", \"Communal\", or null)", "Private"),
    ]
    .into_iter()
    .map(|(id, name, description, example)| {
        DataField::new(id, name)
            .with_description(description)
            .with_example(example)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = SchemaConfig::new(property_fields());
        assert!(schema.validate().is_ok());
        assert_eq!(schema.field_names()[0], "reference_number");
    }

    #[test]
    fn test_empty_schema_rejected() {
        let schema = SchemaConfig::default();
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let schema = SchemaConfig::new([
            DataField::new("1", "price"),
            DataField::new("2", "price"),
        ]);
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let schema = SchemaConfig::new([DataField::new("1", "  ")]);
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let schema = SchemaConfig::new([DataField::new("1", "price")]);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["dataFields"][0]["name"], "price");
    }
}
