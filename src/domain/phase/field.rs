use std::fmt;

use serde::{Deserialize, Serialize};

/// Input widget kinds a phase form can declare.
///
/// The kind is carried for form rendering and validation layers; prompt
/// assembly never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Boolean,
    Dropdown,
    MultiSelect,
}

impl FieldType {
    /// All available field types in declaration order.
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Dropdown,
        FieldType::MultiSelect,
    ];

    /// Identifier used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Dropdown => "dropdown",
            FieldType::MultiSelect => "multi-select",
        }
    }

    /// Parse a field type from its catalog identifier.
    pub fn from_name(name: &str) -> Option<FieldType> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named input slot in a phase's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Key used to look the value up in a form submission.
    pub name: String,
    /// Position in the field sequence.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    /// Allowed values for dropdown and multi-select fields.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

fn default_required() -> bool {
    true
}

impl Field {
    /// Create a required text field.
    pub fn new(name: impl Into<String>, order: i64) -> Self {
        Self {
            name: name.into(),
            order,
            label: String::new(),
            field_type: FieldType::Text,
            placeholder: None,
            required: default_required(),
            options: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }
}
