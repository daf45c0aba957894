use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Field, PromptChunk};

/// The prompt template of a phase: chunks and fields, each in `order`.
///
/// Both sequences are sorted on construction with a stable sort, so entries
/// sharing an `order` value keep their insertion order. Chunks and fields are
/// only correlated by their position after sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DefinitionRecord", into = "DefinitionRecord")]
pub struct PhaseDefinition {
    chunks: Vec<PromptChunk>,
    fields: Vec<Field>,
}

#[derive(Serialize, Deserialize)]
struct DefinitionRecord {
    #[serde(default)]
    chunks: Vec<PromptChunk>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl From<DefinitionRecord> for PhaseDefinition {
    fn from(record: DefinitionRecord) -> Self {
        Self::new(record.chunks, record.fields)
    }
}

impl From<PhaseDefinition> for DefinitionRecord {
    fn from(definition: PhaseDefinition) -> Self {
        Self { chunks: definition.chunks, fields: definition.fields }
    }
}

impl PhaseDefinition {
    /// Build a definition from chunks and fields in insertion order.
    pub fn new(mut chunks: Vec<PromptChunk>, mut fields: Vec<Field>) -> Self {
        chunks.sort_by_key(|chunk| chunk.order);
        fields.sort_by_key(|field| field.order);
        Self { chunks, fields }
    }

    /// Chunks sorted ascending by `order`.
    pub fn chunks(&self) -> &[PromptChunk] {
        &self.chunks
    }

    /// Fields sorted ascending by `order`.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.fields.is_empty()
    }

    /// Look up a field by its form name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Report authoring mistakes that assembly tolerates but an editor should fix.
    ///
    /// Nothing reported here makes assembly fail: duplicate orders are resolved
    /// by insertion order and duplicate names resolve to the same form value.
    pub fn issues(&self) -> Vec<DefinitionIssue> {
        let mut issues = Vec::new();

        for pair in self.chunks.windows(2) {
            if pair[0].order == pair[1].order {
                issues.push(DefinitionIssue::DuplicateChunkOrder { order: pair[0].order });
            }
        }
        for pair in self.fields.windows(2) {
            if pair[0].order == pair[1].order {
                issues.push(DefinitionIssue::DuplicateFieldOrder { order: pair[0].order });
            }
        }
        issues.dedup();

        for chunk in self.chunks.iter().filter(|chunk| chunk.order < 0) {
            issues.push(DefinitionIssue::NegativeChunkOrder { order: chunk.order });
        }
        for field in self.fields.iter().filter(|field| field.order < 0) {
            issues.push(DefinitionIssue::NegativeFieldOrder {
                name: field.name.clone(),
                order: field.order,
            });
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                issues.push(DefinitionIssue::DuplicateFieldName { name: field.name.clone() });
            }
        }

        for (index, chunk) in self.chunks.iter().enumerate().skip(self.fields.len()) {
            if chunk.is_optional {
                issues.push(DefinitionIssue::UngatedOptionalChunk { index });
            }
        }

        issues
    }
}

/// A tolerated defect in a phase definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionIssue {
    /// Several chunks share an `order` value.
    DuplicateChunkOrder { order: i64 },
    /// Several fields share an `order` value.
    DuplicateFieldOrder { order: i64 },
    /// A chunk has an `order` below zero; it sorts ahead of every other chunk.
    NegativeChunkOrder { order: i64 },
    /// A field has an `order` below zero.
    NegativeFieldOrder { name: String, order: i64 },
    /// Several fields share a form name.
    DuplicateFieldName { name: String },
    /// An optional chunk has no field at its position and is always emitted.
    UngatedOptionalChunk { index: usize },
}

impl fmt::Display for DefinitionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateChunkOrder { order } => {
                write!(f, "multiple chunks share order {}; insertion order decides", order)
            }
            Self::DuplicateFieldOrder { order } => {
                write!(f, "multiple fields share order {}; insertion order decides", order)
            }
            Self::NegativeChunkOrder { order } => {
                write!(f, "chunk order {} is negative and sorts first", order)
            }
            Self::NegativeFieldOrder { name, order } => {
                write!(f, "field '{}' has negative order {} and sorts first", name, order)
            }
            Self::DuplicateFieldName { name } => {
                write!(f, "field name '{}' is declared more than once", name)
            }
            Self::UngatedOptionalChunk { index } => {
                write!(
                    f,
                    "optional chunk at position {} has no paired field and is always included",
                    index
                )
            }
        }
    }
}
