use super::ids::StructureId;
use super::model::Model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All models parsed for one occurrence of a structure identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: StructureId,
    pub models: Vec<Model>,
}

/// The models of one structure partitioned by score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitEntry {
    pub id: StructureId,
    pub native: Vec<Model>,
    pub decoy: Vec<Model>,
}

impl RawEntry {
    pub fn new(id: StructureId) -> Self {
        Self {
            id,
            models: Vec::new(),
        }
    }
}

impl SplitEntry {
    pub fn new(id: StructureId) -> Self {
        Self {
            id,
            native: Vec::new(),
            decoy: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.native.len() + self.decoy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetForm {
    Raw,
    Split,
}

impl fmt::Display for DatasetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatasetForm::Raw => "raw",
            DatasetForm::Split => "split",
        })
    }
}

/// A parsed ensemble, in one of its two shapes.
///
/// Entries keep the order in which their identifiers were first read. An
/// identifier that appears twice in the input yields two entries; lookups by
/// identifier return the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dataset {
    Raw(Vec<RawEntry>),
    Split(Vec<SplitEntry>),
}

impl Dataset {
    pub fn form(&self) -> DatasetForm {
        match self {
            Dataset::Raw(_) => DatasetForm::Raw,
            Dataset::Split(_) => DatasetForm::Split,
        }
    }

    /// Number of entries (not models).
    pub fn len(&self) -> usize {
        match self {
            Dataset::Raw(entries) => entries.len(),
            Dataset::Split(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<&StructureId> {
        match self {
            Dataset::Raw(entries) => entries.iter().map(|e| &e.id).collect(),
            Dataset::Split(entries) => entries.iter().map(|e| &e.id).collect(),
        }
    }

    pub fn model_count(&self) -> usize {
        match self {
            Dataset::Raw(entries) => entries.iter().map(|e| e.models.len()).sum(),
            Dataset::Split(entries) => entries.iter().map(SplitEntry::len).sum(),
        }
    }

    pub fn raw_entry(&self, id: &str) -> Option<&RawEntry> {
        match self {
            Dataset::Raw(entries) => entries.iter().find(|e| e.id.as_str() == id),
            Dataset::Split(_) => None,
        }
    }

    pub fn split_entry(&self, id: &str) -> Option<&SplitEntry> {
        match self {
            Dataset::Split(entries) => entries.iter().find(|e| e.id.as_str() == id),
            Dataset::Raw(_) => None,
        }
    }
}
