use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::rules::definition::{ArchetypeDefinition, FallbackDefinition};

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rule file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse rule file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid definition '{definition}': {reason}")]
    InvalidDefinition { definition: String, reason: String },

    #[error("Duplicate archetype name '{0}'")]
    DuplicateArchetype(String),
}

/// Serializable rule-file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesFile {
    /// Format these rules apply to (e.g. "Modern")
    pub format: String,

    /// Ordered archetype definitions; order is the match priority
    pub archetypes: Vec<ArchetypeDefinition>,

    /// Fallbacks tried when no archetype matches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<FallbackDefinition>,
}

/// The loaded, validated, read-only rule set for one format
///
/// Loaded once per run and then only read; the classification engine
/// borrows it immutably, which is what makes per-deck classification
/// freely parallelizable.
#[derive(Debug)]
pub struct RuleRepository {
    /// Format these rules apply to
    pub format: String,

    /// Archetypes in match-priority order
    pub archetypes: Vec<ArchetypeDefinition>,

    /// Fallbacks in definition order
    pub fallbacks: Vec<FallbackDefinition>,

    /// Index: archetype name -> index in `archetypes`
    name_to_index: HashMap<String, usize>,
}

impl RuleRepository {
    /// Load the embedded demo ruleset for the Modern format
    pub fn load_embedded() -> Result<Self, RulesError> {
        const EMBEDDED_RULES: &str = include_str!("../../rulesets/modern.json");
        Self::from_json(EMBEDDED_RULES)
    }

    /// Load a rule file from disk
    pub fn load_from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a rule file
    ///
    /// Fails fast on the first malformed definition; a run never proceeds
    /// with partially loaded rules.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let file: RulesFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Validate an already-deserialized rule file
    pub fn from_file(file: RulesFile) -> Result<Self, RulesError> {
        let mut name_to_index = HashMap::new();

        for (index, archetype) in file.archetypes.iter().enumerate() {
            archetype
                .validate()
                .map_err(|reason| RulesError::InvalidDefinition {
                    definition: archetype.name.clone(),
                    reason,
                })?;
            if name_to_index.insert(archetype.name.clone(), index).is_some() {
                return Err(RulesError::DuplicateArchetype(archetype.name.clone()));
            }
        }

        let mut fallbacks = file.fallbacks;
        for fallback in &mut fallbacks {
            fallback
                .validate()
                .map_err(|reason| RulesError::InvalidDefinition {
                    definition: fallback.name.clone(),
                    reason,
                })?;
            fallback.rebuild_indexes();
        }

        Ok(Self {
            format: file.format,
            archetypes: file.archetypes,
            fallbacks,
            name_to_index,
        })
    }

    /// Get an archetype definition by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArchetypeDefinition> {
        self.name_to_index
            .get(name)
            .map(|&index| &self.archetypes[index])
    }

    /// Number of archetype definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}
