use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::rules::condition::Condition;

/// A variant of an archetype, evaluated only after the parent matched
///
/// A matching variant overrides the parent's name but not its
/// include-color flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantDefinition {
    pub name: String,

    /// Conditions on top of the parent's, all of which must hold
    pub conditions: Vec<Condition>,
}

impl VariantDefinition {
    /// Check structural validity; returns the reason on failure
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("variant has an empty name".to_string());
        }
        if self.conditions.is_empty() {
            return Err(format!(
                "variant '{}' has no conditions and would match every deck",
                self.name
            ));
        }
        validate_conditions(&self.conditions)
    }
}

/// A named archetype defined by a conjunction of conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    pub name: String,

    /// Prepend the deck's color identity name to the archetype name
    #[serde(default)]
    pub include_color_in_name: bool,

    /// All conditions must hold (logical AND)
    pub conditions: Vec<Condition>,

    /// Variants evaluated in order once the parent matches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantDefinition>,
}

impl ArchetypeDefinition {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("archetype has an empty name".to_string());
        }
        if self.conditions.is_empty() {
            // An empty conjunction is vacuously true; reject it at load time
            // so a rule file cannot claim every deck.
            return Err("archetype has no conditions and would match every deck".to_string());
        }
        validate_conditions(&self.conditions)?;
        for variant in &self.variants {
            variant.validate()?;
        }
        Ok(())
    }
}

/// A looser, similarity-based match used when no strict rule fires
///
/// The deck's distinct mainboard names are compared against `common_cards`
/// by Jaccard similarity; `conditions` (if any) must all hold before
/// similarity is even considered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackDefinition {
    pub name: String,

    /// Prepend the deck's color identity name to the fallback name
    #[serde(default)]
    pub include_color_in_name: bool,

    /// Reference card set for similarity scoring
    pub common_cards: Vec<String>,

    /// Optional gate conditions, all of which must hold
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    /// Distinct reference names, precomputed on load
    #[serde(skip)]
    pub common_set: HashSet<String>,
}

impl FallbackDefinition {
    /// Rebuild the precomputed reference set after deserialization
    pub fn rebuild_indexes(&mut self) {
        self.common_set = self.common_cards.iter().cloned().collect();
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("fallback has an empty name".to_string());
        }
        if self.common_cards.is_empty() {
            return Err("fallback has an empty reference card set".to_string());
        }
        validate_conditions(&self.conditions)
    }
}

/// Conditions referencing no cards are authoring mistakes: positive kinds
/// could never hold and negative kinds always would.
fn validate_conditions(conditions: &[Condition]) -> Result<(), String> {
    for condition in conditions {
        if condition.cards.is_empty() {
            return Err(format!(
                "{:?} condition references no cards",
                condition.kind
            ));
        }
    }
    Ok(())
}
