use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::classify::evaluator::evaluate_all;
use crate::classify::similarity::jaccard_similarity;
use crate::config::{AnalysisConfig, ConflictMode};
use crate::core::deck::Deck;
use crate::core::types::ClassificationMethod;
use crate::rules::definition::{ArchetypeDefinition, FallbackDefinition};
use crate::rules::repository::RuleRepository;

/// Result of classifying one deck
///
/// Produced once per deck and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched archetype, variant, or fallback name; "Unknown" otherwise
    pub archetype: String,

    /// How the classification was reached
    pub method: ClassificationMethod,

    /// 1.0 for rule and variant matches, the similarity score for
    /// fallbacks, 0.0 for Unknown
    pub confidence: f64,

    /// Should consumers prepend the deck's color identity name?
    pub include_color: bool,
}

impl ClassificationResult {
    /// The name Unknown decks are reported under
    pub const UNKNOWN: &'static str = "Unknown";

    fn unknown() -> Self {
        Self {
            archetype: Self::UNKNOWN.to_string(),
            method: ClassificationMethod::Unknown,
            confidence: 0.0,
            include_color: false,
        }
    }

    /// Final display label, prepending the color name when the matched
    /// definition asked for it and a color identity is known
    #[must_use]
    pub fn label(&self, color_name: Option<&str>) -> String {
        match color_name {
            Some(color) if self.include_color => format!("{color} {}", self.archetype),
            _ => self.archetype.clone(),
        }
    }
}

/// The rule-matching engine
///
/// Borrows a frozen [`RuleRepository`] and an immutable config; holds no
/// mutable state, so one engine can classify decks from many threads.
pub struct ClassificationEngine<'a> {
    rules: &'a RuleRepository,
    config: &'a AnalysisConfig,
}

impl<'a> ClassificationEngine<'a> {
    pub fn new(rules: &'a RuleRepository, config: &'a AnalysisConfig) -> Self {
        Self { rules, config }
    }

    /// Classify a single deck
    ///
    /// Terminal states: archetype match (possibly refined to a variant),
    /// fallback match, or Unknown. Never fails: Unknown is a valid result,
    /// not an error.
    #[must_use]
    pub fn classify(&self, deck: &Deck) -> ClassificationResult {
        if let Some(archetype) = self.match_archetype(deck) {
            return self.resolve_variant(archetype, deck);
        }

        if let Some((fallback, similarity)) = self.match_fallback(deck) {
            return ClassificationResult {
                archetype: fallback.name.clone(),
                method: ClassificationMethod::Fallback,
                confidence: similarity,
                include_color: fallback.include_color_in_name,
            };
        }

        trace!("no rule or fallback matched");
        ClassificationResult::unknown()
    }

    /// Find the matching archetype definition under the configured
    /// conflict-solving mode
    fn match_archetype(&self, deck: &Deck) -> Option<&'a ArchetypeDefinition> {
        match self.config.conflict_mode {
            ConflictMode::PreferFirst => self
                .rules
                .archetypes
                .iter()
                .find(|archetype| evaluate_all(&archetype.conditions, deck)),
            // Most conditions satisfied wins; ties keep rule-file order
            // because max_by_key returns the last maximum and we scan in
            // reverse.
            ConflictMode::MostSpecific => self
                .rules
                .archetypes
                .iter()
                .rev()
                .filter(|archetype| evaluate_all(&archetype.conditions, deck))
                .max_by_key(|archetype| archetype.conditions.len()),
        }
    }

    /// Refine a matched archetype to its first matching variant, if any
    ///
    /// The variant overrides the name only; the include-color flag stays
    /// the parent's.
    fn resolve_variant(
        &self,
        archetype: &ArchetypeDefinition,
        deck: &Deck,
    ) -> ClassificationResult {
        for variant in &archetype.variants {
            if evaluate_all(&variant.conditions, deck) {
                return ClassificationResult {
                    archetype: variant.name.clone(),
                    method: ClassificationMethod::Variant,
                    confidence: 1.0,
                    include_color: archetype.include_color_in_name,
                };
            }
        }

        ClassificationResult {
            archetype: archetype.name.clone(),
            method: ClassificationMethod::Archetype,
            confidence: 1.0,
            include_color: archetype.include_color_in_name,
        }
    }

    /// Best-scoring fallback whose gate conditions hold and whose
    /// similarity reaches the configured minimum; ties keep definition
    /// order
    fn match_fallback(&self, deck: &Deck) -> Option<(&'a FallbackDefinition, f64)> {
        let mut best: Option<(&FallbackDefinition, f64)> = None;

        for fallback in &self.rules.fallbacks {
            if !evaluate_all(&fallback.conditions, deck) {
                continue;
            }
            let similarity = jaccard_similarity(&deck.mainboard_names, &fallback.common_set);
            if similarity < self.config.fallback_min_similarity {
                continue;
            }
            if best.map_or(true, |(_, best_similarity)| similarity > best_similarity) {
                best = Some((fallback, similarity));
            }
        }

        best
    }
}
