//! Archetype rule definitions and the per-format rule repository.
//!
//! Rules are data, not code: a rule file is an ordered list of
//! [`ArchetypeDefinition`]s (with optional variants) plus
//! [`FallbackDefinition`]s, loaded once per run into a read-only
//! [`RuleRepository`]. Malformed definitions fail the load with an error
//! naming the offending definition; the pipeline never runs on a partially
//! loaded rule set.

pub mod condition;
pub mod definition;
pub mod repository;

pub use condition::{BoardScope, Condition, ConditionKind};
pub use definition::{ArchetypeDefinition, FallbackDefinition, VariantDefinition};
pub use repository::{RuleRepository, RulesError};
