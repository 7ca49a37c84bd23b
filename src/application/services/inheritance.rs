//! Inheritance service
//!
//! String boundary around the resolver: parses user selections, fails on
//! anything outside the blood type sets, and shapes results for output.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{resolve, Explanation, Genotype, PresentationTree};

/// Outcome of one resolution, in the shape it is exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceReport {
    pub parent1_blood: Genotype,
    pub parent2_blood: Genotype,
    /// Possible child blood types in natural order
    pub predicted_blood: Vec<Genotype>,
}

impl InheritanceReport {
    pub fn to_json(&self) -> ApplicationResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ApplicationError::operation_failed("serialize report", e))
    }
}

/// Explanations for a free-form label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelExplanation {
    /// What the tree presenter shows for this label
    pub by_label: Explanation,
    /// Per-feature explanations, when the label is a blood type
    pub by_feature: Option<Vec<Explanation>>,
}

/// Service resolving child blood types from parent selections.
#[derive(Debug, Default)]
pub struct InheritanceService;

impl InheritanceService {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single selection such as `AB+`.
    pub fn parse(&self, input: &str) -> ApplicationResult<Genotype> {
        Ok(input.parse::<Genotype>()?)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, parent1: &str, parent2: &str) -> ApplicationResult<InheritanceReport> {
        let parent1 = self.parse(parent1)?;
        let parent2 = self.parse(parent2)?;
        Ok(self.report(parent1, parent2))
    }

    pub fn report(&self, parent1: Genotype, parent2: Genotype) -> InheritanceReport {
        let children = resolve(parent1, parent2);
        debug!("{} x {}: {} possible children", parent1, parent2, children.len());
        InheritanceReport {
            parent1_blood: parent1,
            parent2_blood: parent2,
            predicted_blood: children.into_iter().collect(),
        }
    }

    /// Build the presentation tree for two selections.
    #[instrument(level = "debug", skip(self))]
    pub fn tree(&self, parent1: &str, parent2: &str) -> ApplicationResult<PresentationTree> {
        let parent1 = self.parse(parent1)?;
        let parent2 = self.parse(parent2)?;
        Ok(PresentationTree::new(parent1, parent2, resolve(parent1, parent2)))
    }

    /// Reports for every ordered pair of blood types (64 entries).
    pub fn table(&self) -> Vec<InheritanceReport> {
        Genotype::all()
            .flat_map(|p1| Genotype::all().map(move |p2| (p1, p2)))
            .map(|(p1, p2)| self.report(p1, p2))
            .collect()
    }

    pub fn explain(&self, label: &str) -> LabelExplanation {
        LabelExplanation {
            by_label: Explanation::for_label(label),
            by_feature: label.parse::<Genotype>().ok().map(Explanation::for_genotype),
        }
    }
}
