//! Scenario scoring, trade-off synthesis, and referee guidance.
//!
//! The engine is a pure pipeline over the read-only catalog: pick a property,
//! score it under each development scenario, derive the qualitative analysis,
//! and compare the scenarios into a single guidance string. The only
//! nondeterminism is the uniform property selection, threaded through an
//! injectable random source.

pub mod domain;
mod guidance;
pub mod router;
pub mod scoring;
pub mod tradeoffs;
pub mod views;

pub use domain::{
    BudgetTier, EvaluationReport, RiskTolerance, ScenarioResult, ScenarioType, ScoreSet,
    TimeHorizon, UserProfile,
};
pub use router::referee_router;
pub use tradeoffs::TradeoffAnalysis;
pub use views::{EvaluationView, ScenarioView};

use crate::catalog::{PropertyCatalog, PropertyRecord};
use rand::Rng;
use std::sync::Arc;

/// Domain failure surfaced to callers; no partial report is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum RefereeError {
    #[error("unknown {field} value '{value}', expected one of: {expected}")]
    InvalidProfileValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("no properties listed in '{location}'")]
    LocationNotFound { location: String },
    #[error("property catalog has no records")]
    EmptyCatalog,
}

impl RefereeError {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: &str,
        expected: &'static str,
    ) -> Self {
        Self::InvalidProfileValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Stateless facade running the full evaluation for one investor profile.
pub struct RefereeEngine {
    catalog: Arc<PropertyCatalog>,
}

impl RefereeEngine {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// Evaluate with a fresh thread-local random source.
    pub fn evaluate(&self, profile: &UserProfile) -> Result<EvaluationReport, RefereeError> {
        self.evaluate_with_rng(profile, &mut rand::thread_rng())
    }

    /// Evaluate with an injected random source so callers can pin the
    /// property selection.
    pub fn evaluate_with_rng<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<EvaluationReport, RefereeError> {
        let property = self.select_property(profile, rng)?;

        let scenarios = ScenarioType::ALL.map(|scenario| {
            let scores = scoring::score(property, profile, scenario);
            let analysis = tradeoffs::synthesize(scenario, &scores, profile);
            ScenarioResult {
                scenario,
                scores,
                tradeoffs: analysis.tradeoffs,
                explanations: analysis.explanations,
            }
        });

        let decision_guidance = guidance::render(&scenarios, profile);

        Ok(EvaluationReport {
            property: property.clone(),
            scenarios: Vec::from(scenarios),
            decision_guidance,
        })
    }

    fn select_property<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> Result<&PropertyRecord, RefereeError> {
        if self.catalog.is_empty() {
            return Err(RefereeError::EmptyCatalog);
        }

        let filter = profile.location_filter();
        let candidates = self.catalog.matching(filter);
        if candidates.is_empty() {
            return Err(RefereeError::LocationNotFound {
                location: filter.unwrap_or("Any").to_string(),
            });
        }

        let index = rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }
}
