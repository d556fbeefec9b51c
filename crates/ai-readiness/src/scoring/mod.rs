//! The AI-Readiness calculation engine.
//!
//! Pure calculators for Idiosyncratic Readiness (V^R), Systematic
//! Opportunity (H^R), and skills synergy, composed into a single score and a
//! pathway projection. All anomalies degrade to warnings; the engine always
//! returns a best-effort numeric result.

pub mod composer;
pub mod config;
pub mod domain;
pub mod opportunity;
pub mod readiness;
pub mod router;
pub mod service;
pub mod simulator;
pub mod synergy;
pub mod warnings;

pub use composer::CompositeScore;
pub use config::{
    AlignmentWeights, ExpertiseWeights, FluencyWeights, OpportunityWeights, PillarWeights,
    ScoringConfig,
};
pub use domain::{
    CalculationContext, EducationLevel, IndividualProfile, IndividualSkill, LearningPathway,
    OccupationRecord, PathwayImpact, PathwayType, RequiredSkill, SubScores, UserId,
};
pub use opportunity::OpportunityBreakdown;
pub use readiness::{PillarComponent, ReadinessBreakdown, ReadinessPillar};
pub use router::scoring_router;
pub use service::{
    OccupationOutlook, ParameterOverrides, ReadinessService, ScoreReport, ScoreboardEntry,
    ServiceError,
};
pub use simulator::{SimulationPoint, SimulationRun};
pub use synergy::SynergyBreakdown;
pub use warnings::CalcWarning;

use serde::{Deserialize, Serialize};

/// Stateless engine applying one [`ScoringConfig`] to calculation contexts.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the full pipeline: V^R, H^R, Synergy%, and the composed AI-R.
    pub fn evaluate(&self, context: &CalculationContext) -> ScoreOutcome {
        let mut warnings = Vec::new();

        let sub = readiness::sub_scores(&context.profile, &self.config, &mut warnings);
        let readiness = readiness::readiness_from_sub_scores(&sub, &self.config);

        let (opportunity, opportunity_warnings) =
            opportunity::opportunity_score(&context.occupation, &self.config);
        warnings.extend(opportunity_warnings);

        let (synergy, synergy_warnings) = synergy::synergy(
            readiness.total,
            opportunity.total,
            &context.profile,
            &context.occupation,
            &context.required_skills,
            &context.individual_skills,
            &self.config,
        );
        warnings.extend(synergy_warnings);

        let composite = composer::compose(
            readiness.total,
            opportunity.total,
            synergy.percent,
            self.config.alpha,
            self.config.beta,
            &mut warnings,
        );

        ScoreOutcome {
            readiness,
            opportunity,
            synergy,
            composite,
            warnings,
        }
    }

    /// Project a pathway against this engine's configuration.
    pub fn simulate(
        &self,
        context: &CalculationContext,
        pathway: &LearningPathway,
        periods: u32,
        application_rate: f64,
    ) -> SimulationRun {
        simulator::simulate(context, pathway, periods, application_rate, &self.config)
    }
}

/// Evaluation output describing every intermediate score and the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub readiness: ReadinessBreakdown,
    pub opportunity: OpportunityBreakdown,
    pub synergy: SynergyBreakdown,
    pub composite: CompositeScore,
    pub warnings: Vec<CalcWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{DatasetProvider, SyntheticDatasets};

    fn fixture_context() -> CalculationContext {
        let data = SyntheticDatasets::new();
        CalculationContext {
            profile: data.profile(UserId(1)).expect("profile"),
            occupation: data
                .occupation("Data Analyst with AI Skills")
                .expect("occupation"),
            required_skills: data
                .required_skills("Data Analyst with AI Skills")
                .expect("required skills"),
            individual_skills: data.individual_skills(UserId(1)).expect("skills"),
        }
    }

    #[test]
    fn full_pipeline_matches_pinned_fixture() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let outcome = engine.evaluate(&fixture_context());

        assert!(outcome.warnings.is_empty());
        assert!((outcome.readiness.total - 75.941667).abs() < 1e-4);
        assert!((outcome.opportunity.total - 84.5).abs() < 1e-4);
        assert!((outcome.synergy.percent - 55.895361).abs() < 1e-4);
        assert!((outcome.composite.value - 85.810369).abs() < 1e-4);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let context = fixture_context();
        assert_eq!(engine.evaluate(&context), engine.evaluate(&context));
    }

    #[test]
    fn engine_never_fails_on_degenerate_context() {
        let engine = ScoringEngine::new(ScoringConfig::default());
        let mut context = fixture_context();
        context.occupation.previous_job_postings = 0.0;
        context.occupation.median_wage = 0.0;
        context.profile.total_decisions = 0.0;
        context.individual_skills.clear();

        let outcome = engine.evaluate(&context);
        assert!(outcome.composite.value.is_finite());
        assert!(!outcome.warnings.is_empty());
    }
}
