use serde::{Deserialize, Serialize};

use super::composer::{compose, CompositeScore};
use super::config::ScoringConfig;
use super::domain::{CalculationContext, LearningPathway, PathwayImpact, SubScores};
use super::opportunity::opportunity_score;
use super::readiness::readiness_from_sub_scores;
use super::synergy::{skills_match, timing_factor};
use super::warnings::{clamped, CalcWarning};

/// One step of a pathway projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    pub period: u32,
    pub sub_scores: SubScores,
    /// V^R at this period.
    pub readiness: f64,
    pub synergy_percent: f64,
    pub composite: CompositeScore,
}

/// A full pathway projection: `periods + 1` points, period 0 being the
/// unmodified baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub pathway_id: u32,
    pub pathway_name: String,
    pub occupation_name: String,
    pub periods: u32,
    pub application_rate: f64,
    /// H^R held fixed across the horizon; market-side dynamics are out of
    /// scope for the projection.
    pub opportunity: f64,
    pub points: Vec<SimulationPoint>,
    pub warnings: Vec<CalcWarning>,
}

/// Project the effect of applying `pathway` for `periods` periods.
///
/// Each period adds the pathway's impact deltas (scaled by the application
/// rate) to a derived `SubScores` snapshot, clamps each pillar to [0, 1],
/// and rescores. The source profile is never mutated, and no state is
/// carried between independent runs.
pub fn simulate(
    context: &CalculationContext,
    pathway: &LearningPathway,
    periods: u32,
    application_rate: f64,
    config: &ScoringConfig,
) -> SimulationRun {
    let mut warnings = Vec::new();

    let rate = clamped("application_rate", application_rate, 0.0, 1.0, &mut warnings);
    let alpha = clamped("alpha", config.alpha, 0.0, 1.0, &mut warnings);
    let beta = clamped("beta", config.beta, 0.0, f64::MAX, &mut warnings);

    let (opportunity, opportunity_warnings) = opportunity_score(&context.occupation, config);
    warnings.extend(opportunity_warnings);

    // Alignment does not depend on the evolving pillars, so compute it once.
    let match_value = skills_match(
        &context.required_skills,
        &context.individual_skills,
        &mut warnings,
    );
    let timing = timing_factor(
        context.profile.years_experience,
        context.occupation.experience_years_required,
    );
    let alignment_weights = config.alignment_weights.normalized();
    let alignment = alignment_weights.skills_match * match_value + alignment_weights.timing * timing;

    let baseline = super::readiness::sub_scores(&context.profile, config, &mut warnings);

    let mut working = baseline;
    let mut points = Vec::with_capacity(periods as usize + 1);
    for period in 0..=periods {
        if period > 0 {
            working = apply_impact(working, &pathway.impact, rate);
        }

        let readiness = readiness_from_sub_scores(&working, config);
        let synergy_percent =
            (readiness.total * opportunity.total * alignment / 100.0).clamp(0.0, 100.0);

        // Parameters were sanitized above, so composing adds no warnings.
        let mut scratch = Vec::new();
        let composite = compose(
            readiness.total,
            opportunity.total,
            synergy_percent,
            alpha,
            beta,
            &mut scratch,
        );

        points.push(SimulationPoint {
            period,
            sub_scores: working,
            readiness: readiness.total,
            synergy_percent,
            composite,
        });
    }

    SimulationRun {
        pathway_id: pathway.pathway_id,
        pathway_name: pathway.pathway_name.clone(),
        occupation_name: context.occupation.occupation_name.clone(),
        periods,
        application_rate: rate,
        opportunity: opportunity.total,
        points,
        warnings,
    }
}

fn apply_impact(current: SubScores, impact: &PathwayImpact, rate: f64) -> SubScores {
    SubScores {
        ai_fluency: (current.ai_fluency + impact.ai_fluency * rate).clamp(0.0, 1.0),
        domain_expertise: (current.domain_expertise + impact.domain_expertise * rate)
            .clamp(0.0, 1.0),
        adaptive_capacity: (current.adaptive_capacity + impact.adaptive_capacity * rate)
            .clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{DatasetProvider, SyntheticDatasets};
    use crate::scoring::domain::UserId;

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

    fn prompt_engineering() -> LearningPathway {
        SyntheticDatasets::new().pathway(1).expect("pathway 1")
    }

    #[test]
    fn run_produces_periods_plus_one_points() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            3,
            1.0,
            &ScoringConfig::default(),
        );
        assert_eq!(run.points.len(), 4);
        assert_eq!(run.points[0].period, 0);
        assert_eq!(run.points[3].period, 3);
    }

    #[test]
    fn period_zero_equals_direct_baseline() {
        let config = ScoringConfig::default();
        let context = fixture_context();
        let run = simulate(&context, &prompt_engineering(), 3, 1.0, &config);

        let (readiness, _) = crate::scoring::readiness::readiness_score(&context.profile, &config);
        assert!((run.points[0].readiness - readiness.total).abs() < 1e-9);
        assert!((run.points[0].composite.value - 85.810369).abs() < 1e-4);
    }

    #[test]
    fn prompt_engineering_strictly_raises_readiness() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            3,
            1.0,
            &ScoringConfig::default(),
        );
        for pair in run.points.windows(2) {
            assert!(
                pair[1].readiness > pair[0].readiness,
                "period {} did not improve: {} vs {}",
                pair[1].period,
                pair[1].readiness,
                pair[0].readiness
            );
        }
    }

    #[test]
    fn pillars_saturate_at_their_cap() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            10,
            1.0,
            &ScoringConfig::default(),
        );
        let last = run.points.last().expect("points");
        assert_eq!(last.sub_scores.ai_fluency, 1.0);
        assert_eq!(last.sub_scores.adaptive_capacity, 1.0);
        assert!(last.readiness <= 100.0);
    }

    #[test]
    fn runs_are_restartable_and_deterministic() {
        let config = ScoringConfig::default();
        let context = fixture_context();
        let pathway = prompt_engineering();
        let first = simulate(&context, &pathway, 5, 0.5, &config);
        let second = simulate(&context, &pathway, 5, 0.5, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_rate_keeps_the_trajectory_flat() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            4,
            0.0,
            &ScoringConfig::default(),
        );
        let baseline = run.points[0].composite.value;
        assert!(run
            .points
            .iter()
            .all(|point| (point.composite.value - baseline).abs() < 1e-12));
    }

    #[test]
    fn out_of_range_rate_is_clamped_with_warning() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            2,
            3.5,
            &ScoringConfig::default(),
        );
        assert_eq!(run.application_rate, 1.0);
        assert!(run
            .warnings
            .iter()
            .any(|w| matches!(w, CalcWarning::OutOfRange { .. })));
    }

    #[test]
    fn opportunity_is_fixed_across_the_horizon() {
        let run = simulate(
            &fixture_context(),
            &prompt_engineering(),
            6,
            1.0,
            &ScoringConfig::default(),
        );
        assert!((run.opportunity - 84.5).abs() < 1e-4);
        assert!(run
            .points
            .iter()
            .all(|point| (point.composite.alpha - 0.5).abs() < 1e-12));
    }
}
