use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::{IndividualProfile, SubScores};
use super::warnings::{clamped, guarded_ratio, CalcWarning};

/// The three pillars behind Idiosyncratic Readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessPillar {
    AiFluency,
    DomainExpertise,
    AdaptiveCapacity,
}

/// Discrete contribution to the readiness score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarComponent {
    pub pillar: ReadinessPillar,
    pub value: f64,
    pub weight: f64,
    pub notes: String,
}

/// Idiosyncratic Readiness (V^R) with its pillar breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    pub sub_scores: SubScores,
    /// V^R in [0, 100].
    pub total: f64,
    pub components: Vec<PillarComponent>,
}

/// Compute the aggregate pillar values in [0, 1] from the raw profile.
pub fn sub_scores(
    profile: &IndividualProfile,
    config: &ScoringConfig,
    warnings: &mut Vec<CalcWarning>,
) -> SubScores {
    SubScores {
        ai_fluency: ai_fluency(profile, config, warnings),
        domain_expertise: domain_expertise(profile, config, warnings),
        adaptive_capacity: adaptive_capacity(profile, warnings),
    }
}

/// Combine pillar values into V^R. Pure over its inputs, so the simulator can
/// rescore derived snapshots without touching the raw profile.
pub fn readiness_from_sub_scores(sub: &SubScores, config: &ScoringConfig) -> ReadinessBreakdown {
    let weights = config.readiness_weights.normalized();
    let total = 100.0
        * (weights.ai_fluency * sub.ai_fluency
            + weights.domain_expertise * sub.domain_expertise
            + weights.adaptive_capacity * sub.adaptive_capacity);

    let components = vec![
        PillarComponent {
            pillar: ReadinessPillar::AiFluency,
            value: sub.ai_fluency,
            weight: weights.ai_fluency,
            notes: format!("AI-Fluency {:.3} at weight {:.2}", sub.ai_fluency, weights.ai_fluency),
        },
        PillarComponent {
            pillar: ReadinessPillar::DomainExpertise,
            value: sub.domain_expertise,
            weight: weights.domain_expertise,
            notes: format!(
                "Domain-Expertise {:.3} at weight {:.2}",
                sub.domain_expertise, weights.domain_expertise
            ),
        },
        PillarComponent {
            pillar: ReadinessPillar::AdaptiveCapacity,
            value: sub.adaptive_capacity,
            weight: weights.adaptive_capacity,
            notes: format!(
                "Adaptive-Capacity {:.3} at weight {:.2}",
                sub.adaptive_capacity, weights.adaptive_capacity
            ),
        },
    ];

    ReadinessBreakdown {
        sub_scores: *sub,
        total: total.clamp(0.0, 100.0),
        components,
    }
}

/// Full readiness calculation: V^R in [0, 100] plus recorded warnings.
pub fn readiness_score(
    profile: &IndividualProfile,
    config: &ScoringConfig,
) -> (ReadinessBreakdown, Vec<CalcWarning>) {
    let mut warnings = Vec::new();
    let sub = sub_scores(profile, config, &mut warnings);
    (readiness_from_sub_scores(&sub, config), warnings)
}

fn ai_fluency(
    profile: &IndividualProfile,
    config: &ScoringConfig,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    let w = config.fluency_weights;

    let prompting = clamped("prompting_score", profile.prompting_score, 0.0, 1.0, warnings);
    let tools = clamped("tools_score", profile.tools_score, 0.0, 1.0, warnings);
    let understanding = clamped(
        "understanding_score",
        profile.understanding_score,
        0.0,
        1.0,
        warnings,
    );
    let data_literacy = clamped("datalit_score", profile.datalit_score, 0.0, 1.0, warnings);

    // Two observable productivity signals, averaged so neither column is
    // privileged: quality delta and time saved. Each ratio saturates at the
    // configured cap before normalization.
    let quality_ratio = guarded_ratio(
        "output_quality_ratio",
        profile.output_quality_with_ai,
        profile.output_quality_without_ai,
        0.0,
        warnings,
    );
    let time_ratio = guarded_ratio(
        "time_saved_ratio",
        profile.time_without_ai,
        profile.time_with_ai,
        0.0,
        warnings,
    );
    let cap = config.productivity_ratio_cap;
    let productivity = (saturate(quality_ratio, cap) + saturate(time_ratio, cap)) / 2.0;

    let error_catching = clamped(
        "error_catch_rate",
        guarded_ratio(
            "error_catch_rate",
            profile.errors_caught,
            profile.total_ai_errors,
            0.0,
            warnings,
        ),
        0.0,
        1.0,
        warnings,
    );
    let trust_calibration = clamped(
        "trust_calibration_rate",
        guarded_ratio(
            "trust_calibration_rate",
            profile.appropriate_trust_decisions,
            profile.total_decisions,
            0.0,
            warnings,
        ),
        0.0,
        1.0,
        warnings,
    );

    let velocity_per_hour = guarded_ratio(
        "learning_velocity",
        profile.delta_proficiency,
        profile.delta_t_hours_invested,
        0.0,
        warnings,
    );
    let learning_velocity = saturate(velocity_per_hour, config.learning_velocity_cap);

    let weighted = w.prompting * prompting
        + w.tools * tools
        + w.understanding * understanding
        + w.data_literacy * data_literacy
        + w.productivity * productivity
        + w.error_catching * error_catching
        + w.trust_calibration * trust_calibration
        + w.learning_velocity * learning_velocity;

    let total_weight = w.total();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        // Degenerate weight table: plain mean of the eight components.
        return (prompting
            + tools
            + understanding
            + data_literacy
            + productivity
            + error_catching
            + trust_calibration
            + learning_velocity)
            / 8.0;
    }
    weighted / total_weight
}

fn domain_expertise(
    profile: &IndividualProfile,
    config: &ScoringConfig,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    let w = config.expertise_weights;

    let education = profile.education_level.normalized();

    // Saturating transform: each additional year counts for less, and the
    // value stays strictly below 1.
    let years = clamped("years_experience", profile.years_experience, 0.0, 60.0, warnings);
    let experience = years / (years + config.experience_half_life_years);

    let portfolio = clamped("portfolio_score", profile.portfolio_score, 0.0, 1.0, warnings);
    let recognition = clamped("recognition_score", profile.recognition_score, 0.0, 1.0, warnings);
    let credentials = clamped("credentials_score", profile.credentials_score, 0.0, 1.0, warnings);

    let weighted = w.education * education
        + w.experience * experience
        + w.portfolio * portfolio
        + w.recognition * recognition
        + w.credentials * credentials;

    let total_weight = w.total();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return (education + experience + portfolio + recognition + credentials) / 5.0;
    }
    weighted / total_weight
}

fn adaptive_capacity(profile: &IndividualProfile, warnings: &mut Vec<CalcWarning>) -> f64 {
    let cognitive = clamped(
        "cognitive_flexibility",
        profile.cognitive_flexibility,
        0.0,
        100.0,
        warnings,
    );
    let social = clamped(
        "social_emotional_intelligence",
        profile.social_emotional_intelligence,
        0.0,
        100.0,
        warnings,
    );
    let strategic = clamped(
        "strategic_career_management",
        profile.strategic_career_management,
        0.0,
        100.0,
        warnings,
    );

    (cognitive + social + strategic) / 300.0
}

fn saturate(value: f64, cap: f64) -> f64 {
    if !value.is_finite() || cap <= 0.0 {
        return 0.0;
    }
    (value.max(0.0).min(cap)) / cap
}
