use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::OccupationRecord;
use super::warnings::{clamped, guarded_ratio, CalcWarning};

/// Systematic Opportunity (H^R) with its intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityBreakdown {
    /// Base opportunity score in [0, 100], before market multipliers.
    pub base: f64,
    pub growth_multiplier: f64,
    pub regional_multiplier: f64,
    /// H^R in [0, 100].
    pub total: f64,
}

/// Compute H^R = clip(H_base * M_growth * M_regional, 0, 100).
pub fn opportunity_score(
    occupation: &OccupationRecord,
    config: &ScoringConfig,
) -> (OpportunityBreakdown, Vec<CalcWarning>) {
    let mut warnings = Vec::new();

    let base = base_score(occupation, config, &mut warnings);
    let growth_multiplier = market_multiplier(
        "growth_momentum",
        occupation.current_job_postings,
        occupation.previous_job_postings,
        config,
        &mut warnings,
    );
    let regional_multiplier = market_multiplier(
        "regional_demand",
        occupation.local_demand,
        occupation.national_avg_demand,
        config,
        &mut warnings,
    );

    let total = (base * growth_multiplier * regional_multiplier).clamp(0.0, 100.0);

    (
        OpportunityBreakdown {
            base,
            growth_multiplier,
            regional_multiplier,
            total,
        },
        warnings,
    )
}

fn base_score(
    occupation: &OccupationRecord,
    config: &ScoringConfig,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    let w = config.opportunity_weights;

    let enhancement = clamped(
        "ai_enhancement_score",
        occupation.ai_enhancement_score,
        0.0,
        1.0,
        warnings,
    );

    // Growth rates may be negative for declining occupations; anything past
    // the sanity band is clamped with a warning before normalization.
    let growth_rate = clamped("job_growth_rate", occupation.job_growth_rate, -1.0, 2.0, warnings);
    let growth = normalize_positive(growth_rate, config.growth_rate_cap);

    let premium_ratio = guarded_ratio(
        "wage_premium",
        occupation.ai_skilled_wage - occupation.median_wage,
        occupation.median_wage,
        0.0,
        warnings,
    );
    let premium = normalize_positive(premium_ratio, config.wage_premium_cap);

    // Entry accessibility: the more years of schooling and experience a role
    // demands, the harder it is to enter.
    let education_years = clamped(
        "education_years_required",
        occupation.education_years_required,
        0.0,
        12.0,
        warnings,
    );
    let experience_years = clamped(
        "experience_years_required",
        occupation.experience_years_required,
        0.0,
        30.0,
        warnings,
    );
    let required_years = education_years + experience_years;
    let accessibility = 1.0 / (1.0 + required_years / config.accessibility_scale_years);

    let weighted = w.ai_enhancement * enhancement
        + w.job_growth * growth
        + w.wage_premium * premium
        + w.accessibility * accessibility;

    let total_weight = w.total();
    let fraction = if !total_weight.is_finite() || total_weight <= 0.0 {
        (enhancement + growth + premium + accessibility) / 4.0
    } else {
        weighted / total_weight
    };

    100.0 * fraction
}

/// Momentum ratio floored and capped so shrinking or exploding markets do not
/// collapse or dominate the score. A zero or missing denominator is neutral.
fn market_multiplier(
    field: &str,
    numerator: f64,
    denominator: f64,
    config: &ScoringConfig,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    let ratio = guarded_ratio(field, numerator, denominator, 1.0, warnings);
    ratio.clamp(config.multiplier_floor, config.multiplier_cap)
}

fn normalize_positive(value: f64, cap: f64) -> f64 {
    if !value.is_finite() || cap <= 0.0 {
        return 0.0;
    }
    (value.max(0.0).min(cap)) / cap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{DatasetProvider, SyntheticDatasets};

    fn data_analyst() -> OccupationRecord {
        SyntheticDatasets::new()
            .occupation("Data Analyst with AI Skills")
            .expect("occupation present")
    }

    #[test]
    fn data_analyst_matches_fixture() {
        let config = ScoringConfig::default();
        let (breakdown, warnings) = opportunity_score(&data_analyst(), &config);

        assert!(warnings.is_empty(), "clean fixture warns: {warnings:?}");
        assert!((breakdown.base - 56.333333).abs() < 1e-4);
        assert!((breakdown.growth_multiplier - 1.25).abs() < 1e-12);
        assert!((breakdown.regional_multiplier - 1.2).abs() < 1e-12);
        assert!((breakdown.total - 84.5).abs() < 1e-4);
    }

    #[test]
    fn zero_previous_postings_is_neutral_not_fatal() {
        let config = ScoringConfig::default();
        let mut occupation = data_analyst();
        occupation.previous_job_postings = 0.0;

        let (breakdown, warnings) = opportunity_score(&occupation, &config);
        assert_eq!(breakdown.growth_multiplier, 1.0);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, CalcWarning::DivisionGuard { .. })));
    }

    #[test]
    fn zero_national_demand_is_neutral() {
        let config = ScoringConfig::default();
        let mut occupation = data_analyst();
        occupation.national_avg_demand = 0.0;

        let (breakdown, _) = opportunity_score(&occupation, &config);
        assert_eq!(breakdown.regional_multiplier, 1.0);
    }

    #[test]
    fn multipliers_are_floored_and_capped() {
        let config = ScoringConfig::default();
        let mut occupation = data_analyst();
        occupation.current_job_postings = 10.0;
        occupation.previous_job_postings = 1000.0;
        occupation.local_demand = 50.0;
        occupation.national_avg_demand = 1.0;

        let (breakdown, _) = opportunity_score(&occupation, &config);
        assert_eq!(breakdown.growth_multiplier, config.multiplier_floor);
        assert_eq!(breakdown.regional_multiplier, config.multiplier_cap);
        assert!(breakdown.total <= 100.0);
    }

    #[test]
    fn declining_occupation_scores_low_but_in_bounds() {
        let config = ScoringConfig::default();
        let occupation = OccupationRecord {
            occupation_name: "Legacy Data Entry".to_string(),
            ai_enhancement_score: 0.1,
            job_growth_rate: -0.4,
            ai_skilled_wage: 40_000.0,
            median_wage: 45_000.0,
            education_years_required: 0.0,
            experience_years_required: 0.0,
            current_job_postings: 50.0,
            previous_job_postings: 200.0,
            remote_work_factor: 0.1,
            local_demand: 0.4,
            national_avg_demand: 1.0,
        };

        let (breakdown, _) = opportunity_score(&occupation, &config);
        assert!(breakdown.total >= 0.0 && breakdown.total <= 100.0);
        assert!(breakdown.total < 30.0);
    }

    #[test]
    fn wage_premium_requires_positive_median() {
        let config = ScoringConfig::default();
        let mut occupation = data_analyst();
        occupation.median_wage = 0.0;

        let (_, warnings) = opportunity_score(&occupation, &config);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, CalcWarning::DivisionGuard { .. })));
    }
}
