use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::{IndividualProfile, IndividualSkill, OccupationRecord, RequiredSkill};
use super::warnings::{clamped, CalcWarning};

/// Alignment between an individual's skills and an occupation's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyBreakdown {
    /// Importance-weighted skill coverage in [0, 1].
    pub skills_match: f64,
    /// Experience timing alignment in [0, 1].
    pub timing_factor: f64,
    /// Weighted combination of match and timing, in [0, 1].
    pub alignment: f64,
    /// Synergy% in [0, 100]; multiplicatively coupled with V^R and H^R.
    pub percent: f64,
}

/// Importance-weighted coverage of the occupation's required skill set.
///
/// Skills the individual lacks entirely stay in the denominator and
/// contribute nothing, so missing skills are penalized rather than ignored.
/// Importance weights are normalized at use-time.
pub fn skills_match(
    required: &[RequiredSkill],
    individual: &[IndividualSkill],
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    if required.is_empty() {
        // Nothing is required, so nothing is missing.
        return 1.0;
    }

    let mut total_importance = 0.0;
    let mut covered = 0.0;

    for requirement in required {
        let importance = clamped(
            "skill_importance",
            requirement.importance,
            0.0,
            f64::MAX,
            warnings,
        );
        total_importance += importance;

        let held = individual
            .iter()
            .find(|skill| skill.skill_name == requirement.skill_name);
        let Some(held) = held else {
            continue;
        };

        let ratio = if requirement.required_score <= 0.0 || !requirement.required_score.is_finite()
        {
            warnings.push(CalcWarning::DivisionGuard {
                field: format!("required_score[{}]", requirement.skill_name),
                substituted: 1.0,
            });
            1.0
        } else {
            (held.score.max(0.0) / requirement.required_score).min(1.0)
        };

        covered += ratio * importance;
    }

    if total_importance <= 0.0 || !total_importance.is_finite() {
        warnings.push(CalcWarning::DivisionGuard {
            field: "skill_importance_total".to_string(),
            substituted: 0.0,
        });
        return 0.0;
    }

    covered / total_importance
}

/// Saturating experience alignment: at or beyond the required years the
/// factor is 1; a role with no experience requirement is always aligned.
pub fn timing_factor(years_experience: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 || !required_years.is_finite() {
        return 1.0;
    }
    (years_experience.max(0.0) / required_years).min(1.0)
}

/// Full synergy calculation against already-computed V^R and H^R.
///
/// Synergy% = clip(V^R * H^R * Alignment / 100, 0, 100), so it is zero
/// whenever either underlying score is zero: alignment alone earns nothing
/// without both readiness and opportunity behind it.
pub fn synergy(
    v_r: f64,
    h_r: f64,
    profile: &IndividualProfile,
    occupation: &OccupationRecord,
    required: &[RequiredSkill],
    individual: &[IndividualSkill],
    config: &ScoringConfig,
) -> (SynergyBreakdown, Vec<CalcWarning>) {
    let mut warnings = Vec::new();

    let skills_match = skills_match(required, individual, &mut warnings);
    let timing_factor = timing_factor(
        profile.years_experience,
        occupation.experience_years_required,
    );

    let weights = config.alignment_weights.normalized();
    let alignment = weights.skills_match * skills_match + weights.timing * timing_factor;

    let percent = (v_r * h_r * alignment / 100.0).clamp(0.0, 100.0);

    (
        SynergyBreakdown {
            skills_match,
            timing_factor,
            alignment,
            percent,
        },
        warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{DatasetProvider, SyntheticDatasets};
    use crate::scoring::domain::UserId;

    fn fixture() -> (
        IndividualProfile,
        OccupationRecord,
        Vec<RequiredSkill>,
        Vec<IndividualSkill>,
    ) {
        let data = SyntheticDatasets::new();
        let profile = data.profile(UserId(1)).expect("profile");
        let occupation = data
            .occupation("Data Analyst with AI Skills")
            .expect("occupation");
        let required = data
            .required_skills("Data Analyst with AI Skills")
            .expect("required skills");
        let individual = data.individual_skills(UserId(1)).expect("skills");
        (profile, occupation, required, individual)
    }

    #[test]
    fn fixture_skills_match_is_pinned() {
        let (_, _, required, individual) = fixture();
        let mut warnings = Vec::new();
        let value = skills_match(&required, &individual, &mut warnings);
        assert!(warnings.is_empty());
        assert!((value - 0.815774).abs() < 1e-6);
    }

    #[test]
    fn fixture_synergy_is_pinned() {
        let (profile, occupation, required, individual) = fixture();
        let config = ScoringConfig::default();

        let (breakdown, warnings) = synergy(
            75.941667,
            84.5,
            &profile,
            &occupation,
            &required,
            &individual,
            &config,
        );
        assert!(warnings.is_empty());
        assert_eq!(breakdown.timing_factor, 1.0);
        assert!((breakdown.alignment - 0.871042).abs() < 1e-6);
        assert!((breakdown.percent - 55.895361).abs() < 1e-4);
    }

    #[test]
    fn missing_skills_stay_in_the_denominator() {
        let (_, _, required, _) = fixture();
        let only_python = vec![IndividualSkill {
            user_id: UserId(1),
            skill_name: "Python".to_string(),
            score: 80.0,
        }];

        let mut warnings = Vec::new();
        let value = skills_match(&required, &only_python, &mut warnings);
        // Python importance 0.7 out of total 2.0, fully met.
        assert!((value - 0.35).abs() < 1e-9);
    }

    #[test]
    fn synergy_is_zero_when_either_score_is_zero() {
        let (profile, occupation, required, individual) = fixture();
        let config = ScoringConfig::default();

        let (no_readiness, _) = synergy(
            0.0,
            84.5,
            &profile,
            &occupation,
            &required,
            &individual,
            &config,
        );
        assert_eq!(no_readiness.percent, 0.0);

        let (no_opportunity, _) = synergy(
            75.9,
            0.0,
            &profile,
            &occupation,
            &required,
            &individual,
            &config,
        );
        assert_eq!(no_opportunity.percent, 0.0);
        assert!(no_opportunity.alignment > 0.0);
    }

    #[test]
    fn timing_factor_saturates() {
        assert_eq!(timing_factor(5.0, 2.0), 1.0);
        assert_eq!(timing_factor(1.0, 2.0), 0.5);
        assert_eq!(timing_factor(0.0, 0.0), 1.0);
        assert_eq!(timing_factor(-3.0, 2.0), 0.0);
    }

    #[test]
    fn empty_requirement_set_is_fully_matched() {
        let mut warnings = Vec::new();
        assert_eq!(skills_match(&[], &[], &mut warnings), 1.0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_importance_total_guards_to_zero() {
        let required = vec![RequiredSkill {
            occupation_name: "X".to_string(),
            skill_name: "Python".to_string(),
            required_score: 80.0,
            importance: 0.0,
        }];
        let mut warnings = Vec::new();
        assert_eq!(skills_match(&required, &[], &mut warnings), 0.0);
        assert!(matches!(
            warnings.last(),
            Some(CalcWarning::DivisionGuard { .. })
        ));
    }
}
