use serde::{Deserialize, Serialize};

/// Identifier wrapper for individuals in the dataset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

/// Ordinal education tiers used by the Domain-Expertise pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    pub const fn tier(self) -> u8 {
        match self {
            EducationLevel::HighSchool => 1,
            EducationLevel::Associate => 2,
            EducationLevel::Bachelor => 3,
            EducationLevel::Master => 4,
            EducationLevel::Doctorate => 5,
        }
    }

    /// Tier normalized to [0, 1] for weighted aggregation.
    pub fn normalized(self) -> f64 {
        f64::from(self.tier()) / f64::from(Self::Doctorate.tier())
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate",
            EducationLevel::Bachelor => "Bachelor's",
            EducationLevel::Master => "Master's",
            EducationLevel::Doctorate => "Doctorate",
        }
    }

    /// Lenient parser for dataset labels such as "Master's" or "bachelor".
    pub fn parse_label(raw: &str) -> Option<Self> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "highschool" | "hs" | "ged" => Some(Self::HighSchool),
            "associate" | "associates" => Some(Self::Associate),
            "bachelor" | "bachelors" | "ba" | "bs" => Some(Self::Bachelor),
            "master" | "masters" | "ma" | "ms" => Some(Self::Master),
            "doctorate" | "phd" | "doctoral" => Some(Self::Doctorate),
            _ => None,
        }
    }
}

/// Raw capability inputs for one individual.
///
/// Sub-scores named `*_score` are expected in [0, 1]; the adaptive-capacity
/// traits are expected in [0, 100]. The calculators clamp out-of-range values
/// rather than rejecting the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualProfile {
    pub user_id: UserId,
    pub prompting_score: f64,
    pub tools_score: f64,
    pub understanding_score: f64,
    pub datalit_score: f64,
    pub output_quality_with_ai: f64,
    pub output_quality_without_ai: f64,
    pub time_without_ai: f64,
    pub time_with_ai: f64,
    pub errors_caught: f64,
    pub total_ai_errors: f64,
    pub appropriate_trust_decisions: f64,
    pub total_decisions: f64,
    pub delta_proficiency: f64,
    pub delta_t_hours_invested: f64,
    pub education_level: EducationLevel,
    pub years_experience: f64,
    pub portfolio_score: f64,
    pub recognition_score: f64,
    pub credentials_score: f64,
    pub cognitive_flexibility: f64,
    pub social_emotional_intelligence: f64,
    pub strategic_career_management: f64,
}

/// Market-side inputs for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationRecord {
    pub occupation_name: String,
    pub ai_enhancement_score: f64,
    pub job_growth_rate: f64,
    pub ai_skilled_wage: f64,
    pub median_wage: f64,
    pub education_years_required: f64,
    pub experience_years_required: f64,
    pub current_job_postings: f64,
    pub previous_job_postings: f64,
    pub remote_work_factor: f64,
    pub local_demand: f64,
    pub national_avg_demand: f64,
}

/// Category tag for a learning pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayType {
    AiFluency,
    DomainIntegration,
    AdaptiveCapacity,
}

impl PathwayType {
    pub const fn label(self) -> &'static str {
        match self {
            PathwayType::AiFluency => "AI-Fluency",
            PathwayType::DomainIntegration => "Domain+AI Integration",
            PathwayType::AdaptiveCapacity => "Adaptive Capacity",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "aifluency" => Some(Self::AiFluency),
            "domainaiintegration" | "domainintegration" => Some(Self::DomainIntegration),
            "adaptivecapacity" => Some(Self::AdaptiveCapacity),
            _ => None,
        }
    }
}

/// Additive per-period deltas a pathway applies to the three pillars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathwayImpact {
    pub ai_fluency: f64,
    pub domain_expertise: f64,
    pub adaptive_capacity: f64,
}

/// A learning intervention with defined pillar impacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathway {
    pub pathway_id: u32,
    pub pathway_name: String,
    pub pathway_type: PathwayType,
    pub impact: PathwayImpact,
}

/// One skill an occupation requires, with proficiency in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub occupation_name: String,
    pub skill_name: String,
    pub required_score: f64,
    pub importance: f64,
}

/// One skill an individual currently holds, with proficiency in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualSkill {
    pub user_id: UserId,
    pub skill_name: String,
    pub score: f64,
}

/// Aggregate pillar values in [0, 1].
///
/// This is the simulator's working state: each period produces a fresh
/// snapshot, the source profile is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub ai_fluency: f64,
    pub domain_expertise: f64,
    pub adaptive_capacity: f64,
}

/// All inputs a single scoring pass needs, assembled by the caller.
///
/// The service builds one of these from a `DatasetProvider` and hands it to
/// the pure engine functions, so the calculators never read ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationContext {
    pub profile: IndividualProfile,
    pub occupation: OccupationRecord,
    pub required_skills: Vec<RequiredSkill>,
    pub individual_skills: Vec<IndividualSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_tiers_are_ordered_and_normalized() {
        assert!(EducationLevel::HighSchool.tier() < EducationLevel::Doctorate.tier());
        assert_eq!(EducationLevel::Doctorate.normalized(), 1.0);
        assert_eq!(EducationLevel::Master.normalized(), 0.8);
    }

    #[test]
    fn education_labels_parse_leniently() {
        assert_eq!(
            EducationLevel::parse_label("Master's"),
            Some(EducationLevel::Master)
        );
        assert_eq!(
            EducationLevel::parse_label(" high school "),
            Some(EducationLevel::HighSchool)
        );
        assert_eq!(
            EducationLevel::parse_label("PhD"),
            Some(EducationLevel::Doctorate)
        );
        assert_eq!(EducationLevel::parse_label("bootcamp"), None);
    }

    #[test]
    fn pathway_type_labels_round_trip() {
        for kind in [
            PathwayType::AiFluency,
            PathwayType::DomainIntegration,
            PathwayType::AdaptiveCapacity,
        ] {
            assert_eq!(PathwayType::parse_label(kind.label()), Some(kind));
        }
    }
}
