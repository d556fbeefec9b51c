use super::{DatasetError, DatasetProvider};
use crate::scoring::domain::{
    EducationLevel, IndividualProfile, IndividualSkill, LearningPathway, OccupationRecord,
    PathwayImpact, PathwayType, RequiredSkill, UserId,
};

/// The study's hard-coded tables as an in-memory provider.
///
/// Fixture data, not engine logic: one individual profile, six occupations,
/// three learning pathways, and the skill tables for the two occupations
/// with published requirements.
#[derive(Debug, Clone)]
pub struct SyntheticDatasets {
    profiles: Vec<IndividualProfile>,
    occupations: Vec<OccupationRecord>,
    pathways: Vec<LearningPathway>,
    required_skills: Vec<RequiredSkill>,
    individual_skills: Vec<IndividualSkill>,
}

impl Default for SyntheticDatasets {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticDatasets {
    pub fn new() -> Self {
        Self {
            profiles: vec![IndividualProfile {
                user_id: UserId(1),
                prompting_score: 0.75,
                tools_score: 0.6,
                understanding_score: 0.8,
                datalit_score: 0.9,
                output_quality_with_ai: 90.0,
                output_quality_without_ai: 60.0,
                time_without_ai: 4.0,
                time_with_ai: 1.0,
                errors_caught: 15.0,
                total_ai_errors: 20.0,
                appropriate_trust_decisions: 25.0,
                total_decisions: 30.0,
                delta_proficiency: 0.3,
                delta_t_hours_invested: 10.0,
                education_level: EducationLevel::Master,
                years_experience: 5.0,
                portfolio_score: 0.85,
                recognition_score: 0.7,
                credentials_score: 0.9,
                cognitive_flexibility: 85.0,
                social_emotional_intelligence: 90.0,
                strategic_career_management: 75.0,
            }],
            occupations: vec![
                occupation(
                    "Data Analyst with AI Skills",
                    0.8,
                    0.25,
                    120_000.0,
                    90_000.0,
                    4.0,
                    2.0,
                    500.0,
                    400.0,
                    0.6,
                    1.2,
                ),
                occupation(
                    "AI UX Researcher",
                    0.9,
                    0.35,
                    130_000.0,
                    95_000.0,
                    4.0,
                    3.0,
                    400.0,
                    300.0,
                    0.7,
                    1.1,
                ),
                occupation(
                    "AI Prompt Engineer",
                    0.7,
                    0.4,
                    140_000.0,
                    100_000.0,
                    4.0,
                    1.0,
                    600.0,
                    450.0,
                    0.8,
                    1.3,
                ),
                occupation(
                    "Data Scientist",
                    0.95,
                    0.3,
                    150_000.0,
                    110_000.0,
                    4.0,
                    3.0,
                    700.0,
                    500.0,
                    0.5,
                    1.4,
                ),
                occupation(
                    "Nursing Informatics",
                    0.75,
                    0.2,
                    110_000.0,
                    85_000.0,
                    4.0,
                    2.0,
                    300.0,
                    250.0,
                    0.4,
                    1.0,
                ),
                occupation(
                    "Medical Coding",
                    0.6,
                    0.15,
                    90_000.0,
                    70_000.0,
                    2.0,
                    0.0,
                    200.0,
                    180.0,
                    0.3,
                    0.9,
                ),
            ],
            pathways: vec![
                LearningPathway {
                    pathway_id: 1,
                    pathway_name: "Prompt Engineering Fundamentals".to_string(),
                    pathway_type: PathwayType::AiFluency,
                    impact: PathwayImpact {
                        ai_fluency: 0.2,
                        domain_expertise: 0.05,
                        adaptive_capacity: 0.1,
                    },
                },
                LearningPathway {
                    pathway_id: 2,
                    pathway_name: "AI for Financial Analysis".to_string(),
                    pathway_type: PathwayType::DomainIntegration,
                    impact: PathwayImpact {
                        ai_fluency: 0.1,
                        domain_expertise: 0.2,
                        adaptive_capacity: 0.05,
                    },
                },
                LearningPathway {
                    pathway_id: 3,
                    pathway_name: "Human-AI Collaboration".to_string(),
                    pathway_type: PathwayType::AdaptiveCapacity,
                    impact: PathwayImpact {
                        ai_fluency: 0.05,
                        domain_expertise: 0.1,
                        adaptive_capacity: 0.2,
                    },
                },
            ],
            required_skills: vec![
                required("Data Analyst with AI Skills", "Python", 80.0, 0.7),
                required("Data Analyst with AI Skills", "Data Visualization", 70.0, 0.8),
                required("Data Analyst with AI Skills", "Machine Learning", 60.0, 0.5),
                required("AI UX Researcher", "User Research", 90.0, 0.9),
                required("AI UX Researcher", "UI Design", 80.0, 0.7),
                required("AI UX Researcher", "AI Ethics", 75.0, 0.6),
            ],
            individual_skills: vec![
                held(1, "Python", 70.0),
                held(1, "Data Visualization", 60.0),
                held(1, "Machine Learning", 40.0),
            ],
        }
    }
}

impl DatasetProvider for SyntheticDatasets {
    fn profile(&self, user_id: UserId) -> Result<IndividualProfile, DatasetError> {
        self.profiles
            .iter()
            .find(|profile| profile.user_id == user_id)
            .cloned()
            .ok_or(DatasetError::UnknownUser(user_id.0))
    }

    fn occupations(&self) -> Result<Vec<OccupationRecord>, DatasetError> {
        Ok(self.occupations.clone())
    }

    fn occupation(&self, name: &str) -> Result<OccupationRecord, DatasetError> {
        self.occupations
            .iter()
            .find(|record| record.occupation_name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .ok_or_else(|| DatasetError::UnknownOccupation(name.to_string()))
    }

    fn pathways(&self) -> Result<Vec<LearningPathway>, DatasetError> {
        Ok(self.pathways.clone())
    }

    fn pathway(&self, pathway_id: u32) -> Result<LearningPathway, DatasetError> {
        self.pathways
            .iter()
            .find(|pathway| pathway.pathway_id == pathway_id)
            .cloned()
            .ok_or(DatasetError::UnknownPathway(pathway_id))
    }

    fn required_skills(&self, occupation: &str) -> Result<Vec<RequiredSkill>, DatasetError> {
        Ok(self
            .required_skills
            .iter()
            .filter(|skill| skill.occupation_name.eq_ignore_ascii_case(occupation.trim()))
            .cloned()
            .collect())
    }

    fn individual_skills(&self, user_id: UserId) -> Result<Vec<IndividualSkill>, DatasetError> {
        Ok(self
            .individual_skills
            .iter()
            .filter(|skill| skill.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn occupation(
    name: &str,
    ai_enhancement_score: f64,
    job_growth_rate: f64,
    ai_skilled_wage: f64,
    median_wage: f64,
    education_years_required: f64,
    experience_years_required: f64,
    current_job_postings: f64,
    previous_job_postings: f64,
    remote_work_factor: f64,
    local_demand: f64,
) -> OccupationRecord {
    OccupationRecord {
        occupation_name: name.to_string(),
        ai_enhancement_score,
        job_growth_rate,
        ai_skilled_wage,
        median_wage,
        education_years_required,
        experience_years_required,
        current_job_postings,
        previous_job_postings,
        remote_work_factor,
        local_demand,
        national_avg_demand: 1.0,
    }
}

fn required(occupation: &str, skill: &str, required_score: f64, importance: f64) -> RequiredSkill {
    RequiredSkill {
        occupation_name: occupation.to_string(),
        skill_name: skill.to_string(),
        required_score,
        importance,
    }
}

fn held(user_id: u32, skill: &str, score: f64) -> IndividualSkill {
    IndividualSkill {
        user_id: UserId(user_id),
        skill_name: skill.to_string(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_the_published_shapes() {
        let data = SyntheticDatasets::new();
        assert_eq!(data.occupations().unwrap().len(), 6);
        assert_eq!(data.pathways().unwrap().len(), 3);
        assert_eq!(
            data.required_skills("Data Analyst with AI Skills")
                .unwrap()
                .len(),
            3
        );
        assert_eq!(data.individual_skills(UserId(1)).unwrap().len(), 3);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let data = SyntheticDatasets::new();
        assert!(data.occupation("data analyst with ai skills").is_ok());
        assert!(data.occupation(" Data Scientist ").is_ok());
    }

    #[test]
    fn unknown_keys_are_reported() {
        let data = SyntheticDatasets::new();
        assert!(matches!(
            data.profile(UserId(42)),
            Err(DatasetError::UnknownUser(42))
        ));
        assert!(matches!(
            data.occupation("Blacksmith"),
            Err(DatasetError::UnknownOccupation(_))
        ));
        assert!(matches!(
            data.pathway(9),
            Err(DatasetError::UnknownPathway(9))
        ));
    }

    #[test]
    fn skills_for_occupation_without_requirements_are_empty() {
        let data = SyntheticDatasets::new();
        assert!(data.required_skills("Medical Coding").unwrap().is_empty());
    }
}
