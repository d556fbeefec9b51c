use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{DatasetError, DatasetProvider};
use crate::scoring::domain::{
    EducationLevel, IndividualProfile, IndividualSkill, LearningPathway, OccupationRecord,
    PathwayImpact, PathwayType, RequiredSkill, UserId,
};

/// CSV-backed provider for the five study tables.
///
/// Column headers follow the published dataset exports
/// (`job_growth_rate_g`, `required_skill_score`, ...), so a directory of
/// exported CSVs can stand in for the synthetic tables unchanged.
#[derive(Debug, Clone)]
pub struct CsvDatasets {
    profiles: Vec<IndividualProfile>,
    occupations: Vec<OccupationRecord>,
    pathways: Vec<LearningPathway>,
    required_skills: Vec<RequiredSkill>,
    individual_skills: Vec<IndividualSkill>,
}

impl CsvDatasets {
    /// Load all five tables from a directory using the conventional file
    /// names (`individual_profiles.csv`, `occupations.csv`,
    /// `learning_pathways.csv`, `required_skills.csv`,
    /// `individual_skills.csv`).
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        Self::from_readers(
            open(dir, "individual_profiles.csv")?,
            open(dir, "occupations.csv")?,
            open(dir, "learning_pathways.csv")?,
            open(dir, "required_skills.csv")?,
            open(dir, "individual_skills.csv")?,
        )
    }

    pub fn from_readers<P, O, W, R, S>(
        profiles: P,
        occupations: O,
        pathways: W,
        required_skills: R,
        individual_skills: S,
    ) -> Result<Self, DatasetError>
    where
        P: Read,
        O: Read,
        W: Read,
        R: Read,
        S: Read,
    {
        Ok(Self {
            profiles: parse_rows::<ProfileRow, _>(profiles)?
                .into_iter()
                .map(ProfileRow::into_profile)
                .collect::<Result<_, _>>()?,
            occupations: parse_rows::<OccupationRow, _>(occupations)?
                .into_iter()
                .map(OccupationRow::into_record)
                .collect(),
            pathways: parse_rows::<PathwayRow, _>(pathways)?
                .into_iter()
                .map(PathwayRow::into_pathway)
                .collect::<Result<_, _>>()?,
            required_skills: parse_rows::<RequiredSkillRow, _>(required_skills)?
                .into_iter()
                .map(RequiredSkillRow::into_skill)
                .collect(),
            individual_skills: parse_rows::<IndividualSkillRow, _>(individual_skills)?
                .into_iter()
                .map(IndividualSkillRow::into_skill)
                .collect(),
        })
    }
}

fn open(dir: &Path, name: &str) -> Result<File, DatasetError> {
    let path = dir.join(name);
    File::open(&path).map_err(|err| DatasetError::Unavailable(format!("{}: {err}", path.display())))
}

fn parse_rows<T, R>(reader: R) -> Result<Vec<T>, DatasetError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<T>() {
        rows.push(record.map_err(|err| DatasetError::Malformed(err.to_string()))?);
    }
    Ok(rows)
}

impl DatasetProvider for CsvDatasets {
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

#[derive(Debug, Deserialize)]
struct ProfileRow {
    user_id: u32,
    prompting_score: f64,
    tools_score: f64,
    understanding_score: f64,
    datalit_score: f64,
    output_quality_with_ai: f64,
    output_quality_without_ai: f64,
    time_without_ai: f64,
    time_with_ai: f64,
    errors_caught: f64,
    total_ai_errors: f64,
    appropriate_trust_decisions: f64,
    total_decisions: f64,
    delta_proficiency: f64,
    delta_t_hours_invested: f64,
    education_level: String,
    years_experience: f64,
    portfolio_score: f64,
    recognition_score: f64,
    credentials_score: f64,
    cognitive_flexibility: f64,
    social_emotional_intelligence: f64,
    strategic_career_management: f64,
}

impl ProfileRow {
    fn into_profile(self) -> Result<IndividualProfile, DatasetError> {
        let education_level = EducationLevel::parse_label(&self.education_level).ok_or_else(|| {
            DatasetError::Malformed(format!(
                "unrecognized education level '{}' for user {}",
                self.education_level, self.user_id
            ))
        })?;
        Ok(IndividualProfile {
            user_id: UserId(self.user_id),
            prompting_score: self.prompting_score,
            tools_score: self.tools_score,
            understanding_score: self.understanding_score,
            datalit_score: self.datalit_score,
            output_quality_with_ai: self.output_quality_with_ai,
            output_quality_without_ai: self.output_quality_without_ai,
            time_without_ai: self.time_without_ai,
            time_with_ai: self.time_with_ai,
            errors_caught: self.errors_caught,
            total_ai_errors: self.total_ai_errors,
            appropriate_trust_decisions: self.appropriate_trust_decisions,
            total_decisions: self.total_decisions,
            delta_proficiency: self.delta_proficiency,
            delta_t_hours_invested: self.delta_t_hours_invested,
            education_level,
            years_experience: self.years_experience,
            portfolio_score: self.portfolio_score,
            recognition_score: self.recognition_score,
            credentials_score: self.credentials_score,
            cognitive_flexibility: self.cognitive_flexibility,
            social_emotional_intelligence: self.social_emotional_intelligence,
            strategic_career_management: self.strategic_career_management,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OccupationRow {
    occupation_name: String,
    ai_enhancement_score: f64,
    #[serde(rename = "job_growth_rate_g")]
    job_growth_rate: f64,
    ai_skilled_wage: f64,
    median_wage: f64,
    education_years_required: f64,
    experience_years_required: f64,
    current_job_postings: f64,
    previous_job_postings: f64,
    remote_work_factor: f64,
    local_demand: f64,
    national_avg_demand: f64,
}

impl OccupationRow {
    fn into_record(self) -> OccupationRecord {
        OccupationRecord {
            occupation_name: self.occupation_name,
            ai_enhancement_score: self.ai_enhancement_score,
            job_growth_rate: self.job_growth_rate,
            ai_skilled_wage: self.ai_skilled_wage,
            median_wage: self.median_wage,
            education_years_required: self.education_years_required,
            experience_years_required: self.experience_years_required,
            current_job_postings: self.current_job_postings,
            previous_job_postings: self.previous_job_postings,
            remote_work_factor: self.remote_work_factor,
            local_demand: self.local_demand,
            national_avg_demand: self.national_avg_demand,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PathwayRow {
    pathway_id: u32,
    pathway_name: String,
    pathway_type: String,
    impact_ai_fluency: f64,
    impact_domain_expertise: f64,
    impact_adaptive_capacity: f64,
}

impl PathwayRow {
    fn into_pathway(self) -> Result<LearningPathway, DatasetError> {
        let pathway_type = PathwayType::parse_label(&self.pathway_type).ok_or_else(|| {
            DatasetError::Malformed(format!(
                "unrecognized pathway type '{}' for pathway {}",
                self.pathway_type, self.pathway_id
            ))
        })?;
        Ok(LearningPathway {
            pathway_id: self.pathway_id,
            pathway_name: self.pathway_name,
            pathway_type,
            impact: PathwayImpact {
                ai_fluency: self.impact_ai_fluency,
                domain_expertise: self.impact_domain_expertise,
                adaptive_capacity: self.impact_adaptive_capacity,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct RequiredSkillRow {
    occupation_name: String,
    skill_name: String,
    required_skill_score: f64,
    skill_importance: f64,
}

impl RequiredSkillRow {
    fn into_skill(self) -> RequiredSkill {
        RequiredSkill {
            occupation_name: self.occupation_name,
            skill_name: self.skill_name,
            required_score: self.required_skill_score,
            importance: self.skill_importance,
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndividualSkillRow {
    user_id: u32,
    skill_name: String,
    individual_skill_score: f64,
}

impl IndividualSkillRow {
    fn into_skill(self) -> IndividualSkill {
        IndividualSkill {
            user_id: UserId(self.user_id),
            skill_name: self.skill_name,
            score: self.individual_skill_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PROFILES: &str = "user_id,prompting_score,tools_score,understanding_score,datalit_score,output_quality_with_ai,output_quality_without_ai,time_without_ai,time_with_ai,errors_caught,total_ai_errors,appropriate_trust_decisions,total_decisions,delta_proficiency,delta_t_hours_invested,education_level,years_experience,portfolio_score,recognition_score,credentials_score,cognitive_flexibility,social_emotional_intelligence,strategic_career_management\n1,0.75,0.6,0.8,0.9,90,60,4,1,15,20,25,30,0.3,10,Master's,5,0.85,0.7,0.9,85,90,75\n";
    const OCCUPATIONS: &str = "occupation_name,ai_enhancement_score,job_growth_rate_g,ai_skilled_wage,median_wage,education_years_required,experience_years_required,current_job_postings,previous_job_postings,remote_work_factor,local_demand,national_avg_demand\nData Analyst with AI Skills,0.8,0.25,120000,90000,4,2,500,400,0.6,1.2,1.0\n";
    const PATHWAYS: &str = "pathway_id,pathway_name,pathway_type,impact_ai_fluency,impact_domain_expertise,impact_adaptive_capacity\n1,Prompt Engineering Fundamentals,AI-Fluency,0.2,0.05,0.1\n";
    const REQUIRED: &str = "occupation_name,skill_name,required_skill_score,skill_importance\nData Analyst with AI Skills,Python,80,0.7\nData Analyst with AI Skills,Data Visualization,70,0.8\n";
    const SKILLS: &str =
        "user_id,skill_name,individual_skill_score\n1,Python,70\n1,Data Visualization,60\n";

    fn load() -> CsvDatasets {
        CsvDatasets::from_readers(
            Cursor::new(PROFILES),
            Cursor::new(OCCUPATIONS),
            Cursor::new(PATHWAYS),
            Cursor::new(REQUIRED),
            Cursor::new(SKILLS),
        )
        .expect("fixture CSVs parse")
    }

    #[test]
    fn parses_all_five_tables() {
        let data = load();
        let profile = data.profile(UserId(1)).expect("profile");
        assert_eq!(profile.education_level, EducationLevel::Master);
        assert_eq!(profile.output_quality_with_ai, 90.0);

        let occupation = data
            .occupation("Data Analyst with AI Skills")
            .expect("occupation");
        assert_eq!(occupation.job_growth_rate, 0.25);

        let pathway = data.pathway(1).expect("pathway");
        assert_eq!(pathway.pathway_type, PathwayType::AiFluency);
        assert_eq!(pathway.impact.ai_fluency, 0.2);

        assert_eq!(
            data.required_skills("Data Analyst with AI Skills")
                .unwrap()
                .len(),
            2
        );
        assert_eq!(data.individual_skills(UserId(1)).unwrap().len(), 2);
    }

    #[test]
    fn rejects_unknown_education_label() {
        let bad = PROFILES.replace("Master's", "Wizard");
        let result = CsvDatasets::from_readers(
            Cursor::new(bad),
            Cursor::new(OCCUPATIONS),
            Cursor::new(PATHWAYS),
            Cursor::new(REQUIRED),
            Cursor::new(SKILLS),
        );
        assert!(matches!(result, Err(DatasetError::Malformed(_))));
    }

    #[test]
    fn rejects_non_numeric_columns() {
        let bad = OCCUPATIONS.replace("0.25", "soon");
        let result = CsvDatasets::from_readers(
            Cursor::new(PROFILES),
            Cursor::new(bad),
            Cursor::new(PATHWAYS),
            Cursor::new(REQUIRED),
            Cursor::new(SKILLS),
        );
        assert!(matches!(result, Err(DatasetError::Malformed(_))));
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let result = CsvDatasets::from_dir("/nonexistent/readiness-data");
        assert!(matches!(result, Err(DatasetError::Unavailable(_))));
    }
}
