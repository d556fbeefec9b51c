//! Injectable data sources for the scoring engine.
//!
//! The engine never reaches into ambient state: callers assemble a
//! [`crate::scoring::CalculationContext`] from one of these providers, so a
//! real data source can replace the synthetic study tables without touching
//! the calculators.

mod csv;
mod synthetic;

pub use csv::CsvDatasets;
pub use synthetic::SyntheticDatasets;

use crate::scoring::domain::{
    IndividualProfile, IndividualSkill, LearningPathway, OccupationRecord, RequiredSkill, UserId,
};

/// Source abstraction for the five study tables.
pub trait DatasetProvider: Send + Sync {
    fn profile(&self, user_id: UserId) -> Result<IndividualProfile, DatasetError>;
    fn occupations(&self) -> Result<Vec<OccupationRecord>, DatasetError>;
    fn occupation(&self, name: &str) -> Result<OccupationRecord, DatasetError>;
    fn pathways(&self) -> Result<Vec<LearningPathway>, DatasetError>;
    fn pathway(&self, pathway_id: u32) -> Result<LearningPathway, DatasetError>;
    fn required_skills(&self, occupation: &str) -> Result<Vec<RequiredSkill>, DatasetError>;
    fn individual_skills(&self, user_id: UserId) -> Result<Vec<IndividualSkill>, DatasetError>;
}

/// Error enumeration for dataset lookups and ingestion.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unknown user id {0}")]
    UnknownUser(u32),
    #[error("unknown occupation '{0}'")]
    UnknownOccupation(String),
    #[error("unknown pathway id {0}")]
    UnknownPathway(u32),
    #[error("malformed dataset record: {0}")]
    Malformed(String),
    #[error("dataset unavailable: {0}")]
    Unavailable(String),
}
