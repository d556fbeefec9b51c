use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use ai_readiness::config::AppConfig;
use ai_readiness::datasets::{
    CsvDatasets, DatasetError, DatasetProvider, SyntheticDatasets,
};
use ai_readiness::scoring::{
    IndividualProfile, IndividualSkill, LearningPathway, OccupationRecord, ReadinessService,
    RequiredSkill, ScoringConfig, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Dataset backend selected at startup: the bundled study tables, or a
/// directory of CSV exports.
pub(crate) enum Datasets {
    Synthetic(SyntheticDatasets),
    Csv(CsvDatasets),
}

impl Datasets {
    pub(crate) fn load(csv_dir: Option<&Path>) -> Result<Self, DatasetError> {
        match csv_dir {
            Some(dir) => Ok(Self::Csv(CsvDatasets::from_dir(dir)?)),
            None => Ok(Self::Synthetic(SyntheticDatasets::new())),
        }
    }
}

impl DatasetProvider for Datasets {
    fn profile(&self, user_id: UserId) -> Result<IndividualProfile, DatasetError> {
        match self {
            Self::Synthetic(data) => data.profile(user_id),
            Self::Csv(data) => data.profile(user_id),
        }
    }

    fn occupations(&self) -> Result<Vec<OccupationRecord>, DatasetError> {
        match self {
            Self::Synthetic(data) => data.occupations(),
            Self::Csv(data) => data.occupations(),
        }
    }

    fn occupation(&self, name: &str) -> Result<OccupationRecord, DatasetError> {
        match self {
            Self::Synthetic(data) => data.occupation(name),
            Self::Csv(data) => data.occupation(name),
        }
    }

    fn pathways(&self) -> Result<Vec<LearningPathway>, DatasetError> {
        match self {
            Self::Synthetic(data) => data.pathways(),
            Self::Csv(data) => data.pathways(),
        }
    }

    fn pathway(&self, pathway_id: u32) -> Result<LearningPathway, DatasetError> {
        match self {
            Self::Synthetic(data) => data.pathway(pathway_id),
            Self::Csv(data) => data.pathway(pathway_id),
        }
    }

    fn required_skills(&self, occupation: &str) -> Result<Vec<RequiredSkill>, DatasetError> {
        match self {
            Self::Synthetic(data) => data.required_skills(occupation),
            Self::Csv(data) => data.required_skills(occupation),
        }
    }

    fn individual_skills(&self, user_id: UserId) -> Result<Vec<IndividualSkill>, DatasetError> {
        match self {
            Self::Synthetic(data) => data.individual_skills(user_id),
            Self::Csv(data) => data.individual_skills(user_id),
        }
    }
}

pub(crate) fn scoring_config(config: &AppConfig) -> ScoringConfig {
    ScoringConfig::default().with_parameters(config.scoring.alpha, config.scoring.beta)
}

pub(crate) fn build_service(
    csv_dir: Option<&Path>,
    config: &AppConfig,
) -> Result<Arc<ReadinessService<Datasets>>, DatasetError> {
    Ok(Arc::new(ReadinessService::new(
        Arc::new(Datasets::load(csv_dir)?),
        scoring_config(config),
    )))
}
