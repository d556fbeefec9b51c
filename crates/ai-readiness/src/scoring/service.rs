use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::domain::{CalculationContext, LearningPathway, OccupationRecord, UserId};
use super::opportunity::opportunity_score;
use super::simulator::SimulationRun;
use super::{ScoreOutcome, ScoringEngine};
use crate::datasets::{DatasetError, DatasetProvider};

/// Service composing a dataset provider with the scoring engine.
///
/// Each call assembles a fresh `CalculationContext`, so no mutable state is
/// shared between requests and session profiles stay independent.
pub struct ReadinessService<D> {
    datasets: Arc<D>,
    config: ScoringConfig,
}

impl<D> ReadinessService<D>
where
    D: DatasetProvider + 'static,
{
    pub fn new(datasets: Arc<D>, config: ScoringConfig) -> Self {
        Self { datasets, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn occupations(&self) -> Result<Vec<OccupationRecord>, ServiceError> {
        Ok(self.datasets.occupations()?)
    }

    /// Catalog view pairing each occupation with its market opportunity.
    pub fn occupation_outlook(&self) -> Result<Vec<OccupationOutlook>, ServiceError> {
        let mut entries = Vec::new();
        for occupation in self.datasets.occupations()? {
            let (breakdown, _) = opportunity_score(&occupation, &self.config);
            entries.push(OccupationOutlook {
                opportunity: breakdown.total,
                occupation,
            });
        }
        Ok(entries)
    }

    pub fn pathways(&self) -> Result<Vec<LearningPathway>, ServiceError> {
        Ok(self.datasets.pathways()?)
    }

    /// Assemble the full calculation context for one user/occupation pair.
    pub fn context(
        &self,
        user_id: UserId,
        occupation: &str,
    ) -> Result<CalculationContext, ServiceError> {
        let profile = self.datasets.profile(user_id)?;
        let occupation = self.datasets.occupation(occupation)?;
        let required_skills = self.datasets.required_skills(&occupation.occupation_name)?;
        let individual_skills = self.datasets.individual_skills(user_id)?;
        Ok(CalculationContext {
            profile,
            occupation,
            required_skills,
            individual_skills,
        })
    }

    /// Score one user against one occupation.
    pub fn score(
        &self,
        user_id: UserId,
        occupation: &str,
        overrides: ParameterOverrides,
    ) -> Result<ScoreReport, ServiceError> {
        let context = self.context(user_id, occupation)?;
        let engine = ScoringEngine::new(overrides.applied_to(&self.config));
        let outcome = engine.evaluate(&context);
        Ok(ScoreReport {
            user_id,
            occupation_name: context.occupation.occupation_name.clone(),
            outcome,
        })
    }

    /// Project a learning pathway for one user/occupation pair.
    pub fn simulate(
        &self,
        user_id: UserId,
        occupation: &str,
        pathway_id: u32,
        periods: u32,
        application_rate: f64,
        overrides: ParameterOverrides,
    ) -> Result<SimulationRun, ServiceError> {
        let context = self.context(user_id, occupation)?;
        let pathway = self.datasets.pathway(pathway_id)?;
        let engine = ScoringEngine::new(overrides.applied_to(&self.config));
        Ok(engine.simulate(&context, &pathway, periods, application_rate))
    }

    /// Score a user against every occupation in the catalog, best first.
    pub fn scoreboard(
        &self,
        user_id: UserId,
        overrides: ParameterOverrides,
    ) -> Result<Vec<ScoreboardEntry>, ServiceError> {
        let engine = ScoringEngine::new(overrides.applied_to(&self.config));
        let mut entries = Vec::new();
        for occupation in self.occupations()? {
            let context = self.context(user_id, &occupation.occupation_name)?;
            let outcome = engine.evaluate(&context);
            entries.push(ScoreboardEntry {
                occupation_name: occupation.occupation_name,
                readiness: outcome.readiness.total,
                opportunity: outcome.opportunity.total,
                synergy_percent: outcome.synergy.percent,
                score: outcome.composite.value,
            });
        }
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(entries)
    }
}

/// Optional per-request composition parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
}

impl ParameterOverrides {
    fn applied_to(&self, base: &ScoringConfig) -> ScoringConfig {
        let mut config = base.clone();
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(beta) = self.beta {
            config.beta = beta;
        }
        config
    }
}

/// One user/occupation scoring result with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub user_id: UserId,
    pub occupation_name: String,
    #[serde(flatten)]
    pub outcome: ScoreOutcome,
}

/// One catalog occupation with its computed H^R.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationOutlook {
    #[serde(flatten)]
    pub occupation: OccupationRecord,
    /// H^R for this occupation under the service configuration.
    pub opportunity: f64,
}

/// Compact row for catalog-wide comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardEntry {
    pub occupation_name: String,
    pub readiness: f64,
    pub opportunity: f64,
    pub synergy_percent: f64,
    pub score: f64,
}

/// Error raised by the readiness service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
