use serde::{Deserialize, Serialize};

/// Weight tables and guard constants backing the scoring formulas.
///
/// Every weight group is normalized at use-time, so callers may supply
/// unnormalized emphasis values without breaking the [0, 100] bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight on individual factors vs. market factors, in [0, 1].
    pub alpha: f64,
    /// Synergy coefficient, >= 0.
    pub beta: f64,
    pub readiness_weights: PillarWeights,
    pub fluency_weights: FluencyWeights,
    pub expertise_weights: ExpertiseWeights,
    pub opportunity_weights: OpportunityWeights,
    pub alignment_weights: AlignmentWeights,
    /// Floor applied to the growth and regional market multipliers.
    pub multiplier_floor: f64,
    /// Cap applied to the growth and regional market multipliers.
    pub multiplier_cap: f64,
    /// Job growth rate mapping to a full [0, 1] contribution.
    pub growth_rate_cap: f64,
    /// Wage premium mapping to a full [0, 1] contribution.
    pub wage_premium_cap: f64,
    /// Productivity and time-saved ratios saturate at this multiple.
    pub productivity_ratio_cap: f64,
    /// Learning velocity (proficiency per hour) saturating point.
    pub learning_velocity_cap: f64,
    /// Years at which the experience transform reaches half saturation.
    pub experience_half_life_years: f64,
    /// Scale for the entry-accessibility inverse transform.
    pub accessibility_scale_years: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.1,
            readiness_weights: PillarWeights::default(),
            fluency_weights: FluencyWeights::default(),
            expertise_weights: ExpertiseWeights::default(),
            opportunity_weights: OpportunityWeights::default(),
            alignment_weights: AlignmentWeights::default(),
            multiplier_floor: 0.5,
            multiplier_cap: 2.0,
            growth_rate_cap: 0.5,
            wage_premium_cap: 1.0,
            productivity_ratio_cap: 3.0,
            learning_velocity_cap: 0.05,
            experience_half_life_years: 5.0,
            accessibility_scale_years: 6.0,
        }
    }
}

impl ScoringConfig {
    /// Config with the composition parameters replaced.
    pub fn with_parameters(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }
}

/// Relative emphasis of the three readiness pillars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub ai_fluency: f64,
    pub domain_expertise: f64,
    pub adaptive_capacity: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            ai_fluency: 0.40,
            domain_expertise: 0.35,
            adaptive_capacity: 0.25,
        }
    }
}

impl PillarWeights {
    /// Weights scaled to sum to 1.0; a degenerate (zero or non-finite) total
    /// falls back to equal thirds.
    pub fn normalized(&self) -> PillarWeights {
        let total = self.ai_fluency + self.domain_expertise + self.adaptive_capacity;
        if !total.is_finite() || total <= 0.0 {
            return PillarWeights {
                ai_fluency: 1.0 / 3.0,
                domain_expertise: 1.0 / 3.0,
                adaptive_capacity: 1.0 / 3.0,
            };
        }
        PillarWeights {
            ai_fluency: self.ai_fluency / total,
            domain_expertise: self.domain_expertise / total,
            adaptive_capacity: self.adaptive_capacity / total,
        }
    }
}

/// Weights over the eight AI-Fluency components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluencyWeights {
    pub prompting: f64,
    pub tools: f64,
    pub understanding: f64,
    pub data_literacy: f64,
    pub productivity: f64,
    pub error_catching: f64,
    pub trust_calibration: f64,
    pub learning_velocity: f64,
}

impl Default for FluencyWeights {
    fn default() -> Self {
        Self {
            prompting: 0.20,
            tools: 0.15,
            understanding: 0.15,
            data_literacy: 0.10,
            productivity: 0.10,
            error_catching: 0.10,
            trust_calibration: 0.10,
            learning_velocity: 0.10,
        }
    }
}

impl FluencyWeights {
    pub fn total(&self) -> f64 {
        self.prompting
            + self.tools
            + self.understanding
            + self.data_literacy
            + self.productivity
            + self.error_catching
            + self.trust_calibration
            + self.learning_velocity
    }
}

/// Weights over the Domain-Expertise components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseWeights {
    pub education: f64,
    pub experience: f64,
    pub portfolio: f64,
    pub recognition: f64,
    pub credentials: f64,
}

impl Default for ExpertiseWeights {
    fn default() -> Self {
        Self {
            education: 0.25,
            experience: 0.30,
            portfolio: 0.20,
            recognition: 0.10,
            credentials: 0.15,
        }
    }
}

impl ExpertiseWeights {
    pub fn total(&self) -> f64 {
        self.education + self.experience + self.portfolio + self.recognition + self.credentials
    }
}

/// Weights over the base-opportunity components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityWeights {
    pub ai_enhancement: f64,
    pub job_growth: f64,
    pub wage_premium: f64,
    pub accessibility: f64,
}

impl Default for OpportunityWeights {
    fn default() -> Self {
        Self {
            ai_enhancement: 0.35,
            job_growth: 0.25,
            wage_premium: 0.25,
            accessibility: 0.15,
        }
    }
}

impl OpportunityWeights {
    pub fn total(&self) -> f64 {
        self.ai_enhancement + self.job_growth + self.wage_premium + self.accessibility
    }
}

/// Relative emphasis of skills match vs. timing in the alignment factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentWeights {
    pub skills_match: f64,
    pub timing: f64,
}

impl Default for AlignmentWeights {
    fn default() -> Self {
        Self {
            skills_match: 0.7,
            timing: 0.3,
        }
    }
}

impl AlignmentWeights {
    /// Weights scaled to sum to 1.0, falling back to an even split.
    pub fn normalized(&self) -> AlignmentWeights {
        let total = self.skills_match + self.timing;
        if !total.is_finite() || total <= 0.0 {
            return AlignmentWeights {
                skills_match: 0.5,
                timing: 0.5,
            };
        }
        AlignmentWeights {
            skills_match: self.skills_match / total,
            timing: self.timing / total,
        }
    }
}
