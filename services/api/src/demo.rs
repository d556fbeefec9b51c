use crate::infra::Datasets;
use ai_readiness::error::AppError;
use ai_readiness::scoring::{
    ParameterOverrides, ReadinessService, ScoreReport, ScoringConfig, SimulationRun, UserId,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// User id to score
    #[arg(long, default_value_t = 1)]
    pub(crate) user: u32,
    /// Occupation name to score against
    #[arg(long)]
    pub(crate) occupation: String,
    /// Readiness weight alpha in [0, 1]
    #[arg(long)]
    pub(crate) alpha: Option<f64>,
    /// Synergy weight beta (>= 0)
    #[arg(long)]
    pub(crate) beta: Option<f64>,
    /// Load CSV exports from this directory instead of the bundled tables
    #[arg(long)]
    pub(crate) csv_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// User id to score
    #[arg(long, default_value_t = 1)]
    pub(crate) user: u32,
    /// Occupation name to score against
    #[arg(long)]
    pub(crate) occupation: String,
    /// Learning pathway id to apply
    #[arg(long)]
    pub(crate) pathway: u32,
    /// Number of periods to project
    #[arg(long, default_value_t = 3)]
    pub(crate) periods: u32,
    /// Fraction of the pathway impact applied each period, in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub(crate) rate: f64,
    /// Readiness weight alpha in [0, 1]
    #[arg(long)]
    pub(crate) alpha: Option<f64>,
    /// Synergy weight beta (>= 0)
    #[arg(long)]
    pub(crate) beta: Option<f64>,
    /// Load CSV exports from this directory instead of the bundled tables
    #[arg(long)]
    pub(crate) csv_dir: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = build_service(args.csv_dir)?;
    let overrides = ParameterOverrides {
        alpha: args.alpha,
        beta: args.beta,
    };
    let report = service.score(UserId(args.user), &args.occupation, overrides)?;
    render_score_report(&report);
    Ok(())
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let service = build_service(args.csv_dir)?;
    let overrides = ParameterOverrides {
        alpha: args.alpha,
        beta: args.beta,
    };
    let run = service.simulate(
        UserId(args.user),
        &args.occupation,
        args.pathway,
        args.periods,
        args.rate,
        overrides,
    )?;
    render_simulation(&run);
    Ok(())
}

fn build_service(csv_dir: Option<PathBuf>) -> Result<Arc<ReadinessService<Datasets>>, AppError> {
    let datasets = Datasets::load(csv_dir.as_deref())?;
    Ok(Arc::new(ReadinessService::new(
        Arc::new(datasets),
        ScoringConfig::default(),
    )))
}

fn render_score_report(report: &ScoreReport) {
    println!(
        "AI-Readiness report for user {} vs {}",
        report.user_id.0, report.occupation_name
    );
    println!(
        "- AI-R score: {:.2} (unclipped {:.2}, alpha {:.2}, beta {:.2})",
        report.outcome.composite.value,
        report.outcome.composite.unclipped,
        report.outcome.composite.alpha,
        report.outcome.composite.beta
    );
    println!(
        "- Idiosyncratic readiness V^R: {:.2}",
        report.outcome.readiness.total
    );
    for component in &report.outcome.readiness.components {
        println!(
            "    - {:?}: {:.4} (weight {:.2}) {}",
            component.pillar, component.value, component.weight, component.notes
        );
    }
    println!(
        "- Systematic opportunity H^R: {:.2} (base {:.2} x growth {:.2} x regional {:.2})",
        report.outcome.opportunity.total,
        report.outcome.opportunity.base,
        report.outcome.opportunity.growth_multiplier,
        report.outcome.opportunity.regional_multiplier
    );
    println!(
        "- Synergy: {:.2}% (skills match {:.2}, timing {:.2}, alignment {:.2})",
        report.outcome.synergy.percent,
        report.outcome.synergy.skills_match,
        report.outcome.synergy.timing_factor,
        report.outcome.synergy.alignment
    );
    render_warnings(&report.outcome.warnings);
}

fn render_simulation(run: &SimulationRun) {
    println!(
        "Pathway projection: {} vs {} ({} periods, rate {:.2})",
        run.pathway_name, run.occupation_name, run.periods, run.application_rate
    );
    println!("- Market opportunity H^R held at {:.2}", run.opportunity);
    for point in &run.points {
        println!(
            "  period {:>2}: AI-R {:.2} | V^R {:.2} | synergy {:.2}% | pillars {:.3}/{:.3}/{:.3}",
            point.period,
            point.composite.value,
            point.readiness,
            point.synergy_percent,
            point.sub_scores.ai_fluency,
            point.sub_scores.domain_expertise,
            point.sub_scores.adaptive_capacity
        );
    }
    render_warnings(&run.warnings);
}

fn render_warnings(warnings: &[ai_readiness::scoring::CalcWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("Calculation warnings:");
    for warning in warnings {
        println!("  - {}", warning);
    }
}
