//! End-to-end specifications for pathway projections through the service
//! facade.

mod common {
    use std::sync::Arc;

    use ai_readiness::datasets::SyntheticDatasets;
    use ai_readiness::scoring::{ParameterOverrides, ReadinessService, ScoringConfig, UserId};
    use ai_readiness::scoring::SimulationRun;

    pub(super) const DATA_ANALYST: &str = "Data Analyst with AI Skills";

    pub(super) fn run_pathway(pathway_id: u32, periods: u32, rate: f64) -> SimulationRun {
        let service = ReadinessService::new(
            Arc::new(SyntheticDatasets::new()),
            ScoringConfig::default(),
        );
        service
            .simulate(
                UserId(1),
                DATA_ANALYST,
                pathway_id,
                periods,
                rate,
                ParameterOverrides::default(),
            )
            .expect("simulation")
    }
}

mod trajectories {
    use super::common::*;

    #[test]
    fn baseline_period_matches_the_direct_score() {
        let run = run_pathway(1, 3, 1.0);
        assert_eq!(run.points.len(), 4);
        assert!((run.points[0].composite.value - 85.810369).abs() < 1e-4);
    }

    #[test]
    fn each_catalog_pathway_never_lowers_the_score() {
        for pathway_id in 1..=3 {
            let run = run_pathway(pathway_id, 5, 1.0);
            for pair in run.points.windows(2) {
                assert!(
                    pair[1].composite.value >= pair[0].composite.value - 1e-9,
                    "pathway {} regressed at period {}",
                    pathway_id,
                    pair[1].period
                );
            }
        }
    }

    #[test]
    fn long_horizons_stay_inside_display_bounds() {
        let run = run_pathway(2, 25, 1.0);
        for point in &run.points {
            assert!(point.readiness >= 0.0 && point.readiness <= 100.0);
            assert!(point.synergy_percent >= 0.0 && point.synergy_percent <= 100.0);
            assert!(point.composite.value >= 0.0 && point.composite.value <= 100.0);
        }
    }

    #[test]
    fn partial_application_rate_slows_progress() {
        let full = run_pathway(1, 3, 1.0);
        let half = run_pathway(1, 3, 0.5);
        assert!(half.points[3].readiness < full.points[3].readiness);
        assert!(half.points[3].readiness > half.points[0].readiness);
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(run_pathway(3, 8, 0.75), run_pathway(3, 8, 0.75));
    }

    #[test]
    fn market_opportunity_is_constant_over_the_horizon() {
        let run = run_pathway(1, 6, 1.0);
        assert!((run.opportunity - 84.5).abs() < 1e-4);
    }
}
