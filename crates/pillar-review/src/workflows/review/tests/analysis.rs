use super::common::*;
use crate::workflows::review::analysis::recommendations_for;
use crate::workflows::review::{
    AnalysisConfig, AnalysisEngine, Implication, NarrativePolicy, Pillar, ReviewInput,
};

fn engine(policy: NarrativePolicy) -> AnalysisEngine {
    AnalysisEngine::new(AnalysisConfig::with_policy(policy))
}

#[test]
fn governance_scenario_triggers_positive_progress_only() {
    let result = engine(NarrativePolicy::Thresholds).analyze(&governance_scenario());

    assert_eq!(result.not_completed, 4);
    let ratios = result.ratios.expect("ratios computed");
    assert!((ratios.green - 0.6).abs() < f64::EPSILON);
    assert_eq!(result.implications, vec![Implication::PositiveProgress]);
}

#[test]
fn threshold_rules_append_in_fixed_order() {
    let result =
        engine(NarrativePolicy::Thresholds).analyze(&input(Pillar::Economy, 10, 2, 2, 4, 4));

    assert_eq!(
        result.implications,
        vec![
            Implication::WeakDelivery,
            Implication::ModerateDelay,
            Implication::UrgentIntervention,
        ]
    );
}

#[test]
fn threshold_boundaries_are_inclusive_or_strict_per_rule() {
    // green 0.5 counts as positive, red 0.2 counts as urgent, amber 0.3 is not a delay.
    let result =
        engine(NarrativePolicy::Thresholds).analyze(&input(Pillar::Governance, 10, 5, 5, 3, 2));

    assert_eq!(
        result.implications,
        vec![
            Implication::PositiveProgress,
            Implication::UrgentIntervention
        ]
    );
}

#[test]
fn ratios_are_not_required_to_partition_total() {
    let result =
        engine(NarrativePolicy::Thresholds).analyze(&input(Pillar::HumanCentric, 4, 1, 4, 4, 4));

    let ratios = result.ratios.expect("ratios computed");
    assert!((ratios.green + ratios.amber + ratios.red - 3.0).abs() < 1e-9);
}

#[test]
fn zero_total_yields_ratio_free_result() {
    for policy in [NarrativePolicy::Thresholds, NarrativePolicy::Dominant] {
        let result = engine(policy).analyze(&input(Pillar::Infrastructure, 0, 0, 0, 0, 0));

        assert_eq!(result.not_completed, 0);
        assert!(result.ratios.is_none());
        assert!(result.implications.is_empty());
        assert!(result.outlook.is_empty());
        assert_eq!(result.recommendations.len(), 3);
    }
}

#[test]
fn not_completed_is_left_unclamped() {
    let raw = ReviewInput {
        completed: 7,
        ..input(Pillar::Governance, 5, 0, 1, 1, 1)
    };

    let result = engine(NarrativePolicy::Thresholds).analyze(&raw);

    assert_eq!(result.not_completed, -2);
}

#[test]
fn dominant_policy_picks_single_statement_with_green_tie_break() {
    let engine = engine(NarrativePolicy::Dominant);

    let tie_all = engine.analyze(&input(Pillar::Governance, 9, 3, 3, 3, 3));
    assert_eq!(tie_all.implications, vec![Implication::GreenMajority]);

    let amber_red_tie = engine.analyze(&input(Pillar::Governance, 9, 3, 1, 4, 4));
    assert_eq!(amber_red_tie.implications, vec![Implication::AmberMajority]);

    let red = engine.analyze(&input(Pillar::Governance, 9, 3, 1, 2, 6));
    assert_eq!(red.implications, vec![Implication::RedMajority]);
}

#[test]
fn policies_disagree_on_tied_counts() {
    let tied = input(Pillar::Economy, 10, 4, 4, 4, 2);

    let thresholds = engine(NarrativePolicy::Thresholds).analyze(&tied);
    let dominant = engine(NarrativePolicy::Dominant).analyze(&tied);

    assert_eq!(
        thresholds.implications,
        vec![Implication::ModerateDelay, Implication::UrgentIntervention]
    );
    assert_eq!(dominant.implications, vec![Implication::GreenMajority]);
}

#[test]
fn per_call_policy_override_does_not_change_config() {
    let engine = engine(NarrativePolicy::Thresholds);
    let result = engine.analyze_with_policy(&governance_scenario(), NarrativePolicy::Dominant);

    assert_eq!(result.policy, NarrativePolicy::Dominant);
    assert_eq!(engine.config().policy, NarrativePolicy::Thresholds);
}

#[test]
fn analysis_is_deterministic() {
    let engine = engine(NarrativePolicy::Thresholds);
    let scenario = input(Pillar::Economy, 10, 2, 2, 4, 4);

    assert_eq!(engine.analyze(&scenario), engine.analyze(&scenario));
}

#[test]
fn recommendations_are_fixed_per_pillar() {
    let engine = engine(NarrativePolicy::Thresholds);

    for pillar in Pillar::ordered() {
        let expected = recommendations_for(pillar);
        for (total, green) in [(0, 0), (1, 1), (50, 3), (1000, 999)] {
            let result = engine.analyze(&input(pillar, total, 0, green, 0, 0));
            assert_eq!(result.recommendations, expected);
            assert_eq!(result.recommendations.len(), 3);
        }
    }

    assert_ne!(
        recommendations_for(Pillar::Governance),
        recommendations_for(Pillar::Economy)
    );
}

#[test]
fn outlook_appears_when_projects_are_tracked() {
    let result = engine(NarrativePolicy::Thresholds).analyze(&governance_scenario());

    assert_eq!(result.outlook.len(), 2);
    assert!(result.outlook[1].contains("successful 2025"));
}
