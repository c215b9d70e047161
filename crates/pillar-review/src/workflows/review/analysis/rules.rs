use super::config::AnalysisConfig;
use super::{Implication, StatusRatios};

/// Applies each rule independently; the output order is the rule order.
pub(crate) fn threshold_implications(
    ratios: &StatusRatios,
    config: &AnalysisConfig,
) -> Vec<Implication> {
    let mut implications = Vec::new();

    if ratios.green >= config.strong_green_ratio {
        implications.push(Implication::PositiveProgress);
    }
    if ratios.green < config.weak_green_ratio {
        implications.push(Implication::WeakDelivery);
    }
    if ratios.amber > config.amber_delay_ratio {
        implications.push(Implication::ModerateDelay);
    }
    if ratios.red >= config.red_urgent_ratio {
        implications.push(Implication::UrgentIntervention);
    }

    implications
}
