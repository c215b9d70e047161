use metrics_exporter_prometheus::PrometheusHandle;
use pillar_review::workflows::review::NarrativePolicy;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_policy(raw: &str) -> Result<NarrativePolicy, String> {
    NarrativePolicy::parse(raw)
        .ok_or_else(|| format!("unknown narrative policy '{raw}' (expected thresholds or dominant)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_accepts_known_names() {
        assert_eq!(parse_policy("Dominant"), Ok(NarrativePolicy::Dominant));
        assert_eq!(parse_policy("thresholds"), Ok(NarrativePolicy::Thresholds));
        assert!(parse_policy("loudest")
            .expect_err("unknown policy")
            .contains("loudest"));
    }
}
