use super::common::*;
use crate::workflows::review::{AnalysisEngine, Pillar, ReviewSummary, ReviewView};

#[test]
fn summary_lists_counters_ratios_and_sections() {
    let input = governance_scenario();
    let result = AnalysisEngine::default().analyze(&input);
    let summary = ReviewSummary::new(&input, &result);

    assert_eq!(summary.title(), "Effective Governance Performance Summary");
    let text = summary.render_text();
    for expected in [
        "Total Projects: 10",
        "Completed: 6",
        "Not Completed: 4",
        "Green Projects (80-100%): 6",
        "Green Ratio: 60.0%",
        "Amber Ratio: 30.0%",
        "Red Ratio: 10.0%",
        "Implications:",
        "Recommendations:",
        "2025 Outlook:",
    ] {
        assert!(text.contains(expected), "missing '{expected}' in:\n{text}");
    }
}

#[test]
fn zero_total_summary_skips_ratio_sections() {
    let input = input(Pillar::Economy, 0, 0, 0, 0, 0);
    let result = AnalysisEngine::default().analyze(&input);
    let lines = ReviewSummary::new(&input, &result).lines();

    assert!(lines.iter().any(|line| line.starts_with("Ratios: not available")));
    assert!(!lines.iter().any(|line| line == "Implications:"));
    assert!(!lines.iter().any(|line| line == "2025 Outlook:"));
    assert!(lines.iter().any(|line| line == "Recommendations:"));
}

#[test]
fn view_carries_counters_and_text() {
    let input = governance_scenario();
    let result = AnalysisEngine::default().analyze(&input);
    let view = ReviewView::new(&input, &result);

    assert_eq!(view.pillar_label, "Effective Governance");
    assert_eq!(view.counters.len(), 8);
    let not_completed = view
        .counters
        .iter()
        .find(|entry| entry.key == "not_completed")
        .expect("not completed counter");
    assert_eq!(not_completed.value, 4);
    assert_eq!(view.implications.len(), 1);

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["pillar"], "governance");
    assert_eq!(json["policy"], "thresholds");
    assert!(json["text"]
        .as_str()
        .expect("text field")
        .contains("Total Projects: 10"));
}
