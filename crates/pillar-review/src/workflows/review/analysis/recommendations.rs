use super::super::domain::Pillar;

const GOVERNANCE: [&str; 3] = [
    "Institutionalize quarterly performance reviews with published scorecards for every directorate.",
    "Digitize approval workflows to shorten procurement and permitting turnaround.",
    "Strengthen inter-agency data sharing so delivery risks surface before deadlines slip.",
];

const HUMAN_CENTRIC: [&str; 3] = [
    "Expand community consultation before scoping new social programmes.",
    "Prioritize funding for health, education and housing projects in amber or red status.",
    "Track citizen satisfaction alongside delivery milestones for each programme.",
];

const INFRASTRUCTURE: [&str; 3] = [
    "Front-load design and land acquisition work to de-risk capital projects.",
    "Introduce milestone-based contractor payments tied to verified site progress.",
    "Bundle maintenance with new builds to protect the value of existing assets.",
];

const ECONOMY: [&str; 3] = [
    "Fast-track investment facilitation for projects that unlock private capital.",
    "Align skills programmes with the sectors targeted for job creation in 2025.",
    "Simplify business licensing to sustain momentum on SME support initiatives.",
];

const OUTLOOK: [&str; 2] = [
    "The projects that are delayed need immediate attention to get back on schedule. Prioritizing green status projects for timely completion is key to achieving the pillar's goals.",
    "Consider allocating more resources to the red and amber projects for faster progress and ensure all projects meet their deadlines for a successful 2025.",
];

/// Fixed recommendations for a pillar, independent of any counter.
pub fn recommendations_for(pillar: Pillar) -> [&'static str; 3] {
    match pillar {
        Pillar::Governance => GOVERNANCE,
        Pillar::HumanCentric => HUMAN_CENTRIC,
        Pillar::Infrastructure => INFRASTRUCTURE,
        Pillar::Economy => ECONOMY,
    }
}

/// General 2025 suggestions shown whenever any project is tracked.
pub fn outlook_statements() -> [&'static str; 2] {
    OUTLOOK
}
