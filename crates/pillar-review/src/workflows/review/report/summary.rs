use super::super::analysis::ReviewResult;
use super::super::domain::ReviewInput;

/// Flat-text rendering shared by the summary image, the slide body, the
/// HTML page and the CLI.
#[derive(Debug, Clone, Copy)]
pub struct ReviewSummary<'a> {
    input: &'a ReviewInput,
    result: &'a ReviewResult,
}

impl<'a> ReviewSummary<'a> {
    pub fn new(input: &'a ReviewInput, result: &'a ReviewResult) -> Self {
        Self { input, result }
    }

    pub fn title(&self) -> String {
        format!("{} Performance Summary", self.input.pillar.label())
    }

    pub fn counter_lines(&self) -> Vec<String> {
        let input = self.input;
        vec![
            format!("Total Projects: {}", input.total),
            format!("Not Started: {}", input.not_started),
            format!("In Progress: {}", input.in_progress),
            format!("Completed: {}", input.completed),
            format!("Not Completed: {}", self.result.not_completed),
            format!("Green Projects (80-100%): {}", input.green),
            format!("Amber Projects (60-79%): {}", input.amber),
            format!("Red Projects (0-59%): {}", input.red),
        ]
    }

    pub fn ratio_lines(&self) -> Vec<String> {
        match self.result.ratios {
            Some(ratios) => vec![
                format!("Green Ratio: {}", format_percent(ratios.green)),
                format!("Amber Ratio: {}", format_percent(ratios.amber)),
                format!("Red Ratio: {}", format_percent(ratios.red)),
            ],
            None => vec!["Ratios: not available (no projects tracked)".to_string()],
        }
    }

    /// Body lines without the title. Empty strings separate sections.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.counter_lines();
        lines.extend(self.ratio_lines());

        push_section(
            &mut lines,
            "Implications:",
            self.result.implication_statements(),
        );
        push_section(
            &mut lines,
            "Recommendations:",
            self.result.recommendations.to_vec(),
        );
        push_section(&mut lines, "2025 Outlook:", self.result.outlook.clone());

        lines
    }

    pub fn render_text(&self) -> String {
        let mut text = self.title();
        for line in self.lines() {
            text.push('\n');
            text.push_str(&line);
        }
        text
    }
}

fn push_section(lines: &mut Vec<String>, heading: &str, entries: Vec<&str>) {
    if entries.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(entries.into_iter().map(|entry| format!("- {entry}")));
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
