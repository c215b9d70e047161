use pillar_review::workflows::review::{
    format_percent, ExportArtifacts, NarrativePolicy, Pillar, ReviewOutcome,
};
use quick_xml::escape::escape;

const STYLE: &str = "body{font-family:sans-serif;background:#1e1e1e;color:#f0f0f0;margin:2rem}\
label{display:block;margin:.4rem 0}input,select{margin-left:.5rem}\
table{border-collapse:collapse}td{padding:.2rem .8rem}a{color:#8ab4f8}";

const COUNTER_FIELDS: [(&str, &str); 7] = [
    ("total", "Total Projects"),
    ("not_started", "Not Started"),
    ("in_progress", "In Progress"),
    ("completed", "Completed"),
    ("green", "Green Projects (80-100%)"),
    ("amber", "Amber Projects (60-79%)"),
    ("red", "Red Projects (0-59%)"),
];

pub(crate) fn form_page(default_policy: NarrativePolicy) -> String {
    let mut body = String::from("<h1>Pillar Performance Review</h1>\n");
    body.push_str("<form method=\"post\" action=\"/review/analysis\">\n");

    body.push_str("<label>Pillar<select name=\"pillar\">");
    for pillar in Pillar::ordered() {
        body.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            pillar.key(),
            pillar.label(),
        ));
    }
    body.push_str("</select></label>\n");

    for (name, label) in COUNTER_FIELDS {
        body.push_str(&format!(
            "<label>{label}<input type=\"number\" name=\"{name}\" min=\"0\" value=\"0\"></label>\n"
        ));
    }

    body.push_str("<label>Narrative<select name=\"policy\">");
    for policy in [NarrativePolicy::Thresholds, NarrativePolicy::Dominant] {
        let selected = if policy == default_policy { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{0}\"{selected}>{0}</option>",
            policy.label(),
        ));
    }
    body.push_str("</select></label>\n");

    body.push_str(
        "<button type=\"submit\">Generate Analysis</button>\n\
         <button type=\"submit\" formaction=\"/review/export\">Save as PPT and Image</button>\n\
         </form>\n",
    );

    layout("Pillar Performance Review", &body)
}

pub(crate) fn analysis_page(outcome: &ReviewOutcome) -> String {
    let summary = outcome.summary();
    let view = outcome.view();
    let title = summary.title();

    let mut body = format!("<h1>{}</h1>\n<table>\n", escape(title.as_str()));
    for counter in &view.counters {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            counter.label, counter.value,
        ));
    }
    body.push_str("</table>\n");

    match view.ratios {
        Some(ratios) => {
            body.push_str("<h2>Status Ratios</h2>\n<ul>");
            for (label, ratio) in [
                ("Green", ratios.green),
                ("Amber", ratios.amber),
                ("Red", ratios.red),
            ] {
                body.push_str(&format!("<li>{label}: {}</li>", format_percent(ratio)));
            }
            body.push_str("</ul>\n");
        }
        None => body.push_str("<p>No projects tracked; ratios are not available.</p>\n"),
    }

    push_list(&mut body, "Implications", &view.implications);
    push_list(&mut body, "Recommendations", &view.recommendations);
    push_list(&mut body, "2025 Outlook", &view.outlook);

    let input = &outcome.input;
    body.push_str(&format!(
        "<img alt=\"Project status chart\" src=\"/review/chart?pillar={}&amp;total={}&amp;not_started={}&amp;in_progress={}&amp;completed={}&amp;green={}&amp;amber={}&amp;red={}\">\n",
        input.pillar.key(),
        input.total,
        input.not_started,
        input.in_progress,
        input.completed,
        input.green,
        input.amber,
        input.red,
    ));
    body.push_str("<p><a href=\"/\">New review</a></p>\n");

    layout(&title, &body)
}

pub(crate) fn export_page(outcome: &ReviewOutcome, artifacts: &ExportArtifacts) -> String {
    let title = outcome.summary().title();
    let mut body = format!(
        "<h1>{}</h1>\n<p>Saved the summary slide and images.</p>\n<ul>",
        escape(title.as_str())
    );
    for name in artifacts.file_names() {
        let name = escape(name.as_str());
        body.push_str(&format!("<li><a href=\"/downloads/{name}\">{name}</a></li>"));
    }
    body.push_str("</ul>\n<p><a href=\"/\">New review</a></p>\n");

    layout(&title, &body)
}

pub(crate) fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Unable to run review</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n",
        escape(message)
    );
    layout("Review error", &body)
}

fn push_list(body: &mut String, heading: &str, entries: &[&str]) {
    if entries.is_empty() {
        return;
    }
    body.push_str(&format!("<h2>{heading}</h2>\n<ul>"));
    for entry in entries {
        body.push_str(&format!("<li>{}</li>", escape(*entry)));
    }
    body.push_str("</ul>\n");
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_page_lists_pillars_and_counters() {
        let html = form_page(NarrativePolicy::Dominant);
        for pillar in Pillar::ordered() {
            assert!(html.contains(pillar.label()));
        }
        assert_eq!(html.matches("type=\"number\"").count(), 7);
        assert!(html.contains("min=\"0\""));
        assert!(html.contains("Generate Analysis"));
        assert!(html.contains("Save as PPT and Image"));
        assert!(html.contains("<option value=\"dominant\" selected>"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page("unknown pillar '<script>'");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
