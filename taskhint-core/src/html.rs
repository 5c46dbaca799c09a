//! HTML fragments for the task panel
//!
//! Produces the status badge and related-file chips the panel embeds
//! verbatim, plus a self-contained page wrapping them for offline review.
//! Every interpolated string goes through `html_escape`.

use crate::complexity::ComplexityResult;
use crate::report::{summarize, TaskInsight};

/// Render the complexity status badge
pub fn render_complexity_badge(result: &ComplexityResult) -> String {
    format!(
        r#"<span class="status-badge {class}" title="Estimated complexity: {label}">{label}</span>"#,
        class = result.class(),
        label = result.label(),
    )
}

/// Render related files as chips, or a placeholder when there are none
pub fn render_related_files(files: &[String]) -> String {
    if files.is_empty() {
        return r#"<div class="related-files empty"><span class="no-files">No related files detected</span></div>"#
            .to_string();
    }

    let chips: String = files
        .iter()
        .map(|f| {
            let escaped = html_escape(f);
            format!(
                r#"<span class="file-chip" title="{escaped}">{escaped}</span>"#,
                escaped = escaped
            )
        })
        .collect();

    format!(r#"<div class="related-files">{}</div>"#, chips)
}

/// Render one task card: description, badge, and file chips
pub fn render_task_insight(insight: &TaskInsight) -> String {
    format!(
        r#"<div class="task-card">
    <div class="task-header">
        <span class="task-description">{description}</span>
        {badge}
    </div>
    {files}
</div>"#,
        description = html_escape(&insight.description),
        badge = render_complexity_badge(&insight.complexity),
        files = render_related_files(&insight.related_files),
    )
}

/// Render a standalone HTML page for a batch of insights
pub fn render_html_report(insights: &[TaskInsight]) -> String {
    let summary = summarize(insights);
    let cards: Vec<String> = insights.iter().map(render_task_insight).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Task Hints</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Task Hints</h1>
            <div class="meta">{total} task(s): {high} high, {medium} medium, {low} low</div>
        </header>
        {cards}
    </div>
</body>
</html>"#,
        css = inline_css(),
        total = summary.total(),
        high = summary.high,
        medium = summary.medium,
        low = summary.low,
        cards = cards.join("\n"),
    )
}

fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

header {
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 2px solid #e5e7eb;
}

.meta {
    color: #6b7280;
    font-size: 0.875rem;
}

.task-card {
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    padding: 0.75rem 1rem;
    margin-bottom: 0.75rem;
}

.task-header {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
}

.status-badge {
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
    white-space: nowrap;
}

.complexity-low { background: #d1fae5; color: #065f46; }
.complexity-medium { background: #fef3c7; color: #92400e; }
.complexity-high { background: #fee2e2; color: #991b1b; }

.related-files {
    display: flex;
    flex-wrap: wrap;
    gap: 0.375rem;
    margin-top: 0.5rem;
}

.file-chip {
    font-family: ui-monospace, 'SF Mono', Menlo, monospace;
    font-size: 0.75rem;
    background: #f3f4f6;
    border-radius: 4px;
    padding: 0.125rem 0.375rem;
}

.no-files {
    color: #9ca3af;
    font-size: 0.75rem;
    font-style: italic;
}
"#
}

/// Escape text for HTML element content and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
