//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Reports keep input order
//! - Byte-for-byte identical output across runs

use crate::complexity::{assign_level, complexity_score_with, ComplexityLevel, ComplexityResult};
use crate::config::ResolvedConfig;
use crate::extract::extract_related_files_with_limit;
use serde::{Deserialize, Serialize};

/// Heuristic summary of a single task description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInsight {
    pub description: String,
    pub complexity: ComplexityResult,
    pub score: i32,
    pub related_files: Vec<String>,
}

/// Number of tasks at each complexity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexitySummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl ComplexitySummary {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Analyze one description with the given configuration
pub fn analyze_task(description: &str, config: &ResolvedConfig) -> TaskInsight {
    let score = complexity_score_with(description, &config.thresholds);
    let level = assign_level(score, &config.thresholds);

    TaskInsight {
        description: description.to_string(),
        complexity: ComplexityResult::new(level),
        score,
        related_files: extract_related_files_with_limit(description, config.max_related_files),
    }
}

/// Analyze many descriptions, preserving input order
pub fn analyze_tasks<S: AsRef<str>>(
    descriptions: &[S],
    config: &ResolvedConfig,
) -> Vec<TaskInsight> {
    descriptions
        .iter()
        .map(|d| analyze_task(d.as_ref(), config))
        .collect()
}

/// Count tasks per complexity level
pub fn summarize(insights: &[TaskInsight]) -> ComplexitySummary {
    let mut summary = ComplexitySummary::default();
    for insight in insights {
        match insight.complexity.level() {
            ComplexityLevel::Low => summary.low += 1,
            ComplexityLevel::Medium => summary.medium += 1,
            ComplexityLevel::High => summary.high += 1,
        }
    }
    summary
}

/// Render insights as text output
pub fn render_text(insights: &[TaskInsight]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<8} {:<6} {:<40} {}\n",
        "LEVEL", "SCORE", "TASK", "FILES"
    ));

    for insight in insights {
        let files = if insight.related_files.is_empty() {
            "-".to_string()
        } else {
            insight.related_files.join(", ")
        };
        output.push_str(&format!(
            "{:<8} {:<6} {:<40} {}\n",
            insight.complexity.label(),
            insight.score,
            truncate_or_pad(&single_line(&insight.description), 40),
            files,
        ));
    }

    let summary = summarize(insights);
    output.push_str(&format!(
        "\n{} task(s): {} high, {} medium, {} low\n",
        summary.total(),
        summary.high,
        summary.medium,
        summary.low
    ));

    output
}

/// Render insights as JSON output
pub fn render_json(insights: &[TaskInsight]) -> String {
    serde_json::to_string_pretty(insights).unwrap_or_else(|_| "[]".to_string())
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate or pad string to fixed width (in chars)
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
