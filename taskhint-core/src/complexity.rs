//! Task complexity estimation
//!
//! Global invariants enforced:
//! - Total over all inputs: every description maps to exactly one level
//! - Label and CSS class are derived from the level, never stored separately
//! - Deterministic: no state survives between calls

use crate::keywords::{
    contains_any, HIGH_COMPLEXITY_KEYWORDS, LOW_COMPLEXITY_KEYWORDS, MEDIUM_COMPLEXITY_KEYWORDS,
};
use serde::{Deserialize, Serialize};

const HIGH_KEYWORD_WEIGHT: i32 = 3;
const MEDIUM_KEYWORD_WEIGHT: i32 = 1;
const LOW_KEYWORD_WEIGHT: i32 = -1;

/// Complexity level of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Low,    // score < 2
    Medium, // 2-4
    High,   // >= 4
}

impl ComplexityLevel {
    /// Human-readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        }
    }

    /// CSS class used by the panel's status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "complexity-low",
            ComplexityLevel::Medium => "complexity-medium",
            ComplexityLevel::High => "complexity-high",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        }
    }
}

/// Label/class pair consumed by the badge template
///
/// Built only from a [`ComplexityLevel`], so a mismatched pair such as
/// ("High", "complexity-low") cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexityResult {
    level: ComplexityLevel,
}

impl ComplexityResult {
    pub fn new(level: ComplexityLevel) -> Self {
        ComplexityResult { level }
    }

    pub fn level(&self) -> ComplexityLevel {
        self.level
    }

    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn class(&self) -> &'static str {
        self.level.css_class()
    }
}

impl From<ComplexityLevel> for ComplexityResult {
    fn from(level: ComplexityLevel) -> Self {
        ComplexityResult::new(level)
    }
}

#[derive(Serialize, Deserialize)]
struct ComplexityResultRepr {
    label: String,
    class: String,
}

impl Serialize for ComplexityResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComplexityResultRepr {
            label: self.label().to_string(),
            class: self.class().to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ComplexityResult {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ComplexityResultRepr::deserialize(deserializer)?;
        let level = [
            ComplexityLevel::Low,
            ComplexityLevel::Medium,
            ComplexityLevel::High,
        ]
        .into_iter()
        .find(|l| l.label() == repr.label && l.css_class() == repr.class)
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "mismatched complexity pair: ({}, {})",
                repr.label, repr.class
            ))
        })?;
        Ok(ComplexityResult::new(level))
    }
}

/// Configurable cut-offs for complexity scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityThresholds {
    /// Descriptions longer than this score +1
    pub medium_length: usize,
    /// Descriptions longer than this score +2 (replaces the +1)
    pub long_length: usize,
    /// Minimum score for Medium
    pub medium_score: i32,
    /// Minimum score for High
    pub high_score: i32,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        ComplexityThresholds {
            medium_length: 50,
            long_length: 100,
            medium_score: 2,
            high_score: 4,
        }
    }
}

/// Length of a description as the panel measures it (UTF-16 code units)
fn description_length(description: &str) -> usize {
    description.encode_utf16().count()
}

/// Compute the raw complexity score with default thresholds
pub fn complexity_score(description: &str) -> i32 {
    complexity_score_with(description, &ComplexityThresholds::default())
}

/// Compute the raw complexity score
///
/// Score = length tier (0, +1, +2) + 3 if any high keyword
/// + 1 if any medium keyword - 1 if any low keyword.
/// The keyword tiers are independent; all that match contribute.
pub fn complexity_score_with(description: &str, thresholds: &ComplexityThresholds) -> i32 {
    let lower = description.to_lowercase();
    let length = description_length(description);
    let mut score = 0;

    if length > thresholds.long_length {
        score += 2;
    } else if length > thresholds.medium_length {
        score += 1;
    }

    if contains_any(&lower, HIGH_COMPLEXITY_KEYWORDS) {
        score += HIGH_KEYWORD_WEIGHT;
    }
    if contains_any(&lower, MEDIUM_COMPLEXITY_KEYWORDS) {
        score += MEDIUM_KEYWORD_WEIGHT;
    }
    if contains_any(&lower, LOW_COMPLEXITY_KEYWORDS) {
        score += LOW_KEYWORD_WEIGHT;
    }

    score
}

/// Map a score to a level
pub fn assign_level(score: i32, thresholds: &ComplexityThresholds) -> ComplexityLevel {
    if score >= thresholds.high_score {
        ComplexityLevel::High
    } else if score >= thresholds.medium_score {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    }
}

/// Estimate task complexity with default thresholds
pub fn estimate_task_complexity(description: &str) -> ComplexityResult {
    estimate_task_complexity_with(description, &ComplexityThresholds::default())
}

/// Estimate task complexity with custom thresholds
pub fn estimate_task_complexity_with(
    description: &str,
    thresholds: &ComplexityThresholds,
) -> ComplexityResult {
    let score = complexity_score_with(description, thresholds);
    ComplexityResult::new(assign_level(score, thresholds))
}
