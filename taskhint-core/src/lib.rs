//! taskhint core library - complexity estimation and related-file detection
//! for free-text task descriptions

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Heuristics are pure functions of their string argument
// - No global mutable state (compiled regexes are write-once)
// - No randomness, clocks, threads, or async
// - Every input, including empty or pathological text, yields a result
// - Identical input yields byte-for-byte identical output

pub mod complexity;
pub mod config;
pub mod extensions;
pub mod extract;
pub mod html;
pub mod keywords;
pub mod report;

pub use complexity::{
    estimate_task_complexity, estimate_task_complexity_with, ComplexityLevel, ComplexityResult,
    ComplexityThresholds,
};
pub use config::ResolvedConfig;
pub use extract::{extract_related_files, extract_related_files_with_limit};
pub use report::{analyze_task, analyze_tasks, render_json, render_text, TaskInsight};
