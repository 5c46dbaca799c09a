//! CI Invariant Tests
//!
//! These tests explicitly validate critical invariants that must always hold.
//! Run in CI to prevent regressions.

use taskhint_core::{estimate_task_complexity, extract_related_files, ComplexityLevel};

fn sample_descriptions() -> Vec<String> {
    let mut samples: Vec<String> = [
        "",
        " ",
        "\t\n\r",
        "Fix typo in README",
        "Refactor `src/api/client.ts` and migrate infra/terraform to the new system",
        "Add to routes.ts, then edit `app/main.py` and check **/*.json",
        "((((((((((",
        "``````````",
        "./../.././",
        "*/*/*/*/*",
        "a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p",
        "\u{0}\u{1}\u{7f} binary-ish \u{fffd} data.bin",
        "日本語のタスク: src/main.rs を更新する",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // Pathological lengths
    samples.push("a".repeat(100_000));
    samples.push("a/".repeat(50_000));
    samples.push(".ts".repeat(30_000));
    samples.push("`".repeat(10_000) + &"x.ts".repeat(10_000));
    samples.push(
        (0..5_000)
            .map(|i| format!("file{}.rs", i))
            .collect::<Vec<_>>()
            .join(" "),
    );
    samples
}

#[test]
fn test_label_and_class_are_always_paired() {
    let allowed = [
        ("Low", "complexity-low"),
        ("Medium", "complexity-medium"),
        ("High", "complexity-high"),
    ];
    for description in sample_descriptions() {
        let result = estimate_task_complexity(&description);
        assert!(
            allowed.contains(&(result.label(), result.class())),
            "mismatched pair ({}, {})",
            result.label(),
            result.class()
        );
        let expected = match result.level() {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        };
        assert_eq!(result.label(), expected);
    }
}

#[test]
fn test_extracted_files_are_unique_bounded_and_trimmed() {
    for description in sample_descriptions() {
        let files = extract_related_files(&description);
        assert!(files.len() <= 10, "more than 10 files for input");

        let mut seen = std::collections::HashSet::new();
        for f in &files {
            assert!(!f.is_empty(), "empty entry");
            assert_eq!(f.trim(), f, "untrimmed entry: {:?}", f);
            assert!(seen.insert(f.clone()), "duplicate entry: {}", f);
        }
    }
}

#[test]
fn test_idempotence() {
    for description in sample_descriptions() {
        assert_eq!(
            estimate_task_complexity(&description),
            estimate_task_complexity(&description)
        );
        assert_eq!(
            extract_related_files(&description),
            extract_related_files(&description)
        );
    }
}

#[test]
fn test_order_is_discovery_order() {
    let files = extract_related_files("b.ts a.ts c.ts a.ts b.ts");
    assert_eq!(files, vec!["b.ts", "a.ts", "c.ts"]);
}
