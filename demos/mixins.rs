// Demos are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Test-interface mixin walkthrough.
//!
//! Demonstrates the lifecycle logger, the execution timer, and a dynamic
//! case set over a batch of inputs.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --example mixins
//! ```

use std::time::Duration;

use azar::{CaseSet, ExecutionTimer, LifecycleLogger};

struct DemoSuite;

impl LifecycleLogger for DemoSuite {
    fn suite(&self) -> &str {
        "mixin-demo"
    }
}

fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    let reversed: Vec<char> = normalized.iter().rev().copied().collect();
    normalized == reversed
}

fn main() -> anyhow::Result<()> {
    azar::observe::telemetry::init()?;

    let suite = DemoSuite;
    suite.on_suite_start();

    suite.on_test_start("is_equal_value");
    let timer = ExecutionTimer::with_threshold("is_equal_value", Duration::from_millis(50));
    assert_eq!(1, "a".len(), "is always equal");
    drop(timer);
    suite.on_test_success("is_equal_value");

    let report = CaseSet::new("palindromes")
        .cases_from(
            [
                "racecar",
                "able was I ere I saw elba",
                "A man, a plan, a canal: Panama",
                "plainly not one",
            ],
            |text| is_palindrome(text),
        )
        .run();
    println!(
        "case set `{}`: {} of {} passed",
        report.set(),
        report.total() - report.failed().len(),
        report.total()
    );
    for name in report.failed() {
        println!("  failed: {name}");
    }

    suite.on_suite_end();
    Ok(())
}
