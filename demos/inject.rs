// Demos are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Parameter injection walkthrough.
//!
//! Demonstrates the resolver registry the way `#[randomized]` uses it:
//! build a registry, open an invocation, resolve each parameter by its
//! declared type.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example inject
//!
//! # With resolution tracing
//! RUST_LOG=trace cargo run --example inject
//! ```

use azar::{Invocation, ResolverRegistry};

fn main() -> anyhow::Result<()> {
    azar::observe::telemetry::init()?;

    // The standard registry: thread-local entropy, floats within ±1.0.
    let registry = ResolverRegistry::standard();
    let invocation = Invocation::new("inject_demo");

    let i: i64 = registry.resolve_param(&invocation, "i")?;
    let j: i64 = registry.resolve_param(&invocation, "j")?;
    let d: f64 = registry.resolve_param(&invocation, "d")?;
    let byte: u8 = registry.resolve_param(&invocation, "byte")?;

    println!("invocation {}", invocation.id());
    println!("  i    = {i}");
    println!("  j    = {j}");
    println!("  d    = {d}");
    println!("  byte = {byte}");

    // Seeded registries replay the same sequence; useful when a failing
    // test needs its values back.
    let seeded = ResolverRegistry::builder().seed(4242).build();
    let replay = ResolverRegistry::builder().seed(4242).build();
    let seeded_invocation = Invocation::new("inject_demo_seeded");
    let replay_invocation = Invocation::new("inject_demo_replay");

    let first: i64 = seeded.resolve_param(&seeded_invocation, "n")?;
    let again: i64 = replay.resolve_param(&replay_invocation, "n")?;
    println!("seeded draw {first} replayed as {again}");
    assert_eq!(first, again);

    let snapshot = registry.stats().snapshot();
    println!("stats: {}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
