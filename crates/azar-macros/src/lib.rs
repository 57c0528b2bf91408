// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Attribute macros for the azar test framework.
//!
//! The single entry point is [`macro@randomized`], which turns a test
//! function with `#[random]`-marked parameters into a zero-parameter test
//! the host runner can execute directly.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use syn::parse_macro_input;
use syn::punctuated::Punctuated;

mod expand;

/// Marks a test function whose parameters are supplied by the resolver
/// registry.
///
/// Each parameter must carry the `#[random]` marker and declare an integer
/// primitive up to 64 bits, `f32`, or `f64`. The macro expands to a
/// zero-parameter `#[test]` (or `#[tokio::test]` for `async fn`) that
/// resolves every marked parameter before running the original body. A
/// resolution failure panics, which the host runner reports as a test
/// failure.
///
/// # Arguments
///
/// - `seed = <int>` — seed the registry for reproducible values.
/// - `float_bound = <float>` — half-width of the interval floats are
///   drawn from (default 1.0).
/// - `crate = "<path>"` — path to the crate re-exporting the azar types
///   (default `::azar`).
///
/// # Example
///
/// ```rust,ignore
/// use azar::randomized;
///
/// #[randomized]
/// fn injects_integer(#[random] i: i64, #[random] j: i64) {
///     assert_ne!(i, j);
/// }
///
/// #[randomized]
/// fn injects_float(#[random] d: f64) {
///     assert!(d.abs() <= 1.0);
/// }
/// ```
#[proc_macro_attribute]
pub fn randomized(args: TokenStream, item: TokenStream) -> TokenStream {
    let metas = parse_macro_input!(
        args with Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated
    );
    let func = parse_macro_input!(item as syn::ItemFn);

    match expand::expand_randomized(&metas, func) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
