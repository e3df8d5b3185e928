//! Test support for the weather-layers workspace.
//!
//! - [`generators`]: synthetic wind, current, wave, SST and pressure grids
//! - [`fixtures`]: payload JSON builders and storm list documents
//! - [`paths`]: finding the full-size feed payloads, scratch directories
//!
//! Pull it in as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolve a feed payload by file name or return early from the test.
///
/// Full-size payloads are not checked in, so tests that need one print why
/// they were skipped instead of failing.
///
/// ```ignore
/// let path = test_utils::require_test_file!("v2-wind-1200.json");
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        let name: &str = $name;
        let Some(path) = $crate::find_test_file(name) else {
            eprintln!("skipping: payload {} not found (searched {:?})", name, $crate::payload_search_dirs());
            return;
        };
        path
    }};
}

/// Assert two numbers differ by at most `epsilon`, compared as `f64`.
///
/// NaN on either side always fails.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        let diff = (left - right).abs();
        assert!(
            diff <= epsilon,
            "assertion failed: {} and {} differ by {} (epsilon {})",
            left,
            right,
            diff,
            epsilon
        );
    }};
}

/// Approximate equality of interleaved `(u, v)` vector components.
///
/// ```ignore
/// assert_vector_approx_eq!(particles, cell, (0.0, -2.0), 1e-5);
/// ```
#[macro_export]
macro_rules! assert_vector_approx_eq {
    ($interleaved:expr, $cell:expr, ($u:expr, $v:expr), $epsilon:expr) => {{
        let cell: usize = $cell;
        $crate::assert_approx_eq!($interleaved[cell * 2], $u, $epsilon);
        $crate::assert_approx_eq!($interleaved[cell * 2 + 1], $v, $epsilon);
    }};
}
