// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Float assertions go through `approx`; `assert_eq!` is not used on
//! scroll offsets or animation samples.

pub use approx::assert_abs_diff_eq;

use crate::catalog::{Catalog, MockGenerator};

/// Seed used by tests that need a reproducible catalog.
pub const TEST_SEED: u64 = 7;

/// Builds the default catalog layout from [`TEST_SEED`].
pub fn seeded_catalog() -> Catalog {
    Catalog::generate(&mut MockGenerator::seeded(TEST_SEED))
}
