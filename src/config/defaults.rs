// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Hero**: Auto-advance cadence of the hero banner
//! - **Rows**: Arrow paging distance and scroll animation
//! - **Images**: Remote poster/backdrop fetching

// ==========================================================================
// Hero Defaults
// ==========================================================================

/// Default delay between two automatic hero banner advances (in milliseconds).
pub const DEFAULT_HERO_INTERVAL_MS: u64 = 8_000;

/// Minimum hero auto-advance delay (in milliseconds).
pub const MIN_HERO_INTERVAL_MS: u64 = 2_000;

/// Maximum hero auto-advance delay (in milliseconds).
pub const MAX_HERO_INTERVAL_MS: u64 = 60_000;

/// Number of selector dots rendered under the hero banner.
pub const HERO_MAX_DOTS: usize = 5;

// ==========================================================================
// Row Defaults
// ==========================================================================

/// Fraction of the visible row width scrolled by one arrow click.
pub const DEFAULT_SCROLL_PAGE_FRACTION: f32 = 0.8;

/// Minimum arrow paging fraction.
pub const MIN_SCROLL_PAGE_FRACTION: f32 = 0.1;

/// Maximum arrow paging fraction.
pub const MAX_SCROLL_PAGE_FRACTION: f32 = 1.0;

/// Default duration of the smooth row scroll (in milliseconds).
pub const DEFAULT_SCROLL_ANIMATION_MS: u64 = 300;

/// Maximum duration of the smooth row scroll (in milliseconds).
/// A duration of zero jumps straight to the target.
pub const MAX_SCROLL_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Default HTTP timeout for a single image request (in seconds).
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;

/// Minimum image request timeout (in seconds).
pub const MIN_IMAGE_TIMEOUT_SECS: u64 = 1;

/// Maximum image request timeout (in seconds).
pub const MAX_IMAGE_TIMEOUT_SECS: u64 = 120;

/// Default number of image requests allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENT_IMAGES: usize = 6;

/// Minimum number of concurrent image requests.
pub const MIN_MAX_CONCURRENT_IMAGES: usize = 1;

/// Maximum number of concurrent image requests.
pub const MAX_MAX_CONCURRENT_IMAGES: usize = 32;
