// SPDX-License-Identifier: MPL-2.0
//! Random generation of catalog items.
//!
//! Structural fields (id, title, description, image URLs) depend only on the
//! item's position. Rating, maturity, year, duration and genres are drawn
//! from independent uniform distributions of the supplied RNG.

use super::pools::{self, DESCRIPTIONS, TITLES};
use super::types::{
    CatalogItem, Category, Genre, ItemId, MaturityRating, RatingPercent, Runtime,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive rating range of generated items.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 70..=99;

/// Inclusive release year range of generated items.
pub const YEAR_RANGE: std::ops::RangeInclusive<u16> = 2020..=2024;

/// Maximum number of genres attached to one item.
pub const MAX_GENRES: usize = 3;

/// Row layout of the default catalog: `(id, title, offset)`.
pub const CATEGORY_LAYOUT: [(&str, &str, u32); 8] = [
    ("trending", "Trending Now", 10),
    ("top10", "Top 10 in Your Country", 20),
    ("action", "Action & Adventure", 30),
    ("comedy", "Comedies", 40),
    ("drama", "Dramas", 50),
    ("scifi", "Sci-Fi & Fantasy", 60),
    ("horror", "Horror", 70),
    ("documentary", "Documentaries", 80),
];

/// Items per category row.
pub const CATEGORY_SIZE: usize = 10;

/// Items cycled by the hero banner.
pub const FEATURED_COUNT: usize = 5;

/// Seedable source of mock catalog data.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    rng: StdRng,
}

impl MockGenerator {
    /// Generator seeded from OS entropy: each launch differs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn generate(&mut self, count: usize, offset: u32) -> Vec<CatalogItem> {
        generate_with(&mut self.rng, count, offset)
    }

    /// Builds one category row at `offset`.
    pub fn category(&mut self, id: &str, title: &str, offset: u32) -> Category {
        Category {
            id: id.to_string(),
            title: title.to_string(),
            items: self.generate(CATEGORY_SIZE, offset),
        }
    }
}

/// Generates `count` items where item `i` has id `offset + i + 1`.
///
/// # Example
///
/// ```
/// use iced_flix::catalog::generate_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let items = generate_with(&mut rng, 3, 10);
/// let ids: Vec<u64> = items.iter().map(|item| item.id.value()).collect();
/// assert_eq!(ids, vec![11, 12, 13]);
/// ```
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize, offset: u32) -> Vec<CatalogItem> {
    (u64::from(offset)..)
        .take(count)
        .map(|position| generate_item(rng, position))
        .collect()
}

fn generate_item<R: Rng + ?Sized>(rng: &mut R, position: u64) -> CatalogItem {
    let genre_count = rng.random_range(1..=MAX_GENRES);

    CatalogItem {
        id: ItemId(position + 1),
        title: pick(&TITLES, position).to_string(),
        description: pick(&DESCRIPTIONS, position).to_string(),
        backdrop_url: pools::backdrop_url(position),
        poster_url: pools::poster_url(position),
        rating: RatingPercent::new(rng.random_range(RATING_RANGE)),
        maturity_rating: MaturityRating::ALL[rng.random_range(0..MaturityRating::ALL.len())],
        release_year: rng.random_range(YEAR_RANGE),
        duration: Runtime::new(rng.random_range(1..=3), rng.random_range(0..=58)),
        genres: Genre::ALL[..genre_count].to_vec(),
    }
}

/// Pool entry at `position`, cycling.
fn pick<'a>(pool: &[&'a str], position: u64) -> &'a str {
    // The remainder is below `pool.len()`, so it always fits a `usize`.
    pool[(position % pool.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generate_returns_requested_count() {
        let mut generator = MockGenerator::seeded(1);
        assert_eq!(generator.generate(0, 0).len(), 0);
        assert_eq!(generator.generate(7, 30).len(), 7);
    }

    #[test]
    fn ids_follow_offset() {
        let mut generator = MockGenerator::seeded(1);
        let ids: Vec<u64> = generator.generate(3, 10).iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![11, 12, 13]);
    }

    #[test]
    fn titles_and_descriptions_cycle_through_pools() {
        let mut generator = MockGenerator::seeded(1);
        let items = generator.generate(3, 10);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.title, TITLES[(10 + i) % TITLES.len()]);
            assert_eq!(item.description, DESCRIPTIONS[(10 + i) % DESCRIPTIONS.len()]);
        }
        let wrapped = generator.generate(1, 20);
        assert_eq!(wrapped[0].title, "Stranger Things");
    }

    #[test]
    fn image_urls_depend_on_position() {
        let mut generator = MockGenerator::seeded(1);
        let item = &generator.generate(1, 10)[0];
        assert_eq!(item.backdrop_url, "https://picsum.photos/seed/110/1920/1080");
        assert_eq!(item.poster_url, "https://picsum.photos/seed/210/300/450");
    }

    #[test]
    fn random_fields_stay_in_range() {
        let mut generator = MockGenerator::seeded(99);
        for item in generator.generate(500, 0) {
            assert!(RATING_RANGE.contains(&item.rating.value()));
            assert!(YEAR_RANGE.contains(&item.release_year));
            assert!((1..=3).contains(&item.duration.hours()));
            assert!(item.duration.minutes() <= 58);
            assert!((1..=MAX_GENRES).contains(&item.genres.len()));
            assert_eq!(item.genres[..], Genre::ALL[..item.genres.len()]);
        }
    }

    #[test]
    fn random_fields_cover_every_maturity_rating() {
        let mut generator = MockGenerator::seeded(5);
        let seen: HashSet<_> = generator
            .generate(200, 0)
            .iter()
            .map(|item| item.maturity_rating)
            .collect();
        assert_eq!(seen.len(), MaturityRating::ALL.len());
    }

    #[test]
    fn same_seed_yields_same_items() {
        let first = MockGenerator::seeded(42).generate(20, 0);
        let second = MockGenerator::seeded(42).generate(20, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn offsets_at_the_top_of_the_range_keep_ids_unique() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = generate_with(&mut rng, 3, u32::MAX - 1);
        let ids: Vec<u64> = items.iter().map(|item| item.id.value()).collect();
        let top = u64::from(u32::MAX);
        assert_eq!(ids, vec![top, top + 1, top + 2]);
        assert_eq!(
            items[2].backdrop_url,
            format!("https://picsum.photos/seed/{}/1920/1080", top + 1 + 100)
        );
        assert_eq!(items[2].title, TITLES[((top + 1) % 20) as usize]);
    }

    #[test]
    fn category_uses_layout_size() {
        let mut generator = MockGenerator::seeded(3);
        let category = generator.category("action", "Action & Adventure", 30);
        assert_eq!(category.id, "action");
        assert_eq!(category.items.len(), CATEGORY_SIZE);
        assert_eq!(category.items[0].id, ItemId(31));
    }
}
