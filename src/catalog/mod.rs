// SPDX-License-Identifier: MPL-2.0
//! In-memory mock catalog shown on the home page.
//!
//! The catalog is generated once at startup and never changes afterwards.
//! See [`generator`] for the value distributions and [`CATEGORY_LAYOUT`] for
//! the rows.

pub mod generator;
pub mod pools;
pub mod types;

pub use generator::{
    generate_with, MockGenerator, CATEGORY_LAYOUT, CATEGORY_SIZE, FEATURED_COUNT,
};
pub use types::{CatalogItem, Category, Genre, ItemId, MaturityRating, RatingPercent, Runtime};

/// Featured items plus every category row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub featured: Vec<CatalogItem>,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Builds the default layout: featured items at offset 0, then one row
    /// per [`CATEGORY_LAYOUT`] entry.
    pub fn generate(generator: &mut MockGenerator) -> Self {
        let featured = generator.generate(FEATURED_COUNT, 0);
        let categories = CATEGORY_LAYOUT
            .iter()
            .map(|(id, title, offset)| generator.category(id, title, *offset))
            .collect();
        Self {
            featured,
            categories,
        }
    }

    /// Every item, featured first, then rows in display order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.featured
            .iter()
            .chain(self.categories.iter().flat_map(|c| c.items.iter()))
    }

    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.categories.iter().all(|c| c.items.is_empty())
    }
}
