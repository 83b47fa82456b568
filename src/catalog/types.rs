// SPDX-License-Identifier: MPL-2.0
//! Value types describing generated catalog records.

use std::fmt;

/// Stable identifier of a catalog item, unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audience match score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RatingPercent(u8);

impl RatingPercent {
    pub const MAX: u8 = 100;

    /// Creates a rating, clamping to 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaturityRating {
    TvMa,
    Tv14,
    Pg13,
    R,
}

impl MaturityRating {
    pub const ALL: [MaturityRating; 4] = [
        MaturityRating::TvMa,
        MaturityRating::Tv14,
        MaturityRating::Pg13,
        MaturityRating::R,
    ];

    /// Badge text. Ratings are regulatory labels and stay untranslated.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MaturityRating::TvMa => "TV-MA",
            MaturityRating::Tv14 => "TV-14",
            MaturityRating::Pg13 => "PG-13",
            MaturityRating::R => "R",
        }
    }
}

impl fmt::Display for MaturityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running time, rendered as `"{h}h {m}m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runtime {
    hours: u8,
    minutes: u8,
}

impl Runtime {
    /// Creates a runtime. Minutes past 59 roll over into hours.
    #[must_use]
    pub fn new(hours: u8, minutes: u8) -> Self {
        let total = u16::from(hours) * 60 + u16::from(minutes);
        Self {
            hours: u8::try_from(total / 60).unwrap_or(u8::MAX),
            minutes: (total % 60) as u8,
        }
    }

    #[must_use]
    pub fn hours(self) -> u8 {
        self.hours
    }

    #[must_use]
    pub fn minutes(self) -> u8 {
        self.minutes
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Genre tag. Items carry an ordered prefix of [`Genre::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Drama,
    Thriller,
    SciFi,
    Action,
    Comedy,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Drama,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Action,
        Genre::Comedy,
    ];

    /// Fluent key of the genre's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Genre::Drama => "genre-drama",
            Genre::Thriller => "genre-thriller",
            Genre::SciFi => "genre-sci-fi",
            Genre::Action => "genre-action",
            Genre::Comedy => "genre-comedy",
        }
    }
}

/// One generated title. Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub backdrop_url: String,
    pub poster_url: String,
    pub rating: RatingPercent,
    pub maturity_rating: MaturityRating,
    pub release_year: u16,
    pub duration: Runtime,
    pub genres: Vec<Genre>,
}

/// A titled row of items. Item order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub items: Vec<CatalogItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_clamps_above_hundred() {
        assert_eq!(RatingPercent::new(250).value(), 100);
        assert_eq!(RatingPercent::new(87).value(), 87);
    }

    #[test]
    fn runtime_displays_hours_and_minutes() {
        assert_eq!(Runtime::new(2, 5).to_string(), "2h 5m");
        assert_eq!(Runtime::new(1, 0).to_string(), "1h 0m");
    }

    #[test]
    fn runtime_rolls_minutes_over() {
        let runtime = Runtime::new(1, 75);
        assert_eq!(runtime.hours(), 2);
        assert_eq!(runtime.minutes(), 15);
    }

    #[test]
    fn maturity_labels_match_badges() {
        let labels: Vec<_> = MaturityRating::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["TV-MA", "TV-14", "PG-13", "R"]);
    }

    #[test]
    fn genre_keys_are_distinct() {
        let mut keys: Vec<_> = Genre::ALL.iter().map(|g| g.i18n_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Genre::ALL.len());
    }
}
