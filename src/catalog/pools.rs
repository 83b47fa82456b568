// SPDX-License-Identifier: MPL-2.0
//! Fixed text pools the generator cycles through.

pub const TITLES: [&str; 20] = [
    "Stranger Things",
    "The Crown",
    "Wednesday",
    "Squid Game",
    "Money Heist",
    "Bridgerton",
    "Ozark",
    "The Witcher",
    "Cobra Kai",
    "You",
    "Dark",
    "Narcos",
    "Peaky Blinders",
    "Breaking Bad",
    "Better Call Saul",
    "The Last Kingdom",
    "Vikings",
    "Black Mirror",
    "Mindhunter",
    "The Umbrella Academy",
];

pub const DESCRIPTIONS: [&str; 5] = [
    "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, \
     terrifying supernatural forces and one strange little girl.",
    "This drama follows the political rivalries and romance of Queen Elizabeth II's reign and \
     the events that shaped the second half of the 20th century.",
    "Smart, sarcastic and a little dead inside, Wednesday Addams investigates a murder spree \
     while making new friends (and foes) at Nevermore Academy.",
    "Hundreds of cash-strapped players accept a strange invitation to compete in children's \
     games. Inside, a tempting prize awaits with deadly high stakes.",
    "Eight thieves take hostages and lock themselves in the Royal Mint of Spain as a criminal \
     mastermind manipulates the police to carry out his plan.",
];

/// Seed added to an item's position to build its backdrop URL.
pub const BACKDROP_SEED_BASE: u64 = 100;

/// Seed added to an item's position to build its poster URL.
pub const POSTER_SEED_BASE: u64 = 200;

#[must_use]
pub fn backdrop_url(position: u64) -> String {
    format!(
        "https://picsum.photos/seed/{}/1920/1080",
        position + BACKDROP_SEED_BASE
    )
}

#[must_use]
pub fn poster_url(position: u64) -> String {
    format!(
        "https://picsum.photos/seed/{}/300/450",
        position + POSTER_SEED_BASE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_use_distinct_seed_ranges() {
        assert_eq!(backdrop_url(0), "https://picsum.photos/seed/100/1920/1080");
        assert_eq!(poster_url(12), "https://picsum.photos/seed/212/300/450");
    }

    #[test]
    fn urls_accept_positions_past_u32() {
        let position = u64::from(u32::MAX);
        assert_eq!(
            poster_url(position),
            "https://picsum.photos/seed/4294967495/300/450"
        );
    }
}
