//! Static content tables: palette, challenge tiers and the card catalog.
//!
//! Order is significant in every table here. Layout generation draws from
//! a prefix of [`PALETTE`], and the reward evaluator breaks rarity ties by
//! [`CARD_CATALOG`] order.

use crate::{Card, CardRequirement, ChallengeTier, Color, Difficulty, Rarity};

pub const PALETTE: [Color; 8] = [
    Color {
        id: "red",
        name: "Red",
        display_class: "block-red",
        hex: "#ef4444",
    },
    Color {
        id: "blue",
        name: "Blue",
        display_class: "block-blue",
        hex: "#3b82f6",
    },
    Color {
        id: "green",
        name: "Green",
        display_class: "block-green",
        hex: "#22c55e",
    },
    Color {
        id: "yellow",
        name: "Yellow",
        display_class: "block-yellow",
        hex: "#eab308",
    },
    Color {
        id: "purple",
        name: "Purple",
        display_class: "block-purple",
        hex: "#a855f7",
    },
    Color {
        id: "orange",
        name: "Orange",
        display_class: "block-orange",
        hex: "#f97316",
    },
    Color {
        id: "pink",
        name: "Pink",
        display_class: "block-pink",
        hex: "#ec4899",
    },
    Color {
        id: "cyan",
        name: "Cyan",
        display_class: "block-cyan",
        hex: "#06b6d4",
    },
];

/// Challenge-mode ramp. The last tier is unbounded.
pub const CHALLENGE_TIERS: [ChallengeTier; 4] = [
    ChallengeTier {
        min_level: 1,
        max_level: Some(3),
        grid_size: 2,
        color_count: 3,
        memory_time_seconds: 5,
        distraction_eligible: false,
    },
    ChallengeTier {
        min_level: 4,
        max_level: Some(7),
        grid_size: 3,
        color_count: 4,
        memory_time_seconds: 5,
        distraction_eligible: false,
    },
    ChallengeTier {
        min_level: 8,
        max_level: Some(12),
        grid_size: 3,
        color_count: 5,
        memory_time_seconds: 4,
        distraction_eligible: false,
    },
    ChallengeTier {
        min_level: 13,
        max_level: None,
        grid_size: 4,
        color_count: 6,
        memory_time_seconds: 4,
        distraction_eligible: true,
    },
];

/// Tier for `level`, falling back to the last tier when no range matches.
pub fn challenge_tier(level: u32) -> &'static ChallengeTier {
    CHALLENGE_TIERS
        .iter()
        .find(|tier| tier.contains(level))
        .unwrap_or(&CHALLENGE_TIERS[CHALLENGE_TIERS.len() - 1])
}

pub const CARD_CATALOG: [Card; 12] = [
    // Beginner
    Card {
        id: "snail",
        name: "Little Snail",
        emoji: "🐌",
        rarity: Rarity::Common,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Easy,
            min_accuracy: 50,
            max_time_seconds: None,
        },
        description: "Slow and steady still reaches the finish",
    },
    Card {
        id: "turtle",
        name: "Little Turtle",
        emoji: "🐢",
        rarity: Rarity::Common,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Easy,
            min_accuracy: 75,
            max_time_seconds: Some(30),
        },
        description: "A patient and steady sage",
    },
    Card {
        id: "rabbit",
        name: "Bunny",
        emoji: "🐰",
        rarity: Rarity::Rare,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Easy,
            min_accuracy: 100,
            max_time_seconds: Some(20),
        },
        description: "Hopping along happily",
    },
    // Intermediate
    Card {
        id: "cat",
        name: "Clever Kitten",
        emoji: "🐱",
        rarity: Rarity::Common,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Medium,
            min_accuracy: 75,
            max_time_seconds: Some(30),
        },
        description: "A little one full of curiosity",
    },
    Card {
        id: "squirrel",
        name: "Nimble Squirrel",
        emoji: "🐿️",
        rarity: Rarity::Rare,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Medium,
            min_accuracy: 100,
            max_time_seconds: Some(15),
        },
        description: "A lightning-fast nut collector",
    },
    Card {
        id: "bee",
        name: "Busy Bee",
        emoji: "🐝",
        rarity: Rarity::Epic,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Medium,
            min_accuracy: 100,
            max_time_seconds: Some(10),
        },
        description: "Buzzing, the very picture of hard work",
    },
    // Advanced
    Card {
        id: "fox",
        name: "Quick-witted Fox",
        emoji: "🦊",
        rarity: Rarity::Rare,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Hard,
            min_accuracy: 80,
            max_time_seconds: Some(40),
        },
        description: "The brilliant spirit of the forest",
    },
    Card {
        id: "owl",
        name: "Wise Owl",
        emoji: "🦉",
        rarity: Rarity::Epic,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Hard,
            min_accuracy: 100,
            max_time_seconds: Some(30),
        },
        description: "The sage of the night",
    },
    Card {
        id: "elephant",
        name: "Memory Master Elephant",
        emoji: "🐘",
        rarity: Rarity::Legendary,
        requirement: CardRequirement::Normal {
            difficulty: Difficulty::Hard,
            min_accuracy: 100,
            max_time_seconds: Some(20),
        },
        description: "An elephant never forgets",
    },
    // Challenge
    Card {
        id: "cheetah",
        name: "Lightning Cheetah",
        emoji: "🐆",
        rarity: Rarity::Legendary,
        requirement: CardRequirement::Challenge { min_level: 10 },
        description: "Speed and wits in perfect balance",
    },
    Card {
        id: "dragon",
        name: "Divine Dragon",
        emoji: "🐉",
        rarity: Rarity::Mythic,
        requirement: CardRequirement::Challenge { min_level: 20 },
        description: "The legendary king of memory",
    },
    Card {
        id: "unicorn",
        name: "Unicorn",
        emoji: "🦄",
        rarity: Rarity::Mythic,
        requirement: CardRequirement::Challenge { min_level: 30 },
        description: "Magic and wisdom made flesh",
    },
];

pub fn find_card(id: &str) -> Option<&'static Card> {
    CARD_CATALOG.iter().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_ids_are_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn challenge_tier_lookup() {
        assert_eq!(challenge_tier(1).grid_size, 2);
        assert_eq!(challenge_tier(3).grid_size, 2);
        assert_eq!(challenge_tier(4).grid_size, 3);
        assert_eq!(challenge_tier(8).color_count, 5);
        assert!(!challenge_tier(12).distraction_eligible);
        assert!(challenge_tier(13).distraction_eligible);
        assert_eq!(challenge_tier(999).grid_size, 4);
    }

    #[test]
    fn challenge_tier_below_first_falls_back_to_last() {
        assert_eq!(challenge_tier(0), &CHALLENGE_TIERS[3]);
    }

    #[test]
    fn tiers_are_contiguous() {
        for pair in CHALLENGE_TIERS.windows(2) {
            assert_eq!(pair[0].max_level.map(|m| m + 1), Some(pair[1].min_level));
        }
    }

    #[test]
    fn find_card_by_id() {
        assert_eq!(find_card("dragon").map(|c| c.rarity), Some(Rarity::Mythic));
        assert!(find_card("platypus").is_none());
    }

    #[test]
    fn catalog_order_is_preserved() {
        let ids: Vec<&str> = CARD_CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "snail", "turtle", "rabbit", "cat", "squirrel", "bee", "fox", "owl", "elephant",
                "cheetah", "dragon", "unicorn"
            ]
        );
    }
}
