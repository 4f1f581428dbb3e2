//! Reward module - pick the best collectible card a round has earned.
//!
//! Pure: recording the card (and any challenge high score) is left to the
//! caller.

use crate::types::{Card, CardRequirement, Difficulty, GameMode, CARD_CATALOG};

/// Whether `card` is earned by a round with these metrics.
pub fn is_eligible(
    card: &Card,
    difficulty: Option<Difficulty>,
    accuracy: u8,
    time_spent_seconds: u32,
    mode: GameMode,
    level: u32,
) -> bool {
    match card.requirement {
        CardRequirement::Challenge { min_level } => {
            mode == GameMode::Challenge && level >= min_level && accuracy == 100
        }
        CardRequirement::Normal {
            difficulty: required,
            min_accuracy,
            max_time_seconds,
        } => {
            difficulty == Some(required)
                && accuracy >= min_accuracy
                && max_time_seconds.map_or(true, |max| time_spent_seconds <= max)
        }
    }
}

/// Highest-rarity eligible card in `catalog`; ties go to the earlier card.
pub fn best_card<'a>(
    catalog: &'a [Card],
    difficulty: Option<Difficulty>,
    accuracy: u8,
    time_spent_seconds: u32,
    mode: GameMode,
    level: u32,
) -> Option<&'a Card> {
    let mut best: Option<&Card> = None;
    for card in catalog
        .iter()
        .filter(|c| is_eligible(c, difficulty, accuracy, time_spent_seconds, mode, level))
    {
        match best {
            Some(current) if current.rarity.rank() >= card.rarity.rank() => {}
            _ => best = Some(card),
        }
    }
    best
}

/// [`best_card`] over the built-in catalog.
pub fn evaluate_reward(
    difficulty: Option<Difficulty>,
    accuracy: u8,
    time_spent_seconds: u32,
    mode: GameMode,
    level: u32,
) -> Option<&'static Card> {
    best_card(
        &CARD_CATALOG,
        difficulty,
        accuracy,
        time_spent_seconds,
        mode,
        level,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(card: Option<&Card>) -> Option<&'static str> {
        card.map(|c| c.id)
    }

    #[test]
    fn test_fast_perfect_easy_earns_rabbit() {
        let card = evaluate_reward(Some(Difficulty::Easy), 100, 15, GameMode::Normal, 0);
        assert_eq!(id(card), Some("rabbit"));
    }

    #[test]
    fn test_slow_partial_easy_earns_snail() {
        let card = evaluate_reward(Some(Difficulty::Easy), 60, 100, GameMode::Normal, 0);
        assert_eq!(id(card), Some("snail"));
    }

    #[test]
    fn test_below_every_threshold() {
        assert_eq!(
            evaluate_reward(Some(Difficulty::Easy), 49, 1, GameMode::Normal, 1),
            None
        );
    }

    #[test]
    fn test_time_limit_is_inclusive() {
        let card = evaluate_reward(Some(Difficulty::Easy), 100, 20, GameMode::Normal, 1);
        assert_eq!(id(card), Some("rabbit"));
        // snail and turtle are both common; catalog order keeps snail.
        let card = evaluate_reward(Some(Difficulty::Easy), 100, 21, GameMode::Normal, 1);
        assert_eq!(id(card), Some("snail"));
    }

    #[test]
    fn test_medium_and_hard_cards() {
        let card = evaluate_reward(Some(Difficulty::Medium), 100, 10, GameMode::Normal, 1);
        assert_eq!(id(card), Some("bee"));
        let card = evaluate_reward(Some(Difficulty::Hard), 100, 20, GameMode::Normal, 1);
        assert_eq!(id(card), Some("elephant"));
        let card = evaluate_reward(Some(Difficulty::Hard), 85, 20, GameMode::Normal, 1);
        assert_eq!(id(card), Some("fox"));
    }

    #[test]
    fn test_challenge_cards() {
        let card = evaluate_reward(None, 100, 5, GameMode::Challenge, 10);
        assert_eq!(id(card), Some("cheetah"));
        let card = evaluate_reward(None, 100, 5, GameMode::Challenge, 20);
        assert_eq!(id(card), Some("dragon"));
        // dragon and unicorn are both mythic; catalog order keeps dragon.
        let card = evaluate_reward(None, 100, 5, GameMode::Challenge, 30);
        assert_eq!(id(card), Some("dragon"));
    }

    #[test]
    fn test_challenge_cards_need_perfect_and_mode() {
        assert_eq!(evaluate_reward(None, 99, 5, GameMode::Challenge, 25), None);
        assert_eq!(evaluate_reward(None, 100, 5, GameMode::Challenge, 9), None);
        // level is irrelevant for normal cards, and every hard card has a time limit
        assert_eq!(
            evaluate_reward(Some(Difficulty::Hard), 100, 500, GameMode::Normal, 30),
            None
        );
    }

    #[test]
    fn test_tie_breaks_by_catalog_order() {
        let catalog = [CARD_CATALOG[1], CARD_CATALOG[0]];
        // turtle first, both common.
        let card = best_card(&catalog, Some(Difficulty::Easy), 80, 5, GameMode::Normal, 1);
        assert_eq!(id(card), Some("turtle"));
    }
}
