use std::cmp::Ordering;

use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::Hand;
use crate::locator::best_hand;

/// Compares the best hands that can be made with two sets of cards.
pub fn compare_cards(cards1: &[Card], cards2: &[Card]) -> RankResult<Ordering> {
    let h1 = best_hand(cards1)?;
    let h2 = best_hand(cards2)?;
    Ok(h1.strength_cmp(&h2))
}

/// Returns the indices of the card sets that make the strongest hand, more
/// than one on a tie.
pub fn winners(sets: &[Vec<Card>]) -> RankResult<Vec<usize>> {
    let hands = sets
        .iter()
        .map(|cards| best_hand(cards))
        .collect::<RankResult<Vec<Hand>>>()?;

    let Some(best) = hands.iter().max_by(|a, b| a.strength_cmp(b)) else {
        return Ok(Vec::new());
    };

    Ok(hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.strength_cmp(best) == Ordering::Equal)
        .map(|(idx, _)| idx)
        .collect())
}
