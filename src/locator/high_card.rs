use super::{check_size, sorted_by_rank, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory, HAND_SIZE};

/// Locates the five highest cards, always finds a hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighCardLocator;

impl HandLocator for HighCardLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);
        let best = &sorted[..HAND_SIZE];
        let ranks = best.iter().map(|c| c.rank).collect();

        Hand::new(HandCategory::HighCard, best, ranks).map(Some)
    }
}
