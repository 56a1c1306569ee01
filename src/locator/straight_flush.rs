use super::{check_size, HandLocator, StraightLocator};
use crate::cards::{Card, ALL_SUITS};
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory, HAND_SIZE};

/// Locates the highest straight made of cards of one suit.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightFlushLocator;

impl HandLocator for StraightFlushLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let mut best: Option<Hand> = None;
        for suit in ALL_SUITS {
            let suited: Vec<Card> = cards.iter().filter(|c| c.suit == suit).copied().collect();
            if suited.len() < HAND_SIZE {
                continue;
            }

            let Some(straight) = StraightLocator.locate(&suited)? else {
                continue;
            };
            if best
                .as_ref()
                .map_or(true, |b| b.ranks()[0] < straight.ranks()[0])
            {
                best = Some(straight);
            }
        }

        Ok(best.map(|h| h.with_category(HandCategory::StraightFlush)))
    }
}
