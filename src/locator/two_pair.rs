use super::{check_size, sorted_by_rank, with_kickers, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory};

/// Locates the two highest disjoint pairs with a kicker.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPairLocator;

impl HandLocator for TwoPairLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);

        let mut pairs = Vec::with_capacity(2);
        let mut i = 0;
        while i + 1 < sorted.len() && pairs.len() < 2 {
            if sorted[i].rank == sorted[i + 1].rank {
                pairs.push(i);
                // Both cards belong to this pair.
                i += 2;
            } else {
                i += 1;
            }
        }

        let &[high, low] = pairs.as_slice() else {
            return Ok(None);
        };

        let best = with_kickers(&sorted, &[high, high + 1, low, low + 1]);
        let ranks = vec![best[0].rank, best[2].rank, best[4].rank];

        Hand::new(HandCategory::TwoPair, &best, ranks).map(Some)
    }
}
