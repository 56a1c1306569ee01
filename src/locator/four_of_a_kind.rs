use super::{check_size, find_run, sorted_by_rank, with_kickers, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory};

/// Locates the highest four of a kind with one kicker.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourOfAKindLocator;

impl HandLocator for FourOfAKindLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);
        let Some(start) = find_run(&sorted, 4) else {
            return Ok(None);
        };

        let best = with_kickers(&sorted, &[start, start + 1, start + 2, start + 3]);
        let ranks = vec![best[0].rank, best[4].rank];

        Hand::new(HandCategory::FourOfAKind, &best, ranks).map(Some)
    }
}
