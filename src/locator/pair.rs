use super::{check_size, find_run, sorted_by_rank, with_kickers, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory};

/// Locates the highest pair with three kickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairLocator;

impl HandLocator for PairLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);
        let Some(start) = find_run(&sorted, 2) else {
            return Ok(None);
        };

        let best = with_kickers(&sorted, &[start, start + 1]);
        let ranks = std::iter::once(best[0].rank)
            .chain(best[2..].iter().map(|c| c.rank))
            .collect();

        Hand::new(HandCategory::Pair, &best, ranks).map(Some)
    }
}
