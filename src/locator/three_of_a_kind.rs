use super::{check_size, find_run, sorted_by_rank, with_kickers, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory};

/// Locates the highest three of a kind with two kickers.
///
/// With four of a kind the fourth card is a kicker like any other card.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeOfAKindLocator;

impl HandLocator for ThreeOfAKindLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);
        let Some(start) = find_run(&sorted, 3) else {
            return Ok(None);
        };

        let best = with_kickers(&sorted, &[start, start + 1, start + 2]);
        let ranks = vec![best[0].rank, best[3].rank, best[4].rank];

        Hand::new(HandCategory::ThreeOfAKind, &best, ranks).map(Some)
    }
}
