use super::{check_size, find_run, sorted_by_rank, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory};

/// Locates the highest three of a kind plus the highest pair among the
/// other cards.
///
/// The pair never comes from the fourth card of a four of a kind, so `7777A`
/// has no full house.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullHouseLocator;

impl HandLocator for FullHouseLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let mut rest = sorted_by_rank(cards);
        let Some(start) = find_run(&rest, 3) else {
            return Ok(None);
        };
        let trips: Vec<Card> = rest.drain(start..start + 3).collect();

        let Some(pair) = find_run(&rest, 2) else {
            return Ok(None);
        };

        let best = [trips[0], trips[1], trips[2], rest[pair], rest[pair + 1]];
        let ranks = vec![trips[0].rank, rest[pair].rank];

        Hand::new(HandCategory::FullHouse, &best, ranks).map(Some)
    }
}
