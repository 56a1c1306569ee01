use itertools::Itertools;

use super::{check_size, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory, HAND_SIZE};

/// Locates the five highest cards of the same suit.
///
/// When more than one suit has five cards the candidates are compared from
/// the highest card down, the first higher card wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlushLocator;

impl HandLocator for FlushLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| a.suit.cmp(&b.suit).then(b.rank.cmp(&a.rank)));

        let best = sorted
            .iter()
            .chunk_by(|c| c.suit)
            .into_iter()
            .filter_map(|(_, suited)| {
                let top = suited.take(HAND_SIZE).copied().collect::<Vec<_>>();
                (top.len() == HAND_SIZE).then_some(top)
            })
            .reduce(|best, candidate| {
                let higher = candidate
                    .iter()
                    .zip(&best)
                    .map(|(c, b)| c.rank.cmp(&b.rank))
                    .find(|ord| ord.is_ne())
                    .is_some_and(|ord| ord.is_gt());
                if higher {
                    candidate
                } else {
                    best
                }
            });

        let Some(best) = best else {
            return Ok(None);
        };
        let ranks = best.iter().map(|c| c.rank).collect();

        Hand::new(HandCategory::Flush, &best, ranks).map(Some)
    }
}
