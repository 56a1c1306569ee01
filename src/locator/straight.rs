use super::{check_size, sorted_by_rank, HandLocator};
use crate::cards::Card;
use crate::error::RankResult;
use crate::hand::{Hand, HandCategory, HAND_SIZE};

/// Locates the highest five cards with consecutive ranks.
///
/// Ace only counts high, A-2-3-4-5 is not a straight.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLocator;

impl HandLocator for StraightLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        check_size(cards)?;

        let sorted = sorted_by_rank(cards);
        let Some(best) = highest_run(&sorted) else {
            return Ok(None);
        };
        let ranks = vec![best[0].rank];

        Hand::new(HandCategory::Straight, &best, ranks).map(Some)
    }
}

/// Finds the highest five consecutive ranks in cards sorted by descending
/// rank, cards with a rank already in the run are skipped.
fn highest_run(sorted: &[Card]) -> Option<Vec<Card>> {
    let (first, rest) = sorted.split_first()?;

    let mut run = Vec::with_capacity(HAND_SIZE);
    run.push(*first);

    for card in rest {
        let last = run[run.len() - 1].rank.value();
        let value = card.rank.value();
        if value == last {
            continue;
        }

        if value + 1 != last {
            run.clear();
        }
        run.push(*card);

        if run.len() == HAND_SIZE {
            return Some(run);
        }
    }

    None
}
