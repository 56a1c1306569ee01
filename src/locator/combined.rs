use log::{debug, trace};

use super::{
    BoxedLocator, FlushLocator, FourOfAKindLocator, FullHouseLocator, HandLocator,
    HighCardLocator, PairLocator, StraightFlushLocator, StraightLocator, ThreeOfAKindLocator,
    TwoPairLocator,
};
use crate::cards::Card;
use crate::error::{RankError, RankResult};
use crate::hand::{Hand, HAND_SIZE};

/// Tries a sequence of locators in order, the first one that finds a hand
/// wins.
///
/// The locators are used in the given order, to get the best possible hand
/// they must be sorted from the strongest category down, see
/// [CombinedLocator::standard].
pub struct CombinedLocator {
    locators: Vec<BoxedLocator>,
}

impl CombinedLocator {
    pub fn new(locators: Vec<BoxedLocator>) -> Self {
        CombinedLocator { locators }
    }

    /// All nine categories from straight flush down to high card.
    pub fn standard() -> Self {
        CombinedLocator::new(vec![
            Box::new(StraightFlushLocator),
            Box::new(FourOfAKindLocator),
            Box::new(FullHouseLocator),
            Box::new(FlushLocator),
            Box::new(StraightLocator),
            Box::new(ThreeOfAKindLocator),
            Box::new(TwoPairLocator),
            Box::new(PairLocator),
            Box::new(HighCardLocator),
        ])
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

impl HandLocator for CombinedLocator {
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>> {
        for (idx, locator) in self.locators.iter().enumerate() {
            if let Some(hand) = locator.locate(cards)? {
                debug!("locator {} found {}", idx, hand);
                return Ok(Some(hand));
            }
            trace!("locator {} found no hand", idx);
        }
        Ok(None)
    }
}

/// Finds the best hand in a set of at least five cards.
pub fn best_hand(cards: &[Card]) -> RankResult<Hand> {
    // The high card locator finds a hand for any five cards.
    CombinedLocator::standard()
        .locate(cards)?
        .ok_or(RankError::NotEnoughCards {
            need: HAND_SIZE,
            got: cards.len(),
        })
}
