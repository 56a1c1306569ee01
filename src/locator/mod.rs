//! Poker hand category locators.
//!
//! Each locator looks for the best hand of a single [HandCategory] in a set of
//! at least five cards, and returns `Ok(None)` when the category cannot be
//! formed. The [CombinedLocator] chains locators to find the best hand.

use crate::cards::Card;
use crate::error::{RankError, RankResult};
use crate::hand::{Hand, HandCategory, HAND_SIZE};

mod combined;
mod flush;
mod four_of_a_kind;
mod full_house;
mod high_card;
mod pair;
mod straight;
mod straight_flush;
mod three_of_a_kind;
mod two_pair;

pub use combined::{best_hand, CombinedLocator};
pub use flush::FlushLocator;
pub use four_of_a_kind::FourOfAKindLocator;
pub use full_house::FullHouseLocator;
pub use high_card::HighCardLocator;
pub use pair::PairLocator;
pub use straight::StraightLocator;
pub use straight_flush::StraightFlushLocator;
pub use three_of_a_kind::ThreeOfAKindLocator;
pub use two_pair::TwoPairLocator;

/// Finds the best hand of some kind in a set of cards.
pub trait HandLocator {
    /// Returns the best hand in `cards`, or `None` if there is none.
    ///
    /// Fails with [RankError::NotEnoughCards] for less than five cards.
    fn locate(&self, cards: &[Card]) -> RankResult<Option<Hand>>;
}

pub type BoxedLocator = Box<dyn HandLocator + Send + Sync>;

/// Returns the locator for a single category.
pub fn locator_for(category: HandCategory) -> BoxedLocator {
    match category {
        HandCategory::HighCard => Box::new(HighCardLocator),
        HandCategory::Pair => Box::new(PairLocator),
        HandCategory::TwoPair => Box::new(TwoPairLocator),
        HandCategory::ThreeOfAKind => Box::new(ThreeOfAKindLocator),
        HandCategory::Straight => Box::new(StraightLocator),
        HandCategory::Flush => Box::new(FlushLocator),
        HandCategory::FullHouse => Box::new(FullHouseLocator),
        HandCategory::FourOfAKind => Box::new(FourOfAKindLocator),
        HandCategory::StraightFlush => Box::new(StraightFlushLocator),
    }
}

fn check_size(cards: &[Card]) -> RankResult<()> {
    if cards.len() < HAND_SIZE {
        return Err(RankError::NotEnoughCards {
            need: HAND_SIZE,
            got: cards.len(),
        });
    }
    Ok(())
}

/// A copy of the cards sorted by descending rank, equal ranks keep the
/// input order.
fn sorted_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
    sorted
}

/// Start of the first run of `len` cards with the same rank.
fn find_run(sorted: &[Card], len: usize) -> Option<usize> {
    sorted
        .windows(len)
        .position(|w| w.iter().all(|c| c.rank == w[0].rank))
}

/// Builds the hand cards from the cards at `used`, filled up with the
/// highest of the other cards.
fn with_kickers(sorted: &[Card], used: &[usize]) -> Vec<Card> {
    used.iter()
        .map(|&i| sorted[i])
        .chain(
            sorted
                .iter()
                .enumerate()
                .filter(|(i, _)| !used.contains(i))
                .map(|(_, c)| *c),
        )
        .take(HAND_SIZE)
        .collect()
}
