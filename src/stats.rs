//! Hand categories frequencies over random deals.

use log::debug;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rayon::prelude::*;

use crate::cards::Deck;
use crate::error::{RankError, RankResult};
use crate::hand::{HandCategory, ALL_CATEGORIES, HAND_SIZE};
use crate::locator::{CombinedLocator, HandLocator};

const NUM_CATEGORIES: usize = ALL_CATEGORIES.len();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub counts: [u64; NUM_CATEGORIES],
    pub deals: u64,
}

impl CategoryStats {
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category.index()]
    }

    pub fn fraction(&self, category: HandCategory) -> f64 {
        if self.deals == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.deals as f64
    }
}

/// Deals `deals` random hands of `cards_per_deal` cards and counts the
/// category of the best hand of each deal.
pub fn category_frequencies(cards_per_deal: usize, deals: usize) -> RankResult<CategoryStats> {
    let deck = Deck::default();
    if cards_per_deal < HAND_SIZE {
        return Err(RankError::NotEnoughCards {
            need: HAND_SIZE,
            got: cards_per_deal,
        });
    }
    if cards_per_deal > deck.len() {
        return Err(RankError::NotEnoughDeck {
            requested: cards_per_deal,
            available: deck.len(),
        });
    }

    debug!("dealing {} hands of {} cards", deals, cards_per_deal);

    let counts = (0..deals)
        .into_par_iter()
        .map_init(
            || (CombinedLocator::standard(), deck.cards.clone(), thread_rng()),
            |(locator, cards, rng), _| -> RankResult<HandCategory> {
                let (dealt, _) = cards.partial_shuffle(rng, cards_per_deal);
                let hand = locator.locate(dealt)?.ok_or(RankError::NotEnoughCards {
                    need: HAND_SIZE,
                    got: dealt.len(),
                })?;
                Ok(hand.category())
            },
        )
        .try_fold(
            || [0u64; NUM_CATEGORIES],
            |mut acc, category| -> RankResult<[u64; NUM_CATEGORIES]> {
                acc[category?.index()] += 1;
                Ok(acc)
            },
        )
        .try_reduce(
            || [0u64; NUM_CATEGORIES],
            |mut a, b| {
                a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                Ok(a)
            },
        )?;

    debug!("category counts {:?}", counts);

    Ok(CategoryStats {
        counts,
        deals: deals as u64,
    })
}
