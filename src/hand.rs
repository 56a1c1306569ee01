use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::{Card, Rank};
use crate::error::{RankError, RankResult};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand categories from the weakest to the strongest.
///
/// A royal flush is the Ace high [HandCategory::StraightFlush].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

pub const ALL_CATEGORIES: [HandCategory; 9] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
];

impl HandCategory {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::Pair => write!(f, "Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

/// A five cards poker hand.
///
/// The `ranks` sequence breaks ties between hands of the same category, the
/// first rank is the most significant. The order of the cards is not
/// relevant, two hands with the same cards compare equal.
///
/// A hand does not check that its cards actually form its category, only
/// the locators build consistent hands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hand {
    category: HandCategory,
    cards: [Card; HAND_SIZE],
    ranks: Vec<Rank>,
}

impl Hand {
    pub fn new(category: HandCategory, cards: &[Card], ranks: Vec<Rank>) -> RankResult<Hand> {
        let cards: [Card; HAND_SIZE] = cards
            .iter()
            .copied()
            .sorted_by(|a, b| b.cmp(a))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<Card>| RankError::InvalidHandSize(v.len()))?;

        Ok(Hand {
            category,
            cards,
            ranks,
        })
    }

    /// Copies this hand with a different category.
    pub fn with_category(&self, category: HandCategory) -> Hand {
        Hand {
            category,
            ..self.clone()
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand cards sorted by descending rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Compares two hands strength, by category first and then by ranks.
    pub fn strength_cmp(&self, other: &Hand) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength_cmp(other)
            .then_with(|| self.cards.cmp(&other.cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            self.category,
            self.cards.iter().join(" "),
            self.ranks.iter().join(", ")
        )
    }
}
