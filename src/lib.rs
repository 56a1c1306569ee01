//! Poker hand ranking.
//!
//! Nine locators find the best hand of a single category in a set of cards,
//! a [CombinedLocator](locator::CombinedLocator) chains them to find the best
//! hand overall:
//!
//! ```
//! use hand_ranker::cards::parse_cards;
//! use hand_ranker::hand::HandCategory;
//! use hand_ranker::locator::{best_hand, FlushLocator, HandLocator};
//!
//! let cards = parse_cards("2d 5d 7d 9d Jd").unwrap();
//! let flush = FlushLocator.locate(&cards).unwrap().unwrap();
//! assert_eq!(flush.category(), HandCategory::Flush);
//!
//! let best = best_hand(&parse_cards("Ah Ad Kh Kd 8c").unwrap()).unwrap();
//! assert_eq!(best.category(), HandCategory::TwoPair);
//! ```
pub mod cards;
pub mod cli;
pub mod display;
pub mod error;
pub mod hand;
pub mod locator;
pub mod showdown;
pub mod stats;
