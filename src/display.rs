use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::hand::{Hand, HandCategory, ALL_CATEGORIES};
use crate::stats::CategoryStats;

pub fn card_display(card: &Card) -> String {
    let pretty = card.pretty();
    match card.suit {
        Suit::Spades => pretty.white().to_string(),
        Suit::Hearts => pretty.red().to_string(),
        Suit::Diamonds => pretty.blue().to_string(),
        Suit::Clubs => pretty.green().to_string(),
    }
}

pub fn cards_display(cards: &[Card]) -> String {
    cards.iter().map(card_display).collect::<Vec<_>>().join(" ")
}

/// Cards display with the cards of `hand` highlighted.
pub fn highlight_display(cards: &[Card], hand: &Hand) -> String {
    cards
        .iter()
        .map(|card| {
            if hand.contains(card) {
                card_display(card).bold().underline().to_string()
            } else {
                card.pretty().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn hand_line(hand: &Hand) -> String {
    let ranks = hand
        .ranks()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}  {}  {}",
        category_display(hand.category()),
        cards_display(hand.cards()),
        format!("({})", ranks).dimmed()
    )
}

pub fn category_display(category: HandCategory) -> String {
    let name = category.to_string();
    match category {
        HandCategory::StraightFlush | HandCategory::FourOfAKind => name.red().bold().to_string(),
        HandCategory::FullHouse | HandCategory::Flush | HandCategory::Straight => {
            name.yellow().bold().to_string()
        }
        HandCategory::ThreeOfAKind | HandCategory::TwoPair | HandCategory::Pair => {
            name.green().bold().to_string()
        }
        HandCategory::HighCard => name.bold().to_string(),
    }
}

/// One row per category with the hand located for it, if any.
pub fn located_table(located: &[(HandCategory, Option<Hand>)]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category".bold().to_string()),
        Cell::new("Cards"),
        Cell::new("Ranks"),
    ]);

    for (category, hand) in located {
        let row = match hand {
            Some(hand) => vec![
                Cell::new(category_display(*category)),
                Cell::new(cards_display(hand.cards())),
                Cell::new(
                    hand.ranks()
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            ],
            None => vec![
                Cell::new(category.to_string().dimmed().to_string()),
                Cell::new("-".dimmed().to_string()),
                Cell::new(""),
            ],
        };
        table.add_row(row);
    }

    table.to_string()
}

pub fn stats_table(stats: &CategoryStats) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category".bold().to_string()),
        Cell::new("Count").set_alignment(CellAlignment::Right),
        Cell::new("Frequency").set_alignment(CellAlignment::Right),
    ]);

    for category in ALL_CATEGORIES.iter().rev() {
        table.add_row(vec![
            Cell::new(category_display(*category)),
            Cell::new(stats.count(*category)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}%", stats.fraction(*category) * 100.0))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("  {}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
