use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::cards::{format_cards, parse_cards, Card, Deck};
use crate::display::{
    cards_display, hand_line, highlight_display, located_table, print_error, print_section,
    stats_table,
};
use crate::error::RankResult;
use crate::hand::{HandCategory, ALL_CATEGORIES};
use crate::locator::{best_hand, locator_for, HandLocator};
use crate::showdown::winners;
use crate::stats::category_frequencies;

#[derive(Parser)]
#[command(name = "ranker", version = "1.0.0", about = "Poker hand ranking: best hand, single categories, showdowns.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum Category {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Category {
    fn hand_category(&self) -> HandCategory {
        match self {
            Category::HighCard => HandCategory::HighCard,
            Category::Pair => HandCategory::Pair,
            Category::TwoPair => HandCategory::TwoPair,
            Category::ThreeOfAKind => HandCategory::ThreeOfAKind,
            Category::Straight => HandCategory::Straight,
            Category::Flush => HandCategory::Flush,
            Category::FullHouse => HandCategory::FullHouse,
            Category::FourOfAKind => HandCategory::FourOfAKind,
            Category::StraightFlush => HandCategory::StraightFlush,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best hand in a set of cards
    Best {
        /// Cards (e.g., "Ah Ad Kh Kd 8c")
        cards: String,
        /// Print the hand as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find the best hand of a single category
    Locate {
        /// Hand category to look for
        category: Category,
        /// Cards (e.g., "Ah Ad Kh Kd 8c")
        cards: String,
        /// Print the hand as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare the best hands of two or more sets of cards
    Compare {
        /// Card sets (e.g., "Ah Ad 7c 5d 2s 9h 3c" "Kh Kd 7c 5d 2s 9h 3c")
        #[arg(required = true, num_args = 2..)]
        sets: Vec<String>,
    },
    /// Deal random cards and show every category found
    Deal {
        /// Number of cards to deal
        #[arg(short = 'n', long, default_value = "7")]
        cards: usize,
    },
    /// Hand category frequencies over random deals
    Stats {
        /// Number of cards per deal
        #[arg(short = 'n', long, default_value = "7")]
        cards: usize,
        /// Number of deals
        #[arg(short, long, default_value = "100000")]
        deals: usize,
    },
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    let result = match cli.command {
        Commands::Best { cards, json } => cmd_best(&cards, json),
        Commands::Locate {
            category,
            cards,
            json,
        } => cmd_locate(category.hand_category(), &cards, json),
        Commands::Compare { sets } => cmd_compare(&sets),
        Commands::Deal { cards } => cmd_deal(cards),
        Commands::Stats { cards, deals } => cmd_stats(cards, deals),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn cmd_best(notation: &str, json: bool) -> RankResult<()> {
    let cards = parse_cards(notation)?;
    let hand = best_hand(&cards)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hand)?);
        return Ok(());
    }

    println!();
    println!("  {}", highlight_display(&cards, &hand));
    print_section("Best hand", &hand_line(&hand));
    println!();
    Ok(())
}

fn cmd_locate(category: HandCategory, notation: &str, json: bool) -> RankResult<()> {
    let cards = parse_cards(notation)?;
    let hand = locator_for(category).locate(&cards)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hand)?);
        return Ok(());
    }

    println!();
    println!("  {}", cards_display(&cards));
    match hand {
        Some(hand) => print_section(&category.to_string(), &hand_line(&hand)),
        None => print_section(
            &category.to_string(),
            &format!("no {} in {}", category, format_cards(&cards))
                .dimmed()
                .to_string(),
        ),
    }
    println!();
    Ok(())
}

fn cmd_compare(sets: &[String]) -> RankResult<()> {
    let sets = sets
        .iter()
        .map(|s| parse_cards(s))
        .collect::<RankResult<Vec<Vec<Card>>>>()?;
    let winners = winners(&sets)?;

    println!();
    for (idx, cards) in sets.iter().enumerate() {
        let hand = best_hand(cards)?;
        let marker = if winners.contains(&idx) {
            "WIN ".green().bold().to_string()
        } else {
            "    ".to_string()
        };
        println!("  {} #{}  {}", marker, idx + 1, hand_line(&hand));
    }

    if winners.len() > 1 {
        println!("\n  {}", "Split pot".yellow().bold());
    }
    println!();
    Ok(())
}

fn cmd_deal(count: usize) -> RankResult<()> {
    let mut deck = Deck::default();
    let cards = deck.shuffle().deal(count)?;

    let located = ALL_CATEGORIES
        .iter()
        .rev()
        .map(|&category| {
            locator_for(category)
                .locate(&cards)
                .map(|hand| (category, hand))
        })
        .collect::<RankResult<Vec<_>>>()?;

    let best = best_hand(&cards)?;

    println!();
    println!("  {}", highlight_display(&cards, &best));
    println!();
    println!("{}", located_table(&located));
    print_section("Best hand", &hand_line(&best));
    println!();
    Ok(())
}

fn cmd_stats(cards: usize, deals: usize) -> RankResult<()> {
    println!();
    println!(
        "  Dealing {} hands of {} cards...",
        format!("{}", deals).bold(),
        cards
    );
    println!();

    let stats = category_frequencies(cards, deals)?;
    println!("{}", stats_table(&stats));
    println!();
    Ok(())
}
