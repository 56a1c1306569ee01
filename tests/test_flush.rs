use hand_ranker::cards::*;
use hand_ranker::hand::*;
use hand_ranker::locator::*;

fn cards(notation: &str) -> Vec<Card> {
    parse_cards(notation).unwrap()
}

fn hand(notation: &str, ranks: &[Rank]) -> Hand {
    Hand::new(HandCategory::Flush, &cards(notation), ranks.to_vec()).unwrap()
}

#[test]
fn test_no_flush() {
    assert_eq!(FlushLocator.locate(&cards("As 7d 7c 7h Kd")).unwrap(), None);
    assert_eq!(FlushLocator.locate(&cards("As Ks 7s 2s Kd 3h 4c")).unwrap(), None);
}

#[test]
fn test_five_cards() {
    let actual = FlushLocator.locate(&cards("2d 5d 7d 9d Jd")).unwrap();
    let expected = hand(
        "2d 5d 7d 9d Jd",
        &[Rank::Jack, Rank::Nine, Rank::Seven, Rank::Five, Rank::Two],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_seven_cards() {
    let actual = FlushLocator.locate(&cards("2d 2h 5d 7d Ac 9d Jd")).unwrap();
    let expected = hand(
        "2d 5d 7d 9d Jd",
        &[Rank::Jack, Rank::Nine, Rank::Seven, Rank::Five, Rank::Two],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_top_five_of_suit() {
    let actual = FlushLocator.locate(&cards("2c 4c 6c 8c Tc Qc Ad")).unwrap();
    let expected = hand(
        "4c 6c 8c Tc Qc",
        &[Rank::Queen, Rank::Ten, Rank::Eight, Rank::Six, Rank::Four],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_multiple_suits() {
    let actual = FlushLocator
        .locate(&cards("2d 5d 7d 9d Jd 2h 4h 5h Jh Ah"))
        .unwrap();
    let expected = hand(
        "2h 4h 5h Jh Ah",
        &[Rank::Ace, Rank::Jack, Rank::Five, Rank::Four, Rank::Two],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_multiple_suits_last_card_decides() {
    let actual = FlushLocator
        .locate(&cards("3h 4h 5h Jh Ah 2d 4d 5d Jd Ad 2s 4s 5s Js As"))
        .unwrap();
    let expected = hand(
        "3h 4h 5h Jh Ah",
        &[Rank::Ace, Rank::Jack, Rank::Five, Rank::Four, Rank::Three],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_multiple_suits_equal_ranks() {
    let actual = FlushLocator
        .locate(&cards("2d 5d 7d 9d Jd 2c 5c 7c 9c Jc"))
        .unwrap()
        .unwrap();
    assert_eq!(
        actual.ranks(),
        &[Rank::Jack, Rank::Nine, Rank::Seven, Rank::Five, Rank::Two]
    );
    let suit = actual.cards()[0].suit;
    assert!(actual.cards().iter().all(|c| c.suit == suit));
}
