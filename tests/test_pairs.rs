use hand_ranker::cards::*;
use hand_ranker::error::RankError;
use hand_ranker::hand::*;
use hand_ranker::locator::*;

fn cards(notation: &str) -> Vec<Card> {
    parse_cards(notation).unwrap()
}

fn hand(category: HandCategory, notation: &str, ranks: &[Rank]) -> Hand {
    Hand::new(category, &cards(notation), ranks.to_vec()).unwrap()
}

// Pair

#[test]
fn test_pair_none() {
    assert_eq!(PairLocator.locate(&cards("As 7d 3c 2h Kd")).unwrap(), None);
}

#[test]
fn test_pair_five_cards() {
    let actual = PairLocator.locate(&cards("As 7d 7c 2h Kd")).unwrap();
    let expected = hand(
        HandCategory::Pair,
        "As 7d 7c 2h Kd",
        &[Rank::Seven, Rank::Ace, Rank::King, Rank::Two],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_pair_seven_cards() {
    let actual = PairLocator.locate(&cards("As 7d Tc 2h Kd Td 9s")).unwrap();
    let expected = hand(
        HandCategory::Pair,
        "As Kd Td 9s Tc",
        &[Rank::Ten, Rank::Ace, Rank::King, Rank::Nine],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_pair_highest_wins() {
    let actual = PairLocator.locate(&cards("As 7d 7c 9h 9d")).unwrap();
    let expected = hand(
        HandCategory::Pair,
        "As 7d 7c 9h 9d",
        &[Rank::Nine, Rank::Ace, Rank::Seven, Rank::Seven],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_pair_many_cards() {
    let actual = PairLocator
        .locate(&cards("2s 2h 3h 4h 5h 6h 7h 8h 9h Th"))
        .unwrap();
    let expected = hand(
        HandCategory::Pair,
        "2s 2h Th 9h 8h",
        &[Rank::Two, Rank::Ten, Rank::Nine, Rank::Eight],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_pair_from_three_of_a_kind() {
    let actual = PairLocator.locate(&cards("As 7d 7c 7h Kd")).unwrap();
    let expected = hand(
        HandCategory::Pair,
        "As 7d 7c 7h Kd",
        &[Rank::Seven, Rank::Ace, Rank::King, Rank::Seven],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_pair_kickers_higher() {
    let actual = PairLocator.locate(&cards("As 7d 7c Qh Kd")).unwrap().unwrap();
    assert_eq!(actual.ranks(), &[Rank::Seven, Rank::Ace, Rank::King, Rank::Queen]);
}

#[test]
fn test_pair_kickers_lower() {
    let actual = PairLocator.locate(&cards("2s 7d 7c 4h 5d")).unwrap().unwrap();
    assert_eq!(actual.ranks(), &[Rank::Seven, Rank::Five, Rank::Four, Rank::Two]);
}

#[test]
fn test_pair_not_enough_cards() {
    let res = PairLocator.locate(&cards("As Ad 7c 2h"));
    assert!(matches!(res, Err(RankError::NotEnoughCards { need: 5, got: 4 })));
    assert!(PairLocator.locate(&[]).is_err());
}

#[test]
fn test_pair_input_untouched() {
    let input = cards("2s 7d 7c 4h 5d");
    let copy = input.clone();
    PairLocator.locate(&input).unwrap();
    assert_eq!(input, copy);
}

// Two pair

#[test]
fn test_two_pair_none() {
    assert_eq!(TwoPairLocator.locate(&cards("As 7d 3c 2h Kd")).unwrap(), None);
}

#[test]
fn test_two_pair_five_cards() {
    let actual = TwoPairLocator.locate(&cards("As 7d 7c Kh Kd")).unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "As 7d 7c Kh Kd",
        &[Rank::King, Rank::Seven, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_seven_cards() {
    let actual = TwoPairLocator.locate(&cards("As Ts Tc 2h Kd 9d 9s")).unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "Tc Ts 9s 9d As",
        &[Rank::Ten, Rank::Nine, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_many_cards() {
    let actual = TwoPairLocator
        .locate(&cards("2s 2h 3h 3s 5h 6h 7h 8h 9h Th"))
        .unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "2s 2h 3h 3s Th",
        &[Rank::Three, Rank::Two, Rank::Ten],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_highest_pairs() {
    let actual = TwoPairLocator.locate(&cards("As 7d 7c 9h 9d 4h 4d")).unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "As 7d 7c 9h 9d",
        &[Rank::Nine, Rank::Seven, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_kicker_between_pairs() {
    let actual = TwoPairLocator.locate(&cards("Ah Ad Kc Qs Qd 3c 2h")).unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "Ah Ad Qs Qd Kc",
        &[Rank::Ace, Rank::Queen, Rank::King],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_third_pair_kicker() {
    let actual = TwoPairLocator
        .locate(&cards("Ah Ad Kc Ks Qd Qc 2h"))
        .unwrap()
        .unwrap();
    assert_eq!(actual.ranks(), &[Rank::Ace, Rank::King, Rank::Queen]);
}

#[test]
fn test_two_pair_from_four_of_a_kind() {
    let actual = TwoPairLocator.locate(&cards("As 7d 7c 7h 7s")).unwrap();
    let expected = hand(
        HandCategory::TwoPair,
        "As 7d 7c 7h 7s",
        &[Rank::Seven, Rank::Seven, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_two_pair_not_from_three_of_a_kind() {
    assert_eq!(TwoPairLocator.locate(&cards("As 7d 7c 7h 5d")).unwrap(), None);
}

// Three of a kind

#[test]
fn test_three_of_a_kind_none() {
    assert_eq!(ThreeOfAKindLocator.locate(&cards("As 7d 3c 2h Kd")).unwrap(), None);
}

#[test]
fn test_three_of_a_kind_five_cards() {
    let actual = ThreeOfAKindLocator.locate(&cards("As 7d 7c 7h Kd")).unwrap();
    let expected = hand(
        HandCategory::ThreeOfAKind,
        "As 7d 7c 7h Kd",
        &[Rank::Seven, Rank::Ace, Rank::King],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_three_of_a_kind_seven_cards() {
    let actual = ThreeOfAKindLocator.locate(&cards("As Ts Tc 2h Kd Td 9s")).unwrap();
    let expected = hand(
        HandCategory::ThreeOfAKind,
        "As Kd Td Ts Tc",
        &[Rank::Ten, Rank::Ace, Rank::King],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_three_of_a_kind_highest_wins() {
    let actual = ThreeOfAKindLocator
        .locate(&cards("2s 2h 2c 4h 7h 7s 7d Th"))
        .unwrap();
    let expected = hand(
        HandCategory::ThreeOfAKind,
        "7h 7s 7d Th 4h",
        &[Rank::Seven, Rank::Ten, Rank::Four],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_three_of_a_kind_from_four_of_a_kind() {
    let actual = ThreeOfAKindLocator.locate(&cards("As 7d 7c 7h 7s")).unwrap();
    let expected = hand(
        HandCategory::ThreeOfAKind,
        "As 7d 7c 7h 7s",
        &[Rank::Seven, Rank::Ace, Rank::Seven],
    );
    assert_eq!(actual, Some(expected));
}

// Four of a kind

#[test]
fn test_four_of_a_kind_none() {
    assert_eq!(FourOfAKindLocator.locate(&cards("As 7d 7c 7h Kd")).unwrap(), None);
}

#[test]
fn test_four_of_a_kind_five_cards() {
    let actual = FourOfAKindLocator.locate(&cards("As 7d 7c 7h 7s")).unwrap();
    let expected = hand(
        HandCategory::FourOfAKind,
        "As 7d 7c 7h 7s",
        &[Rank::Seven, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_four_of_a_kind_seven_cards() {
    let actual = FourOfAKindLocator.locate(&cards("As Ts Tc Th Kd Td 9s")).unwrap();
    let expected = hand(
        HandCategory::FourOfAKind,
        "As Th Td Ts Tc",
        &[Rank::Ten, Rank::Ace],
    );
    assert_eq!(actual, Some(expected));
}

#[test]
fn test_four_of_a_kind_highest_wins() {
    let actual = FourOfAKindLocator
        .locate(&cards("As Ts Tc Th Kd Td 9s Ad Ah Ac"))
        .unwrap();
    let expected = hand(
        HandCategory::FourOfAKind,
        "As Ad Ah Ac Kd",
        &[Rank::Ace, Rank::King],
    );
    assert_eq!(actual, Some(expected));
}
