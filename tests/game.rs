//! Table integration tests.

#![expect(clippy::unwrap_used, reason = "tests")]

use std::collections::HashSet;

use bjcoach::{
    ActionError, Card, DECK_SIZE, Deck, DeckError, Feedback, Hand, Intent, Outcome, Phase,
    QuizError, Rationale, Recommendation, StartError, Suit, Table, TableOptions, Tally,
    bust_probability, hand_value, outcome_of, recommend,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn ranks(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Clubs, rank)).collect()
}

fn table() -> Table<Tally> {
    Table::new(TableOptions::default(), 42, Tally::new())
}

/// Starts a round whose cards come off in `draws` order: two player cards,
/// the dealer's hole card, the dealer's up-card, then later draws.
fn stacked(table: &mut Table<Tally>, draws: &[Card]) -> Phase {
    table.start_with_deck(Deck::from_draws(draws)).unwrap()
}

#[test]
fn hand_values_count_aces_soft_then_hard() {
    assert_eq!(hand_value(&ranks(&[1, 5])), 16);
    assert_eq!(hand_value(&ranks(&[1, 1])), 12);
    assert_eq!(hand_value(&ranks(&[1, 1, 9])), 21);
    assert_eq!(hand_value(&ranks(&[13, 12, 5])), 25);
    assert_eq!(hand_value(&ranks(&[1, 1, 1, 1])), 14);
    assert_eq!(hand_value(&ranks(&[11, 12])), 20);
    assert_eq!(hand_value(&[]), 0);

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 6));
    assert!(hand.is_soft());
    hand.add_card(card(Suit::Spades, 10));
    assert_eq!(hand.value(), 17);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn card_presentation() {
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Clubs, 12).to_string(), "Q♣");
    assert!(card(Suit::Diamonds, 3).is_red());
    assert!(!card(Suit::Clubs, 3).is_red());
}

#[test]
fn built_deck_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..20 {
        let deck = Deck::build(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }
}

#[test]
fn ordered_deck_is_suit_major() {
    let deck = Deck::ordered();
    assert_eq!(deck.cards()[0], card(Suit::Spades, 1));
    assert_eq!(deck.cards()[12], card(Suit::Spades, 13));
    assert_eq!(deck.cards()[13], card(Suit::Hearts, 1));
    assert_eq!(deck.cards()[51], card(Suit::Clubs, 13));
}

#[test]
fn drawing_from_empty_deck_fails() {
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 2)]);
    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, 2));
    assert_eq!(deck.draw().unwrap_err(), DeckError::EmptyDeck);
    assert!(deck.is_empty());
}

#[test]
fn bust_probability_counts_remaining_cards() {
    let hand = ranks(&[10, 6]);
    let remaining = ranks(&[1, 5, 6, 10, 13]);
    let odds = bust_probability(&hand, &remaining);
    assert_eq!((odds.busting, odds.remaining), (3, 5));
    assert_eq!(odds.percent(), 60);

    let empty = bust_probability(&hand, &[]);
    assert!(empty.is_zero());
    assert_eq!(empty.as_f64(), 0.0);
    assert_eq!(empty.to_string(), "0%");

    let safe = bust_probability(&ranks(&[5, 6]), &remaining);
    assert!(safe.is_zero());

    let doomed = bust_probability(&ranks(&[10, 10]), &ranks(&[2, 3]));
    assert!(doomed.is_certain());
    assert_eq!(doomed.as_f64(), 1.0);
}

#[test]
fn recommendation_bands() {
    for rank in 1..=13 {
        assert_eq!(recommend(10, rank).recommendation, Recommendation::Draw);
        assert_eq!(recommend(11, rank).rationale, Rationale::CannotBust);
        assert_eq!(recommend(18, rank).recommendation, Recommendation::Stop);
        assert_eq!(recommend(17, rank).rationale, Rationale::HighBustRisk);
    }

    assert_eq!(recommend(13, 9).recommendation, Recommendation::Draw);
    assert_eq!(recommend(13, 4).recommendation, Recommendation::Stop);
    assert_eq!(recommend(12, 7).rationale, Rationale::StrongDealer);
    assert_eq!(recommend(16, 6).rationale, Rationale::WeakDealer);
    // Ace and face cards count as strong up-cards.
    assert_eq!(recommend(15, 1).recommendation, Recommendation::Draw);
    assert_eq!(recommend(15, 13).recommendation, Recommendation::Draw);
}

#[test]
fn outcome_settlement_order() {
    assert_eq!(outcome_of(23, 25), Outcome::PlayerBust);
    assert_eq!(outcome_of(18, 22), Outcome::DealerBust);
    assert_eq!(outcome_of(20, 19), Outcome::PlayerWin);
    assert_eq!(outcome_of(17, 20), Outcome::PlayerLose);
    assert_eq!(outcome_of(19, 19), Outcome::Push);

    assert_eq!(Outcome::PlayerBust.feedback(), Feedback::Error);
    assert_eq!(Outcome::DealerBust.feedback(), Feedback::Success);
    assert_eq!(Outcome::Push.feedback(), Feedback::Warning);
    assert_eq!(Outcome::PlayerLose.feedback(), Feedback::Warning);
}

#[test]
fn phase_guards() {
    assert!(Phase::Idle.accepts(Intent::Start));
    assert!(Phase::Settled.accepts(Intent::Start));
    assert!(!Phase::PlayerTurn.accepts(Intent::Start));
    assert!(!Phase::DealerTurn.accepts(Intent::Start));
    assert!(Phase::PlayerTurn.accepts(Intent::Hit));
    assert!(!Phase::Settled.accepts(Intent::Stand));
    assert!(!Phase::Idle.accepts(Intent::QuizAnswer));
}

#[test]
fn fresh_round_deals_two_cards_each() {
    let mut table = table();
    let phase = table.start().unwrap();

    assert_eq!(table.player().len(), 2);
    assert_eq!(table.dealer().len(), 2);
    assert_eq!(table.remaining(), DECK_SIZE - 4);

    if phase == Phase::PlayerTurn {
        assert!(!table.dealer().is_hole_revealed());
        let odds = table.bust_probability().unwrap();
        assert_eq!(odds.remaining, DECK_SIZE - 4);
    } else {
        assert_eq!(phase, Phase::Settled);
        assert!(table.result().unwrap().natural);
    }
}

#[test]
fn same_seed_deals_same_round() {
    let mut first = table();
    let mut second = table();
    first.start().unwrap();
    second.start().unwrap();

    assert_eq!(first.player(), second.player());
    assert_eq!(first.dealer(), second.dealer());
}

#[test]
fn stand_then_dealer_draws_to_seventeen() {
    let mut table = table();
    let phase = stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 7),   // player
            card(Suit::Clubs, 5),    // dealer hole
            card(Suit::Diamonds, 6), // dealer up
            card(Suit::Hearts, 9),   // dealer draw
        ],
    );
    assert_eq!(phase, Phase::PlayerTurn);
    assert_eq!(table.dealer().visible_value(), 6);
    assert_eq!(table.player().value(), 17);

    let result = table.stand().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerLose);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.dealer_drawn, 1);
    assert!(!result.natural);
    assert_eq!(table.phase(), Phase::Settled);
    assert!(table.dealer().is_hole_revealed());
    assert_eq!(table.stats().losses, 1);
}

#[test]
fn dealer_keeps_drawing_below_seventeen() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 2),    // dealer hole
            card(Suit::Diamonds, 3), // dealer up
            card(Suit::Hearts, 4),
            card(Suit::Hearts, 5),
            card(Suit::Hearts, 3),
            card(Suit::Hearts, 10),
        ],
    );

    let result = table.stand().unwrap();
    assert_eq!(result.dealer_drawn, 3);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(table.remaining(), 1);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 1),    // dealer hole
            card(Suit::Diamonds, 6), // dealer up
            card(Suit::Hearts, 4),
        ],
    );

    let result = table.stand().unwrap();
    assert_eq!(result.dealer_drawn, 0);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWin);
}

#[test]
fn dealer_bust_pays_player() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),   // dealer hole
            card(Suit::Diamonds, 6), // dealer up
            card(Suit::Hearts, 13),
        ],
    );

    let result = table.stand().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(table.stats().wins, 1);
}

#[test]
fn player_bust_settles_without_dealer_draws() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Diamonds, 8), // player hit
            card(Suit::Hearts, 2),
        ],
    );

    let drawn = table.hit().unwrap();
    assert_eq!(drawn, card(Suit::Diamonds, 8));
    assert_eq!(table.phase(), Phase::Settled);

    let result = *table.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.player_value, 23);
    assert_eq!(result.dealer_drawn, 0);
    assert!(table.dealer().is_hole_revealed());
    assert_eq!(table.stats().busts, 1);
    assert_eq!(table.stats().rounds, 1);
}

#[test]
fn player_bust_loses_even_when_dealer_plays_out() {
    let options = TableOptions::default().with_dealer_draws_after_player_bust(true);
    let mut table = Table::new(options, 1, Tally::new());
    table
        .start_with_deck(Deck::from_draws(&[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Diamonds, 8), // player hit
            card(Suit::Hearts, 10),  // dealer draw
        ]))
        .unwrap();

    table.hit().unwrap();
    let result = table.result().unwrap();
    assert_eq!(result.dealer_drawn, 1);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::PlayerBust);
}

#[test]
fn hitting_to_twenty_one_keeps_the_turn() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Diamonds, 6),
        ],
    );

    table.hit().unwrap();
    assert_eq!(table.player().value(), 21);
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(
        table.advice().unwrap().recommendation,
        Recommendation::Stop
    );
}

#[test]
fn player_natural_settles_immediately() {
    let mut table = table();
    let phase = stacked(
        &mut table,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
            card(Suit::Diamonds, 4),
        ],
    );

    assert_eq!(phase, Phase::Settled);
    let result = table.result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert!(result.natural);
    assert_eq!(result.dealer_drawn, 0);
    assert!(table.dealer().is_hole_revealed());
    assert_eq!(table.remaining(), 1);
    assert_eq!(table.stats().wins, 1);
}

#[test]
fn dealer_natural_beats_player() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 12),
        ],
    );

    assert_eq!(table.result().unwrap().outcome, Outcome::PlayerLose);
}

#[test]
fn double_natural_is_a_push() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 11),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 10),
        ],
    );

    assert_eq!(table.result().unwrap().outcome, Outcome::Push);
    assert_eq!(table.stats().pushes, 1);
}

#[test]
fn advice_uses_dealer_up_card() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 3),
            card(Suit::Clubs, 4),    // dealer hole
            card(Suit::Diamonds, 9), // dealer up
            card(Suit::Diamonds, 2),
        ],
    );

    assert_eq!(table.dealer().hole_card(), Some(&card(Suit::Clubs, 4)));
    assert_eq!(table.dealer().up_card(), Some(&card(Suit::Diamonds, 9)));
    assert_eq!(table.dealer().visible_value(), 9);

    let advice = table.advice().unwrap();
    assert_eq!(advice.recommendation, Recommendation::Draw);
    assert_eq!(advice.rationale, Rationale::StrongDealer);

    let commentary = table.commentary().unwrap().to_string();
    assert_eq!(
        commentary,
        "At 13 the decision depends on the dealer's card and the bust risk (0%)."
    );
}

#[test]
fn bust_odds_exclude_the_hole_card() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 13),   // dealer hole, would bust the player
            card(Suit::Diamonds, 5), // dealer up
            card(Suit::Diamonds, 2),
            card(Suit::Hearts, 3),
        ],
    );

    let odds = table.bust_probability().unwrap();
    assert_eq!((odds.busting, odds.remaining), (1, 2));
}

#[test]
fn quiz_grades_against_advice() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 4),
            card(Suit::Clubs, 2),    // dealer hole
            card(Suit::Diamonds, 8), // dealer up
            card(Suit::Diamonds, 2),
        ],
    );

    assert!(table.submit_quiz_answer(Recommendation::Draw).unwrap());
    assert!(!table.submit_quiz_answer(Recommendation::Stop).unwrap());
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(table.player().len(), 2);

    let stats = table.stats();
    assert_eq!(stats.quiz_answered, 2);
    assert_eq!(stats.quiz_correct, 1);
    assert_eq!(stats.quiz_accuracy(), Some(0.5));
    assert_eq!(stats.rounds, 0);
}

#[test]
fn quiz_rejected_when_disabled_or_out_of_turn() {
    let mut table = table();
    assert_eq!(
        table.submit_quiz_answer(Recommendation::Draw).unwrap_err(),
        QuizError::InvalidState
    );

    let options = TableOptions::default().with_quiz(false);
    let mut quiet = Table::new(options, 9, Tally::new());
    assert_eq!(
        quiet.submit_quiz_answer(Recommendation::Draw).unwrap_err(),
        QuizError::Disabled
    );
    assert_eq!(quiet.stats().quiz_answered, 0);
}

#[test]
fn out_of_order_intents_change_nothing() {
    let mut table = table();
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.phase(), Phase::Idle);
    assert!(table.advice().is_none());
    assert!(table.bust_probability().is_none());

    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 4),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 8),
            card(Suit::Diamonds, 9),
        ],
    );
    let player = table.player().clone();
    let remaining = table.remaining();

    assert_eq!(table.start().unwrap_err(), StartError::InvalidState);
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(table.player(), &player);
    assert_eq!(table.remaining(), remaining);

    table.stand().unwrap();
    let result = *table.result().unwrap();
    assert_eq!(table.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.result(), Some(&result));
    assert_eq!(table.stats().rounds, 1);
}

#[test]
fn short_deck_is_rejected_before_dealing() {
    let mut table = table();
    let err = table
        .start_with_deck(Deck::from_draws(&ranks(&[2, 3, 4])))
        .unwrap_err();
    assert_eq!(err, StartError::NotEnoughCards);
    assert_eq!(table.phase(), Phase::Idle);
    assert!(table.player().is_empty());
}

#[test]
fn exhausted_deck_during_dealer_turn_needs_clear() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 3),
        ],
    );

    assert_eq!(
        table.stand().unwrap_err(),
        ActionError::Deck(DeckError::EmptyDeck)
    );
    assert_eq!(table.phase(), Phase::DealerTurn);
    assert!(table.phase().is_live());
    assert_eq!(table.start().unwrap_err(), StartError::InvalidState);
    assert_eq!(table.stats().rounds, 0);

    table.clear_round();
    assert_eq!(table.phase(), Phase::Idle);
    assert!(table.start().is_ok());
}

#[test]
fn new_round_clears_previous_result() {
    let mut table = table();
    stacked(
        &mut table,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
        ],
    );
    assert!(table.result().is_some());

    stacked(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 4),
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 8),
        ],
    );
    assert!(table.result().is_none());
    assert_eq!(table.player().value(), 14);
}

#[test]
fn tally_counts_and_rates() {
    use bjcoach::StatsSink;

    let mut tally = Tally::new();
    assert_eq!(tally.win_rate(), None);

    tally.record(Outcome::PlayerWin);
    tally.record(Outcome::DealerBust);
    tally.record(Outcome::PlayerBust);
    tally.record(Outcome::Push);

    assert_eq!(tally.rounds, 4);
    assert_eq!(tally.wins, 2);
    assert_eq!(tally.losses, 1);
    assert_eq!(tally.busts, 1);
    assert_eq!(tally.pushes, 1);
    assert_eq!(tally.win_rate(), Some(0.5));
}

#[test]
fn borrowed_sink_receives_events() {
    let mut tally = Tally::new();
    {
        let mut table = Table::new(TableOptions::default(), 5, &mut tally);
        table
            .start_with_deck(Deck::from_draws(&[
                card(Suit::Spades, 10),
                card(Suit::Hearts, 9),
                card(Suit::Clubs, 10),
                card(Suit::Diamonds, 8),
            ]))
            .unwrap();
        table.submit_quiz_answer(Recommendation::Stop).unwrap();
        table.stand().unwrap();
    }

    assert_eq!(tally.rounds, 1);
    assert_eq!(tally.wins, 1);
    assert_eq!(tally.quiz_correct, 1);
}
