//! Session integration tests.

use rankdraw::{
    BetError, Card, DECK_SIZE, DealError, Deck, DeckEmpty, GameState, Outcome, Rank, ReplaceError,
    Session, SessionOptions, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_deck_from_draws(session: &mut Session, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    session.deck = Deck::from_cards(deck);
}

fn stacked_session(options: SessionOptions, draws: &[Card]) -> Session {
    let mut session = Session::new(options, 1);
    set_deck_from_draws(&mut session, draws);
    session
}

#[test]
fn player_wins_the_whole_pot() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Jack),
        ],
    );

    session.start_round().unwrap();
    assert_eq!(
        session.player.cards(),
        &[card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::King)]
    );
    assert_eq!(
        session.dealer.cards(),
        &[card(Suit::Clubs, Rank::Nine), card(Suit::Diamonds, Rank::Jack)]
    );

    assert_eq!(session.place_bet(50), Ok(100));
    let result = session.showdown().unwrap();

    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.player_value, 23);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.pot, 100);
    assert_eq!(result.payout, 100);
    assert_eq!(session.state(), GameState::RoundOver);
}

#[test]
fn equal_totals_split_the_pot() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Queen),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );

    session.start_round().unwrap();
    assert_eq!(session.place_bet(10), Ok(20));
    let result = session.showdown().unwrap();

    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.payout, 10);
}

#[test]
fn dealer_wins_pays_nothing() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Diamonds, Rank::Ace),
        ],
    );

    session.start_round().unwrap();
    session.place_bet(7).unwrap();
    let result = session.showdown().unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.pot, 14);
    assert_eq!(result.payout, 0);
}

#[test]
fn zero_bet_is_allowed() {
    let mut session = Session::new(SessionOptions::default(), 3);
    session.start_round().unwrap();
    assert_eq!(session.place_bet(0), Ok(0));
    assert_eq!(session.showdown().unwrap().pot, 0);
}

#[test]
fn replacing_both_cards_draws_in_order() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::King),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Diamonds, Rank::Six),
        ],
    );

    session.start_round().unwrap();
    let before = session.cards_remaining();

    let report = session.replace_cards(&[1, 2]).unwrap();

    assert_eq!(
        session.player.cards(),
        &[card(Suit::Spades, Rank::King), card(Suit::Spades, Rank::Ace)]
    );
    assert_eq!(session.replacements_done(), 2);
    assert_eq!(session.cards_remaining(), before - 2);

    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[0].position, 1);
    assert_eq!(report.steps[0].discarded, card(Suit::Hearts, Rank::Two));
    assert_eq!(report.steps[0].drawn, card(Suit::Spades, Rank::King));
    assert_eq!(
        report.steps[0].hand.cards(),
        &[card(Suit::Spades, Rank::King), card(Suit::Hearts, Rank::Three)]
    );
    assert_eq!(report.steps[1].hand, session.player);
    assert!(!report.deck_exhausted);
    assert!(!report.quota_exhausted());
    assert_eq!(report.replacements_done, 2);
    assert_eq!(report.max_replacements, 3);
}

#[test]
fn out_of_range_batch_changes_nothing() {
    let mut session = Session::new(SessionOptions::default(), 9);
    session.start_round().unwrap();
    let hand = session.player.clone();
    let remaining = session.cards_remaining();

    assert_eq!(
        session.replace_cards(&[3]).unwrap_err(),
        ReplaceError::IndexOutOfRange {
            index: 3,
            hand_size: 2
        }
    );
    assert_eq!(
        session.replace_cards(&[1, 0]).unwrap_err(),
        ReplaceError::IndexOutOfRange {
            index: 0,
            hand_size: 2
        }
    );
    assert_eq!(
        session.replace_cards(&[]).unwrap_err(),
        ReplaceError::NoIndices
    );

    assert_eq!(session.player, hand);
    assert_eq!(session.replacements_done(), 0);
    assert_eq!(session.cards_remaining(), remaining);
}

#[test]
fn replacements_stop_at_the_quota() {
    let mut session = Session::new(SessionOptions::default(), 11);
    session.start_round().unwrap();

    let first = session.replace_cards(&[1, 2]).unwrap();
    assert_eq!(first.steps.len(), 2);

    let remaining = session.cards_remaining();
    let second = session.replace_cards(&[1, 2]).unwrap();
    assert_eq!(second.steps.len(), 1);
    assert_eq!(second.steps[0].position, 1);
    assert!(second.quota_exhausted());
    assert_eq!(session.replacements_done(), 3);
    assert_eq!(session.cards_remaining(), remaining - 1);

    assert!(!session.can_replace());
    assert_eq!(
        session.replace_cards(&[2]).unwrap_err(),
        ReplaceError::QuotaExhausted
    );
    assert_eq!(session.replacements_done(), 3);
}

#[test]
fn empty_deck_leaves_the_slot_alone() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Clubs, Rank::Five),
        ],
    );

    session.start_round().unwrap();
    let hand = session.player.clone();

    let report = session.replace_cards(&[1]).unwrap();
    assert!(report.deck_exhausted);
    assert!(report.steps.is_empty());
    assert_eq!(session.player, hand);
    assert_eq!(session.replacements_done(), 0);
}

#[test]
fn deck_running_out_mid_batch_keeps_earlier_replacements() {
    let mut session = stacked_session(
        SessionOptions::default(),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Ace),
        ],
    );

    session.start_round().unwrap();

    let report = session.replace_cards(&[2, 1]).unwrap();
    assert!(report.deck_exhausted);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(
        session.player.cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Ace)]
    );
    assert_eq!(session.replacements_done(), 1);
    assert!(session.deck.is_empty());
}

#[test]
fn operations_out_of_phase_are_rejected() {
    let mut session = Session::new(SessionOptions::default(), 5);
    assert_eq!(session.state(), GameState::Idle);
    assert!(!session.can_replace());

    assert_eq!(
        session.replace_cards(&[1]).unwrap_err(),
        ReplaceError::InvalidState
    );
    assert_eq!(session.place_bet(5).unwrap_err(), BetError::InvalidState);
    assert_eq!(session.showdown().unwrap_err(), ShowdownError::InvalidState);

    session.start_round().unwrap();
    assert_eq!(session.state(), GameState::Drawing);
    assert_eq!(session.start_round().unwrap_err(), DealError::InvalidState);
    assert_eq!(session.showdown().unwrap_err(), ShowdownError::InvalidState);

    session.place_bet(5).unwrap();
    assert_eq!(session.state(), GameState::Showdown);
    assert_eq!(
        session.replace_cards(&[1]).unwrap_err(),
        ReplaceError::InvalidState
    );
    assert_eq!(session.place_bet(5).unwrap_err(), BetError::InvalidState);
    assert_eq!(session.start_round().unwrap_err(), DealError::InvalidState);

    session.showdown().unwrap();
    assert_eq!(session.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn oversized_bet_is_rejected_without_ending_the_draw() {
    let mut session = Session::new(SessionOptions::default(), 5);
    session.start_round().unwrap();

    assert_eq!(session.place_bet(u64::MAX).unwrap_err(), BetError::PotOverflow);
    assert_eq!(session.state(), GameState::Drawing);
    assert_eq!(session.place_bet(u64::MAX / 2), Ok(u64::MAX - 1));
}

#[test]
fn rounds_reset_deck_and_counter_by_default() {
    let mut session = Session::new(SessionOptions::default(), 21);

    session.start_round().unwrap();
    session.replace_cards(&[1, 2]).unwrap();
    session.replace_cards(&[1]).unwrap();
    session.place_bet(1).unwrap();
    session.showdown().unwrap();
    assert_eq!(session.cards_remaining(), DECK_SIZE - 7);

    session.start_round().unwrap();
    assert_eq!(session.rounds(), 2);
    assert_eq!(session.replacements_done(), 0);
    assert!(session.can_replace());
    assert_eq!(session.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(session.pot(), 0);
}

#[test]
fn carry_over_keeps_deck_and_counter() {
    let mut session = Session::new(SessionOptions::default().with_carry_over(true), 21);

    session.start_round().unwrap();
    session.replace_cards(&[1, 2]).unwrap();
    session.place_bet(1).unwrap();
    session.showdown().unwrap();

    session.start_round().unwrap();
    assert_eq!(session.replacements_done(), 2);
    assert_eq!(session.cards_remaining(), DECK_SIZE - 4 - 2 - 4);

    session.replace_cards(&[2]).unwrap();
    assert!(!session.can_replace());
    session.place_bet(1).unwrap();
    session.showdown().unwrap();

    session.start_round().unwrap();
    assert!(!session.can_replace());
}

#[test]
fn deal_fails_when_the_deck_runs_out() {
    let mut session = stacked_session(
        SessionOptions::default().with_carry_over(true),
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Four),
        ],
    );

    assert_eq!(
        session.start_round().unwrap_err(),
        DealError::DeckEmpty(DeckEmpty)
    );
    assert_eq!(session.player.len(), 2);
    assert_eq!(session.dealer.len(), 1);
    assert_eq!(session.state(), GameState::RoundOver);
    assert!(!session.can_replace());

    assert_eq!(
        session.start_round().unwrap_err(),
        DealError::DeckEmpty(DeckEmpty)
    );
    assert!(session.player.is_empty());
}

#[test]
fn hand_size_option_controls_the_deal() {
    let mut session = Session::new(SessionOptions::default().with_hand_size(5), 2);
    session.start_round().unwrap();

    assert_eq!(session.player.len(), 5);
    assert_eq!(session.dealer.len(), 5);
    assert_eq!(session.cards_remaining(), DECK_SIZE - 10);
    assert!(session.replace_cards(&[5]).is_ok());
}

#[test]
fn same_seed_same_deal() {
    let mut first = Session::new(SessionOptions::default(), 42);
    let mut second = Session::new(SessionOptions::default(), 42);
    assert_eq!(first.deck, second.deck);

    first.start_round().unwrap();
    second.start_round().unwrap();
    assert_eq!(first.player, second.player);
    assert_eq!(first.dealer, second.dealer);

    assert_ne!(
        Session::new(SessionOptions::default(), 42).deck,
        Session::new(SessionOptions::default(), 43).deck
    );
}
