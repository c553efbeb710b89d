use super::*;

fn card(rank: u8, face_up: bool) -> Card {
    Card {
        suit: Suit::Spades,
        rank,
        face_up,
    }
}

fn king_to_ace() -> Vec<Card> {
    (1..=13).rev().map(|rank| card(rank, true)).collect()
}

#[test]
fn descending_run_requires_face_up_adjacent_ranks() {
    assert!(!rules::is_descending_run(&[]));
    assert!(rules::is_descending_run(&[card(9, true)]));
    assert!(!rules::is_descending_run(&[card(9, false)]));
    assert!(rules::is_descending_run(&[
        card(9, true),
        card(8, true),
        card(7, true),
    ]));
    assert!(!rules::is_descending_run(&[card(9, true), card(7, true)]));
    assert!(!rules::is_descending_run(&[card(9, true), card(8, false)]));
}

#[test]
fn take_run_holds_only_for_face_up_descending_suffixes() {
    let column = vec![card(9, false), card(8, true), card(7, true)];

    assert!(!rules::can_take_run(&column, 0));
    assert!(rules::can_take_run(&column, 1));
    assert!(rules::can_take_run(&column, 2));
    assert!(!rules::can_take_run(&column, 3));
    assert!(!rules::can_take_run(&[], 0));

    let gapped = vec![card(9, true), card(7, true)];
    assert!(!rules::can_take_run(&gapped, 0));
    assert!(rules::can_take_run(&gapped, 1));
}

#[test]
fn placement_ignores_suit_and_accepts_empty_columns() {
    assert!(rules::can_place(None, card(13, true)));
    assert!(rules::can_place(Some(&card(9, true)), card(8, true)));
    assert!(!rules::can_place(Some(&card(9, true)), card(7, true)));
    assert!(!rules::can_place(Some(&card(9, false)), card(8, true)));

    let heart_top = Card {
        suit: Suit::Hearts,
        rank: 9,
        face_up: true,
    };
    assert!(rules::can_place(Some(&heart_top), card(8, true)));
}

#[test]
fn complete_window_matches_only_trailing_king_to_ace_run() {
    let exact = king_to_ace();
    assert_eq!(rules::complete_seq_window(&exact), Some(0..13));

    let mut buried = vec![card(9, true)];
    buried.extend(king_to_ace());
    assert_eq!(rules::complete_seq_window(&buried), Some(1..14));

    let mut hidden = king_to_ace();
    hidden[4].face_up = false;
    assert_eq!(rules::complete_seq_window(&hidden), None);

    assert_eq!(rules::complete_seq_window(&[card(13, true)]), None);

    let mut shifted = vec![card(5, true)];
    shifted.extend(king_to_ace());
    shifted.pop();
    assert_eq!(rules::complete_seq_window(&shifted), None);
}

#[test]
fn rank_labels_are_correct() {
    assert_eq!(rank_label(1), "A");
    assert_eq!(rank_label(11), "J");
    assert_eq!(rank_label(12), "Q");
    assert_eq!(rank_label(13), "K");
    assert_eq!(rank_label(99), "?");
    assert_eq!(card(12, true).label(), "Q♠");
}

#[test]
fn suit_symbols_round_trip() {
    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
        assert_eq!(Suit::from_symbol(suit.symbol()), Some(suit));
    }
    assert_eq!(Suit::from_symbol("x"), None);
    assert_eq!(Suit::default(), Suit::Spades);
}

#[test]
fn seeded_games_are_deterministic() {
    let game_a = GameState::new_with_seed(42);
    let game_b = GameState::new_with_seed(42);
    let game_c = GameState::new_with_seed(43);

    assert_eq!(game_a, game_b);
    assert_ne!(game_a, game_c);
}

#[test]
fn setup_accounts_for_all_104_cards() {
    let game = GameState::new_with_seed(7);
    let tableau_count: usize = game.tableau().iter().map(Vec::len).sum();

    assert_eq!(tableau_count, 54);
    assert_eq!(game.stock_len(), 5);
    assert_eq!(tableau_count + game.stock_len() * 10, 104);
    assert_eq!(game.completed_runs(), 0);
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.score(), 0);
}

#[test]
fn setup_has_expected_column_geometry() {
    let game = GameState::new_with_seed(99);
    for col in 0..10 {
        let pile = &game.tableau()[col];
        let expected = if col < 4 { 6 } else { 5 };
        assert_eq!(pile.len(), expected);
        assert_eq!(
            pile.iter().filter(|card| card.face_up).count(),
            1,
            "column {col} should have exactly one face-up card"
        );
        assert!(pile.last().is_some_and(|card| card.face_up));
    }
    for round in game.stock() {
        assert!(round.iter().all(|card| !card.face_up));
    }
}

#[test]
fn snapshots_are_independent_of_live_state() {
    let mut game = GameState::new_with_seed(5);
    let snapshot = game.snapshot();
    let reference = game.snapshot();

    game.columns[0].clear();
    game.completed_runs = 3;

    assert_eq!(snapshot, reference);
    assert_ne!(game.snapshot(), reference);

    game.restore(snapshot);
    assert_eq!(game.snapshot(), reference);
}

#[test]
fn new_state_is_empty_with_no_history() {
    let game = GameState::default();
    assert!(game.tableau().iter().all(Vec::is_empty));
    assert_eq!(game.stock_len(), 0);
    assert!(game.undo_stack.is_empty());
    assert!(game.redo_stack.is_empty());
}
