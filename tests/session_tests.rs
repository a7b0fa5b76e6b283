//! End-to-end scenarios through the `GameSession` API.

use klondike_engine::{
    build_deck, Board, BoardSnapshot, Card, CardRef, GameConfig, GameSession, InvalidMove,
    MoveRejected, PileRef, Rank, Suit, N_FOUNDATIONS, N_TABLEAU,
};

fn up(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit).face_up()
}

fn empty_tableau() -> [Vec<Card>; N_TABLEAU] {
    std::array::from_fn(|_| Vec::new())
}

fn empty_foundations() -> [Vec<Card>; N_FOUNDATIONS] {
    std::array::from_fn(|_| Vec::new())
}

/// Cards from a fresh deck not already placed anywhere.
fn remaining(placed: &[Card]) -> Vec<Card> {
    build_deck()
        .into_iter()
        .filter(|c| !placed.iter().any(|p| p.same_identity(c)))
        .collect()
}

/// Board with the given tableau and waste; every other card in the stock.
fn board_with(tableau: [Vec<Card>; N_TABLEAU], waste: Vec<Card>) -> Board {
    let placed: Vec<Card> = tableau.iter().flatten().chain(&waste).copied().collect();
    Board::from_parts(remaining(&placed), waste, empty_foundations(), tableau).unwrap()
}

/// Every (source, target) pair the session would currently accept.
fn legal_moves(session: &GameSession) -> Vec<(CardRef, PileRef)> {
    let board = session.board();
    let mut sources = Vec::new();
    if !board.waste().is_empty() {
        sources.push(CardRef::waste(board.waste().len() - 1));
    }
    for (pile, cards) in board.tableau().iter().enumerate() {
        sources.extend((0..cards.len()).map(|index| CardRef::tableau(pile, index)));
    }

    let targets: Vec<PileRef> = (0..N_FOUNDATIONS)
        .map(PileRef::foundation)
        .chain((0..N_TABLEAU).map(PileRef::tableau))
        .collect();

    sources
        .into_iter()
        .flat_map(|source| targets.iter().map(move |&target| (source, target)))
        .filter(|&(source, target)| session.can_move(source, target))
        .collect()
}

#[test]
fn test_deal_shape() {
    for seed in [0, 1, 42, 9999] {
        let mut session = GameSession::with_seed(seed);
        let snap = session.new_game();
        let board = &snap.board;

        for (i, pile) in board.tableau().iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
            let (top, rest) = pile.split_last().unwrap();
            assert!(top.is_face_up());
            assert!(rest.iter().all(|c| !c.is_face_up()));
        }
        assert_eq!(board.stock().len(), 24);
        assert!(board.stock().iter().all(|c| !c.is_face_up()));
        assert!(board.waste().is_empty());
        assert!(board.foundations().iter().all(Vec::is_empty));
        assert_eq!(board.check_invariants(), Ok(()));
        assert_eq!((snap.score, snap.move_count), (0, 0));
    }
}

#[test]
fn test_seeded_deals_repeat() {
    let a = GameSession::with_seed(123);
    let b = GameSession::with_seed(123);
    let c = GameSession::with_seed(124);
    assert_eq!(a.board(), b.board());
    assert_ne!(a.board(), c.board());
}

#[test]
fn test_draw_all_then_recycle() {
    let mut session = GameSession::with_seed(2024);
    let mut drawn = Vec::new();
    for _ in 0..24 {
        let snap = session.draw_stock().unwrap();
        drawn.push(*snap.board.waste().last().unwrap());
    }
    assert!(session.board().stock().is_empty());
    let waste_before: Vec<Card> = session.board().waste().to_vec();
    assert_eq!(waste_before, drawn);

    let snap = session.draw_stock().unwrap();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.move_count, 25);
    assert!(snap.board.waste().is_empty());

    let expected: Vec<Card> = waste_before.iter().rev().map(|c| c.face_down()).collect();
    assert_eq!(snap.board.stock(), expected.as_slice());

    // Recycling restores the original stock order, so the first draw repeats.
    let snap = session.draw_stock().unwrap();
    assert_eq!(snap.board.waste(), &[drawn[0]]);
}

#[test]
fn test_empty_stock_and_waste() {
    let mut tableau = empty_tableau();
    let all = build_deck();
    for (i, card) in all.iter().enumerate() {
        tableau[i % N_TABLEAU].push(*card);
    }
    for pile in tableau.iter_mut() {
        if let Some(top) = pile.last_mut() {
            top.set_face_up(true);
        }
    }
    let board = Board::from_parts(Vec::new(), Vec::new(), empty_foundations(), tableau).unwrap();
    let mut session = GameSession::from_board(board, GameConfig::default()).unwrap();

    assert_eq!(
        session.draw_stock(),
        Err(MoveRejected::EmptySource(klondike_engine::Zone::Stock))
    );
    assert_eq!(session.history_len(), 0);
}

#[test]
fn test_spade_foundation_needs_ace_first() {
    let mut tableau = empty_tableau();
    tableau[0] = vec![up(Rank::Ace, Suit::Spade)];
    tableau[1] = vec![up(Rank::Two, Suit::Spade)];
    let mut session = GameSession::from_board(board_with(tableau, Vec::new()), GameConfig::default()).unwrap();

    let spades = PileRef::foundation(Suit::Spade.foundation_index());
    assert_eq!(spades, PileRef::foundation(0));

    let err = session.attempt_move(CardRef::tableau(1, 0), spades).unwrap_err();
    assert_eq!(
        err,
        MoveRejected::InvalidMove(InvalidMove::NeedsAce(up(Rank::Two, Suit::Spade)))
    );
    assert_eq!(session.move_count(), 0);

    let snap = session.attempt_move(CardRef::tableau(0, 0), spades).unwrap();
    assert_eq!(snap.board.foundation(0), Some(&[up(Rank::Ace, Suit::Spade)][..]));

    let snap = session.attempt_move(CardRef::tableau(1, 0), spades).unwrap();
    assert_eq!(
        snap.board.foundation(0),
        Some(&[up(Rank::Ace, Suit::Spade), up(Rank::Two, Suit::Spade)][..])
    );
    assert_eq!(snap.score, 20);
}

#[test]
fn test_foundation_rejects_wrong_suit_and_runs() {
    let mut tableau = empty_tableau();
    tableau[0] = vec![up(Rank::Ace, Suit::Heart)];
    tableau[1] = vec![up(Rank::Three, Suit::Club), up(Rank::Two, Suit::Heart)];
    let mut session = GameSession::from_board(board_with(tableau, Vec::new()), GameConfig::default()).unwrap();

    let err = session.attempt_move(CardRef::tableau(0, 0), PileRef::foundation(0));
    assert!(matches!(
        err,
        Err(MoveRejected::InvalidMove(InvalidMove::WrongSuit { foundation: 0, .. }))
    ));

    session.auto_send_to_foundation(CardRef::tableau(0, 0)).unwrap();
    let err = session.attempt_move(CardRef::tableau(1, 0), PileRef::foundation(1));
    assert!(matches!(
        err,
        Err(MoveRejected::InvalidMove(InvalidMove::RunToFoundation { len: 2 }))
    ));
}

#[test]
fn test_king_to_empty_pile_and_run_move() {
    let mut tableau = empty_tableau();
    tableau[0] = vec![
        Card::new(Rank::Four, Suit::Diamond),
        up(Rank::King, Suit::Heart),
        up(Rank::Queen, Suit::Club),
    ];
    tableau[1] = vec![up(Rank::Jack, Suit::Diamond)];
    let mut session = GameSession::from_board(board_with(tableau, Vec::new()), GameConfig::default()).unwrap();

    // Only a King may open an empty pile.
    assert!(!session.can_move(CardRef::tableau(0, 2), PileRef::tableau(2)));
    assert!(session.can_move(CardRef::tableau(0, 1), PileRef::tableau(2)));
    assert_eq!(session.history_len(), 0);

    let snap = session.attempt_move(CardRef::tableau(1, 0), PileRef::tableau(0)).unwrap();
    assert_eq!(snap.board.tableau()[0].len(), 4);
    assert_eq!(snap.score, 0);

    // Moving K-Q-J uncovers the Four, which turns up and scores.
    let snap = session.attempt_move(CardRef::tableau(0, 1), PileRef::tableau(2)).unwrap();
    assert_eq!(snap.board.tableau()[2].len(), 3);
    assert_eq!(snap.board.tableau()[0], vec![up(Rank::Four, Suit::Diamond)]);
    assert_eq!(snap.score, 5);
    assert_eq!(snap.board.check_invariants(), Ok(()));
}

#[test]
fn test_face_down_card_cannot_move() {
    let mut session = GameSession::with_seed(77);
    let err = session.attempt_move(CardRef::tableau(6, 0), PileRef::tableau(0));
    assert_eq!(
        err,
        Err(MoveRejected::InvalidMove(InvalidMove::FaceDownCard(CardRef::tableau(6, 0))))
    );
}

#[test]
fn test_one_full_suit_is_not_a_win() {
    let mut foundations = empty_foundations();
    foundations[0] = Rank::ALL[..12].iter().map(|&r| up(r, Suit::Spade)).collect();
    let mut tableau = empty_tableau();
    tableau[3] = vec![up(Rank::King, Suit::Spade)];

    let placed: Vec<Card> = foundations.iter().flatten().chain(tableau.iter().flatten()).copied().collect();
    let board = Board::from_parts(remaining(&placed), Vec::new(), foundations, tableau).unwrap();
    let mut session = GameSession::from_board(board, GameConfig::default()).unwrap();

    let snap = session.auto_send_to_foundation(CardRef::tableau(3, 0)).unwrap();
    assert_eq!(snap.board.foundation(0).map(<[Card]>::len), Some(13));
    assert!(!snap.is_won());
    assert!(!session.is_won());
}

#[test]
fn test_completing_all_foundations_wins() {
    let mut foundations = empty_foundations();
    for suit in Suit::ALL {
        let cut = if suit == Suit::Diamond { 10 } else { 13 };
        foundations[suit.foundation_index()] = Rank::ALL[..cut].iter().map(|&r| up(r, suit)).collect();
    }
    // J, Q, K of diamonds: King buried face-down, Queen on top of tableau,
    // Jack in the waste.
    let mut tableau = empty_tableau();
    tableau[0] = vec![Card::new(Rank::King, Suit::Diamond), up(Rank::Queen, Suit::Diamond)];
    let waste = vec![up(Rank::Jack, Suit::Diamond)];
    let board = Board::from_parts(Vec::new(), waste, foundations, tableau).unwrap();
    let mut session = GameSession::from_board(board, GameConfig::default()).unwrap();

    session.auto_send_to_foundation(CardRef::waste(0)).unwrap();
    assert!(!session.is_won());
    let snap = session.auto_send_to_foundation(CardRef::tableau(0, 1)).unwrap();
    assert!(!snap.is_won());
    // The King was auto-flipped: 10 + (5 + 10).
    assert_eq!(snap.score, 25);

    let snap = session.auto_send_to_foundation(CardRef::tableau(0, 0)).unwrap();
    assert!(snap.is_won());
    assert!(session.is_won());
    assert_eq!(session.summary().move_count, 3);

    assert_eq!(session.draw_stock(), Err(MoveRejected::IllegalStateTransition));
    assert_eq!(
        session.attempt_move(CardRef::tableau(0, 0), PileRef::tableau(1)),
        Err(MoveRejected::IllegalStateTransition)
    );
    assert!(session.undo().is_none());
    assert_eq!(session.snapshot(), snap);
}

#[test]
fn test_recycle_penalty_floors_at_zero() {
    // Five sends to the foundations score 50, then a recycle costs 100.
    let waste = vec![
        up(Rank::Three, Suit::Heart),
        up(Rank::Ace, Suit::Club),
        up(Rank::Ace, Suit::Diamond),
        up(Rank::Ace, Suit::Heart),
        up(Rank::Two, Suit::Spade),
        up(Rank::Ace, Suit::Spade),
    ];
    let mut tableau = empty_tableau();
    for (i, card) in remaining(&waste).into_iter().enumerate() {
        tableau[i % N_TABLEAU].push(card);
    }
    for pile in tableau.iter_mut() {
        if let Some(top) = pile.last_mut() {
            top.set_face_up(true);
        }
    }
    let board = Board::from_parts(Vec::new(), waste, empty_foundations(), tableau).unwrap();
    let mut session = GameSession::from_board(board, GameConfig::default()).unwrap();

    for _ in 0..5 {
        let top = session.board().waste().len() - 1;
        session.auto_send_to_foundation(CardRef::waste(top)).unwrap();
    }
    assert_eq!(session.score(), 50);

    let snap = session.draw_stock().unwrap();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.board.stock(), &[Card::new(Rank::Three, Suit::Heart)]);

    session.draw_stock().unwrap();
    assert_eq!(session.score(), 0);
    session.undo().unwrap();
    session.undo().unwrap();
    assert_eq!(session.score(), 50);
}

#[test]
fn test_undo_round_trip() {
    let mut session = GameSession::with_seed(31337);
    let start = session.snapshot();

    let mut applied = 0;
    for _ in 0..40 {
        let result = match legal_moves(&session).first() {
            Some(&(source, target)) => session.attempt_move(source, target),
            None => session.draw_stock(),
        };
        if result.is_ok() {
            applied += 1;
        }
    }
    assert!(applied > 0);
    assert_eq!(session.history_len(), applied);

    for _ in 0..applied {
        assert!(session.undo().is_some());
    }
    assert_eq!(session.snapshot(), start);
    assert!(session.undo().is_none());
}

#[test]
fn test_history_capacity_evicts_oldest() {
    let config = GameConfig::new().with_seed(8).with_history_capacity(3);
    let mut session = GameSession::new(config);
    for _ in 0..5 {
        session.draw_stock().unwrap();
    }
    assert_eq!(session.history_len(), 3);

    let mut last = None;
    while let Some(snap) = session.undo() {
        last = Some(snap);
    }
    assert_eq!(last.map(|s| s.move_count), Some(2));
    assert_eq!(session.board().waste().len(), 2);
}

#[test]
fn test_can_move_records_nothing() {
    let session = GameSession::with_seed(5);
    let before = session.snapshot();
    let _ = legal_moves(&session);
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.history_len(), 0);
}

#[test]
fn test_snapshot_serializes() {
    let mut session = GameSession::with_seed(64);
    session.draw_stock().unwrap();
    let snap = session.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn test_config_from_json() {
    let config: GameConfig = serde_json::from_str(r#"{ "history_capacity": 10, "seed": 3 }"#).unwrap();
    assert_eq!(config.history_capacity, 10);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.scoring.recycle_stock, -100);

    let session = GameSession::new(config);
    assert_eq!(session.seed(), 3);
}
