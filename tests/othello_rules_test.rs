//! Tests for the Othello rule engine.

use othello_table::{Board, Cell, Coord, Game, MoveError, Outcome, RuleEngine, Side, Turn};

fn c(value: u8) -> Coord {
    Coord::new(value).expect("valid coordinate")
}

#[test]
fn test_opening_position() {
    let game = Game::new();
    assert_eq!(game.next_side(), Side::White);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.board().get(c(3), c(3)), Cell::Stone(Side::White));
    assert_eq!(game.board().get(c(4), c(4)), Cell::Stone(Side::White));
    assert_eq!(game.board().get(c(3), c(4)), Cell::Stone(Side::Black));
    assert_eq!(game.board().get(c(4), c(3)), Cell::Stone(Side::Black));
    assert_eq!(game.board().count(Side::White), 2);
    assert_eq!(game.board().count(Side::Black), 2);
    assert!(game.log().is_empty());
}

#[test]
fn test_opening_has_four_legal_placements() {
    let game = Game::new();
    let mut moves = game.legal_placements(Side::White);
    moves.sort();
    assert_eq!(
        moves,
        vec![(c(2), c(4)), (c(3), c(5)), (c(4), c(2)), (c(5), c(3))]
    );
}

#[test]
fn test_place_flips_bracketed_stone() {
    let mut game = Game::new();
    let outcome = game.place(Side::White, c(5), c(3)).expect("legal move");

    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.board().get(c(5), c(3)), Cell::Stone(Side::White));
    assert_eq!(game.board().get(c(4), c(3)), Cell::Stone(Side::White));
    assert_eq!(game.board().count(Side::White), 4);
    assert_eq!(game.board().count(Side::Black), 1);
    assert_eq!(game.next_side(), Side::Black);
    assert_eq!(
        game.log(),
        &[Turn::Placement {
            side: Side::White,
            column: c(5),
            row: c(3)
        }]
    );
}

#[test]
fn test_wrong_side_is_rejected() {
    let mut game = Game::new();
    let before = game.clone();
    let err = game.place(Side::Black, c(2), c(3)).expect_err("white moves first");
    assert_eq!(err, MoveError::WrongSide(Side::Black));
    assert_eq!(game, before);
}

#[test]
fn test_occupied_cell_is_rejected() {
    let mut game = Game::new();
    let err = game.place(Side::White, c(3), c(3)).expect_err("occupied");
    assert_eq!(err, MoveError::Occupied(c(3), c(3)));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_placement_without_capture_is_rejected() {
    let mut game = Game::new();
    let before = game.clone();
    let err = game.place(Side::White, c(0), c(0)).expect_err("no capture");
    assert_eq!(err, MoveError::NoCapture(c(0), c(0)));
    assert_eq!(game, before);
}

#[test]
fn test_pass_hands_turn_over() {
    let mut game = Game::new();
    let outcome = game.pass(Side::White).expect("white may pass");
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.next_side(), Side::Black);
    assert_eq!(game.log(), &[Turn::Pass { side: Side::White }]);
}

#[test]
fn test_pass_out_of_turn_is_rejected() {
    let mut game = Game::new();
    assert_eq!(
        game.pass(Side::Black),
        Err(MoveError::WrongSide(Side::Black))
    );
}

#[test]
fn test_wipeout_ends_game() {
    // White at (0,0), black at (1,0): white takes (2,0) and black is gone.
    let mut board = Board::empty();
    board.set(c(0), c(0), Cell::Stone(Side::White));
    board.set(c(1), c(0), Cell::Stone(Side::Black));
    let mut game = Game::from_position(board, Side::White);
    assert_eq!(game.outcome(), Outcome::InProgress);

    let outcome = game.place(Side::White, c(2), c(0)).expect("capturing move");
    assert_eq!(outcome, Outcome::Won(Side::White));
    assert_eq!(game.board().count(Side::Black), 0);
    assert_eq!(
        game.pass(Side::Black),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_equal_counts_draw() {
    let mut board = Board::empty();
    board.set(c(0), c(0), Cell::Stone(Side::White));
    board.set(c(7), c(7), Cell::Stone(Side::Black));
    let game = Game::from_position(board, Side::White);
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_rule_engine_trait_reads_game_state() {
    let mut game = Game::new();
    RuleEngine::place(&mut game, Side::White, c(2), c(4)).expect("legal move");

    assert_eq!(RuleEngine::next_side(&game), Side::Black);
    assert_eq!(game.cell(c(2), c(4)), Cell::Stone(Side::White));
    assert_eq!(game.stone_count(Side::White), 4);
    assert_eq!(game.move_log().len(), 1);
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(7).is_some());
    assert!(Coord::new(8).is_none());
    assert_eq!(Coord::try_from(9u8).map_err(|e| e.value), Err(9));
    assert_eq!(c(0).offset(-1), None);
    assert_eq!(c(7).offset(1), None);
    assert_eq!(c(3).offset(2), Some(c(5)));
}

#[test]
fn test_turn_summaries() {
    let placement = Turn::Placement {
        side: Side::White,
        column: c(3),
        row: c(5),
    };
    assert_eq!(placement.to_string(), "3,5W");
    assert_eq!(Turn::Pass { side: Side::Black }.to_string(), "passB");
}
