//! Tests for the misère end condition and match lifecycle.

use strictly_markers::{
    Command, GameEngine, MarkerGame, MoveError, MoveProtocol, Orientation, Player, Position,
};

#[test]
fn test_last_marker_loses_under_range_moves() {
    let mut engine = GameEngine::new(2, MoveProtocol::Range).unwrap();
    engine
        .apply_range_move(Position::new(0, 0), Position::new(0, 1))
        .unwrap();
    engine
        .apply_range_move(Position::new(1, 0), Position::new(1, 0))
        .unwrap();
    assert!(!engine.is_game_over());

    let report = engine
        .apply_range_move(Position::new(1, 1), Position::new(1, 1))
        .unwrap();

    let outcome = report.outcome.unwrap();
    assert_eq!(outcome.loser(), Player::Player1);
    assert_eq!(outcome.winner(), Player::Player2);
    assert_eq!(engine.winner(), Some(Player::Player2));
    assert!(engine.is_game_over());
    // The turn still flips once the winner is fixed.
    assert_eq!(engine.active_player(), Player::Player2);
}

#[test]
fn test_last_marker_loses_under_point_moves() {
    let mut engine = GameEngine::new(1, MoveProtocol::Point).unwrap();
    let report = engine
        .apply_point_move(Position::new(0, 0), Orientation::RowLocked)
        .unwrap();

    assert_eq!(report.outcome.map(|o| o.loser()), Some(Player::Player1));
    assert_eq!(engine.winner(), Some(Player::Player2));

    let report = engine.end_turn().unwrap();
    assert_eq!(report.next, Player::Player2);
}

#[test]
fn test_no_moves_after_board_empties() {
    let mut engine = GameEngine::new(1, MoveProtocol::Range).unwrap();
    engine
        .apply_range_move(Position::new(0, 0), Position::new(0, 0))
        .unwrap();

    let err = engine
        .apply(Command::Range {
            from: Position::new(0, 0),
            to: Position::new(0, 0),
        })
        .unwrap_err();
    assert!(matches!(err, MoveError::MarkerRemoved(_)));
    assert_eq!(engine.winner(), Some(Player::Player2));
}

#[test]
fn test_reset_board_keeps_alternation() {
    let mut engine = GameEngine::new(1, MoveProtocol::Range).unwrap();
    engine
        .apply_range_move(Position::new(0, 0), Position::new(0, 0))
        .unwrap();

    engine.reset_board();

    assert!(!engine.is_game_over());
    assert_eq!(engine.winner(), None);
    assert!(engine.history().is_empty());
    assert_eq!(engine.board().present_count(), 1);
    assert_eq!(engine.active_player(), Player::Player2);
}

#[test]
fn test_new_match_starts_with_player_one() {
    let mut engine = GameEngine::new(3, MoveProtocol::Point).unwrap();
    engine
        .apply_point_move(Position::new(1, 1), Orientation::ColumnLocked)
        .unwrap();
    engine.end_turn().unwrap();
    engine
        .apply_point_move(Position::new(0, 0), Orientation::RowLocked)
        .unwrap();

    engine.new_match();

    assert_eq!(engine.active_player(), Player::Player1);
    assert!(engine.turn().anchor().is_none());
    assert!(!engine.turn().has_moved());
    assert_eq!(engine.board().present_count(), 9);
}
