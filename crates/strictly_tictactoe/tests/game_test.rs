//! Tests for the tic-tac-toe engine.

use std::cell::RefCell;
use std::rc::Rc;

use strictly_tictactoe::{
    Game, GameStatus, MoveError, MoveOutcome, Player, Position, Scores, Square,
};

fn play(game: &mut Game, cells: &[usize]) -> MoveOutcome {
    let mut last = None;
    for &cell in cells {
        last = Some(game.apply_move(cell).expect("legal move"));
    }
    last.expect("at least one move")
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.current_player(), Player::X);
    assert!(game.is_active());
    assert_eq!(*game.scores(), Scores::default());
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.status_text(), "Current Player: X");
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(4), Ok(MoveOutcome::Continue(Player::O)));
    assert_eq!(game.apply_move(0), Ok(MoveOutcome::Continue(Player::X)));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(game.status_text(), "Current Player: X");
}

#[test]
fn test_diagonal_win_for_x() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 1, 4, 2, 8]);

    let MoveOutcome::Win(line) = outcome else {
        panic!("expected a win, got {outcome:?}");
    };
    assert_eq!(line.player, Player::X);
    assert_eq!(line.indices(), [0, 4, 8]);
    assert!(!game.is_active());
    assert_eq!(game.scores().x, 1);
    assert_eq!(game.scores().o, 0);
    assert_eq!(game.scores().ties, 0);
    assert_eq!(game.status_text(), "Player X Wins!");
    assert_eq!(
        outcome.announcement().as_deref(),
        Some("Player X wins the game!")
    );
}

#[test]
fn test_full_board_tie() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcome, MoveOutcome::Tie);
    assert_eq!(*game.status(), GameStatus::Tie);
    assert!(!game.is_active());
    assert_eq!(game.scores().ties, 1);
    assert_eq!(game.scores().x + game.scores().o, 0);
    assert_eq!(game.status_text(), "It's a Tie!");
    assert_eq!(outcome.announcement().as_deref(), Some("The game is a tie!"));
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    let mut game = Game::new();
    // X completes the right column (2, 5, 8) with the ninth mark.
    let outcome = play(&mut game, &[0, 1, 2, 4, 5, 3, 7, 6, 8]);

    let MoveOutcome::Win(line) = outcome else {
        panic!("expected a win, got {outcome:?}");
    };
    assert_eq!(line.indices(), [2, 5, 8]);
    assert_eq!(game.scores().ties, 0);
    assert_eq!(game.scores().x, 1);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = Game::new();
    game.apply_move(4).unwrap();
    assert_eq!(
        game.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.board().clone();
    assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
    assert_eq!(*game.board(), before);
    assert_eq!(game.scores().x, 1);
}

#[test]
fn test_reset_keeps_scores() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let scores = *game.scores();

    game.reset();
    assert!(game.is_active());
    assert_eq!(game.current_player(), Player::X);
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(*game.scores(), scores);
}

#[test]
fn test_o_can_win() {
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 2, 1, 4, 8, 6]);
    assert!(matches!(outcome, MoveOutcome::Win(line) if line.player == Player::O));
    assert_eq!(game.scores().o, 1);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut game = Game::with_scores(Scores { x: 2, o: 1, ties: 4 });
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(*game.scores(), Scores { x: 3, o: 1, ties: 5 });
}

#[test]
fn test_observers_run_after_transition() {
    let seen: Rc<RefCell<Vec<(MoveOutcome, Scores)>>> = Rc::default();
    let mut game = Game::new();
    let sink = Rc::clone(&seen);
    game.on_result(move |outcome, scores| sink.borrow_mut().push((*outcome, *scores)));

    play(&mut game, &[0, 3, 1, 4, 2]);
    let _ = game.apply_move(5);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    assert_eq!(seen[0].0, MoveOutcome::Continue(Player::O));
    let (last, scores) = seen[4];
    assert!(last.is_terminal());
    assert_eq!(scores.x, 1);
}
