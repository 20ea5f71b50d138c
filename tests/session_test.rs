//! End-to-end: typed lines in, rendered frames out.

use std::io::Cursor;

use turn_tetris::core::{GameState, SimpleRng};
use turn_tetris::input::LineInput;
use turn_tetris::term::{GameView, TerminalRenderer, GAME_OVER, PROMPT};
use turn_tetris::types::TurnOutcome;

/// Play until quit, game over or end of input. Returns the screen output.
fn play(script: &str, seed: u32) -> (String, TurnOutcome) {
    let mut game = GameState::new(8, SimpleRng::new(seed)).unwrap();
    let mut input = LineInput::new(Cursor::new(script.to_string()));
    let mut term = TerminalRenderer::with_writer(Vec::new(), false);
    let view = GameView::default().with_help(false);

    let outcome = loop {
        let snap = game.snapshot();
        term.draw(&view.render(&snap)).unwrap();
        if snap.game_over {
            break TurnOutcome::GameOver;
        }
        let command = input.next_command().unwrap();
        if game.apply_command(command) == TurnOutcome::Quit {
            break TurnOutcome::Quit;
        }
    };
    (String::from_utf8(term.into_inner()).unwrap(), outcome)
}

#[test]
fn session_quits_on_q() {
    let (screen, outcome) = play("a\nd\nq\n", 5);
    assert_eq!(outcome, TurnOutcome::Quit);
    // Initial frame plus one per line before the quit
    assert_eq!(screen.matches(PROMPT).count(), 3);
}

#[test]
fn session_quits_at_end_of_input() {
    let (_, outcome) = play(" \n \n", 5);
    assert_eq!(outcome, TurnOutcome::Quit);
}

#[test]
fn session_reports_bad_input() {
    let (screen, _) = play("hello\nq\n", 9);
    assert!(screen.contains("That is not a valid move!"));
}

#[test]
fn session_runs_to_game_over() {
    let script = " \n".repeat(2_000);
    let (screen, outcome) = play(&script, 3);
    assert_eq!(outcome, TurnOutcome::GameOver);
    assert!(screen.trim_end().ends_with(GAME_OVER));
}

#[test]
fn session_same_seed_same_screen() {
    let script = "a\ns\n \nw\nd\n \n \nq\n";
    assert_eq!(play(script, 11), play(script, 11));
}
