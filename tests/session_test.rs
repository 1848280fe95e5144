//! Tests driving full console sessions through in-memory buffers.

use tictactoe::Session;

/// Runs a session over scripted input and returns the stdout transcript.
fn run_transcript(input: &str) -> String {
    let mut out = Vec::new();
    let mut session = Session::new(input.as_bytes(), &mut out);
    session.run().expect("session should not fail");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_menu_renders_board_and_options() {
    let transcript = run_transcript("3\n");

    assert!(transcript.starts_with("   |   |  \n-----------\n"));
    assert!(transcript.contains("X's Turn!"));
    assert!(transcript.contains("What would you like to do?"));
    assert!(transcript.contains("1: Make a move"));
    assert!(transcript.contains("2: Start Over"));
    assert!(transcript.contains("3: Quit"));
    assert!(transcript.contains("Choice: "));
    assert!(!transcript.contains("Wins!"));
}

#[test]
fn test_unrecognized_option_stays_at_menu() {
    let transcript = run_transcript("9\n3\n");
    assert!(transcript.contains("Invalid Option"));
    // Menu is shown again after the error.
    assert_eq!(transcript.matches("What would you like to do?").count(), 2);
}

#[test]
fn test_non_numeric_menu_input_stays_at_menu() {
    let transcript = run_transcript("start\n3\n");
    assert!(transcript.contains("Invalid Option"));
}

#[test]
fn test_x_wins_on_diagonal() {
    let transcript = run_transcript("1\n0 0\n1\n0 1\n1\n1 1\n1\n1 0\n1\n2 2\n");

    assert!(transcript.trim_end().ends_with("X Wins!"));
    assert!(!transcript.contains("O Wins!"));
    // Final board shows the completed diagonal.
    assert!(transcript.contains(" X | O |  "));
}

#[test]
fn test_o_wins_announced_for_o() {
    let transcript = run_transcript("1\n0 0\n1\n1 0\n1\n0 1\n1\n1 1\n1\n2 2\n1\n1 2\n");
    assert!(transcript.trim_end().ends_with("O Wins!"));
}

#[test]
fn test_draw_announced_when_board_fills() {
    let transcript =
        run_transcript("1\n0 0\n1\n0 1\n1\n0 2\n1\n1 1\n1\n1 0\n1\n2 0\n1\n1 2\n1\n2 2\n1\n2 1\n");
    assert!(transcript.trim_end().ends_with("Draw!"));
}

#[test]
fn test_out_of_bounds_position_reprompts() {
    let transcript = run_transcript("1\n5 5\n0 0\n3\n");

    assert!(transcript.contains("Invalid position"));
    // Prompt appears again after the rejected position.
    assert_eq!(
        transcript
            .matches("Which row, column would you like to move to?")
            .count(),
        2
    );
}

#[test]
fn test_occupied_position_reprompts() {
    let transcript = run_transcript("1\n1 1\n1\n1 1\n0 0\n3\n");
    assert!(transcript.contains("That position is already taken"));
}

#[test]
fn test_non_numeric_position_reprompts() {
    let transcript = run_transcript("1\nmiddle\n1 1\n3\n");
    assert!(transcript.contains("Invalid position"));
    assert!(transcript.contains(" X |"));
}

#[test]
fn test_restart_empties_board_and_returns_turn_to_x() {
    let transcript = run_transcript("1\n0 0\n2\n3\n");

    // After X's move it is O's turn; after Start Over it is X's again.
    let after_o = transcript
        .split_once("O's Turn!")
        .expect("O gets a turn")
        .1;
    assert!(after_o.contains("X's Turn!"));
    assert!(after_o.contains("   |   |  \n-----------\n   |   |  \n-----------\n   |   |  "));
}

#[test]
fn test_move_tokens_may_span_lines() {
    let transcript = run_transcript("1\n0\n0\n3\n");
    assert!(transcript.contains(" X |   |  "));
}

#[test]
fn test_end_of_input_terminates_cleanly() {
    let transcript = run_transcript("1\n0 0\n");
    assert!(transcript.trim_end().ends_with("Choice:"));
}
