//! Full games driven through the console orchestrator with scripted input.

use noughts_and_crosses::{
    GameOutcome, GameSession, HumanPlayer, Marker, Orchestrator, Role, is_full, ui,
};
use std::io::{self, Cursor};

fn play(first: Role, script: &str) -> (GameOutcome, GameSession, String) {
    let human = HumanPlayer::new("Player", Cursor::new(script.as_bytes().to_vec()), io::sink());
    let mut orchestrator = Orchestrator::new(GameSession::new(first), human, Vec::new());
    let outcome = orchestrator.run().unwrap();
    let session = orchestrator.session().clone();
    let output = String::from_utf8(orchestrator.into_output()).unwrap();
    (outcome, session, output)
}

#[test]
fn test_computer_wins_scripted_game() {
    let (outcome, session, output) = play(Role::Human, "1\n5\n7\n");

    assert_eq!(outcome, GameOutcome::ComputerWon(Marker::O));
    assert_eq!(session.history().len(), 6);
    assert!(output.starts_with(ui::WELCOME));
    assert!(output.contains("You are X. The computer is O. You move first."));
    assert!(output.contains("Computer moved to 3. Computer is taking a corner."));
    assert!(output.contains("Computer moved to 9. Computer is blocking player's next move."));
    assert!(output.contains("Computer moved to 6. Computer is moving to win."));
    assert!(output.trim_end().ends_with("Computer O won!"));
}

#[test]
fn test_human_wins_with_fork() {
    let (outcome, session, output) = play(Role::Human, "1\n7\n9\n8\n");

    assert_eq!(outcome, GameOutcome::HumanWon(Marker::X));
    assert_eq!(session.history().len(), 7);
    assert!(output.contains("| X | X | X |"));
    assert!(output.trim_end().ends_with("Player X won!"));
}

#[test]
fn test_draw_when_computer_starts() {
    let (outcome, session, output) = play(Role::Computer, "5\n2\n4\n9\n");

    assert_eq!(outcome, GameOutcome::Draw);
    assert_eq!(session.history().len(), 9);
    assert!(is_full(session.board()));
    assert!(output.contains("The computer moves first."));
    assert!(output.trim_end().ends_with("Draw!"));
}

#[test]
fn test_invalid_input_is_retried() {
    let (outcome, session, _) = play(Role::Human, "abc\n1\n1\n3\n0\n7\n9\n8\n");

    // "3" hits the computer's corner, "0" is out of range.
    assert_eq!(outcome, GameOutcome::HumanWon(Marker::X));
    assert_eq!(session.history().len(), 7);
}

#[test]
fn test_every_game_ends_within_nine_moves() {
    let scripts = [
        (Role::Human, "1\n5\n7\n"),
        (Role::Human, "1\n7\n9\n8\n"),
        (Role::Computer, "5\n2\n4\n9\n"),
        (Role::Human, "5\n2\n4\n9\n8\n7\n3\n6\n1\n"),
        (Role::Computer, "9\n8\n7\n6\n5\n4\n3\n2\n1\n"),
    ];

    for (first, script) in scripts {
        let (_, session, output) = play(first, script);
        assert!(session.history().len() <= 9, "script {:?}", script);
        assert!(session.to_move().is_none(), "script {:?}", script);

        let finals = [ui::DRAW, "won!"];
        let announcements = output
            .lines()
            .filter(|l| finals.iter().any(|f| l.ends_with(f)))
            .count();
        assert_eq!(announcements, 1, "script {:?}", script);
    }
}

#[test]
fn test_end_of_input_fails_the_game() {
    let human = HumanPlayer::new("Player", Cursor::new(b"1\n".to_vec()), io::sink());
    let mut orchestrator = Orchestrator::new(GameSession::new(Role::Human), human, io::sink());
    assert!(orchestrator.run().is_err());
}
