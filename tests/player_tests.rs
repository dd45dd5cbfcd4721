mod common;

use std::io::Cursor;

use common::{board_with, ScriptedTerminal};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    parse_coordinates, AiPlayer, Board, BoardError, BoardView, ConsoleTerminal, Coordinate,
    GameEvent, HumanPlayer, InputError, Orientation, Player, ShotResult, Side, Terminal,
    BOARD_SIZE,
};

#[test]
fn test_parse_coordinates_is_one_based() {
    assert_eq!(parse_coordinates("1 1"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinates("  6\t3 "), Ok(Coordinate::new(5, 2)));
    // range is checked by the board, not the parser
    assert_eq!(parse_coordinates("0 7"), Ok(Coordinate::new(-1, 6)));
}

#[test]
fn test_parse_coordinates_rejects_malformed_input() {
    assert_eq!(parse_coordinates(""), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_coordinates("3"), Err(InputError::WrongTokenCount(1)));
    assert_eq!(parse_coordinates("1 2 3"), Err(InputError::WrongTokenCount(3)));
    assert_eq!(
        parse_coordinates("a 2"),
        Err(InputError::NotANumber("a".to_string()))
    );
    assert_eq!(
        parse_coordinates("2 b"),
        Err(InputError::NotANumber("b".to_string()))
    );
}

#[test]
fn test_human_reprompts_until_valid_input() {
    let mut terminal = ScriptedTerminal::with_lines(&["", "x y", "2 3"]);
    let mut human = HumanPlayer::new();
    let target = human.choose_target(&mut terminal).unwrap();
    assert_eq!(target, Coordinate::new(1, 2));
    assert_eq!(
        terminal.events,
        vec![
            GameEvent::InvalidInput(InputError::WrongTokenCount(0)),
            GameEvent::InvalidInput(InputError::NotANumber("x".to_string())),
        ]
    );
}

#[test]
fn test_human_errors_when_input_closes() {
    let mut terminal = ScriptedTerminal::with_lines(&["nonsense"]);
    let mut human = HumanPlayer::new();
    assert!(human.choose_target(&mut terminal).is_err());
}

#[test]
fn test_move_retries_rejected_targets() {
    let mut enemy = board_with(&[((3, 3), 1, Orientation::Horizontal)]);
    enemy.shot(Coordinate::new(0, 0)).unwrap();

    let mut terminal = ScriptedTerminal::with_lines(&["7 1", "1 1", "4 4"]);
    let mut human = HumanPlayer::new();
    let result = human.make_move(&mut enemy, &mut terminal).unwrap();

    assert_eq!(result, ShotResult::Sunk);
    assert!(result.is_hit());
    let rejected: Vec<_> = terminal
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Rejected { by, error } => Some((*by, *error)),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![
            (Side::Human, BoardError::OutOfBounds(Coordinate::new(6, 0))),
            (Side::Human, BoardError::AlreadyTargeted(Coordinate::new(0, 0))),
        ]
    );
    assert_eq!(
        terminal.events.last(),
        Some(&GameEvent::Shot {
            by: Side::Human,
            at: Coordinate::new(3, 3),
            result: ShotResult::Sunk,
        })
    );
}

#[test]
fn test_ai_move_finds_remaining_cell() {
    let mut enemy = Board::new();
    // leave a single untargeted cell
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            if (x, y) != (4, 1) {
                enemy.shot(Coordinate::new(x, y)).unwrap();
            }
        }
    }
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(99));
    let mut terminal = ScriptedTerminal::default();
    let result = ai.make_move(&mut enemy, &mut terminal).unwrap();
    assert_eq!(result, ShotResult::Miss);
    assert!(enemy.is_targeted(Coordinate::new(4, 1)));
    assert_eq!(ai.side(), Side::Computer);
}

#[test]
fn test_ai_targets_are_reproducible() {
    let mut a = AiPlayer::new(SmallRng::seed_from_u64(5));
    let mut b = AiPlayer::new(SmallRng::seed_from_u64(5));
    for _ in 0..20 {
        assert_eq!(a.random_target(), b.random_target());
    }
}

#[test]
fn test_board_view_hides_ships_unless_revealed() {
    let mut board = board_with(&[((0, 0), 2, Orientation::Horizontal)]);
    board.shot(Coordinate::new(0, 0)).unwrap();
    board.shot(Coordinate::new(5, 5)).unwrap();

    let hidden = BoardView(&board).to_string();
    let lines: Vec<_> = hidden.lines().collect();
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 |");
    assert_eq!(lines[1], "1 | X | O | O | O | O | O |");
    assert_eq!(lines[6], "6 | O | O | O | O | O | T |");

    board.set_revealed(true);
    let shown = BoardView(&board).to_string();
    assert_eq!(shown.lines().nth(1), Some("1 | X | ■ | O | O | O | O |"));
}

#[test]
fn test_console_terminal_reads_and_reports() {
    let input = Cursor::new("3 4\n");
    let mut terminal = ConsoleTerminal::new(input, Vec::new());
    assert_eq!(terminal.read_coordinates().unwrap(), Some("3 4".to_string()));
    assert_eq!(terminal.read_coordinates().unwrap(), None);
    terminal
        .announce(&GameEvent::Finished { winner: Side::Human })
        .unwrap();

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.contains("Enter row and column"));
    assert!(output.ends_with("You won!\n"));
}

#[test]
fn test_console_reports_refused_computer_shot() {
    let mut terminal = ConsoleTerminal::new(Cursor::new(""), Vec::new());
    let at = Coordinate::new(1, 2);
    terminal
        .announce(&GameEvent::Fired {
            by: Side::Computer,
            at,
        })
        .unwrap();
    terminal
        .announce(&GameEvent::Rejected {
            by: Side::Computer,
            error: BoardError::AlreadyTargeted(at),
        })
        .unwrap();

    let output = String::from_utf8(terminal.into_output()).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "Computer fires at 2 3");
    assert_eq!(
        lines[1],
        "Computer's shot refused: cell 2 3 has already been targeted"
    );
}
