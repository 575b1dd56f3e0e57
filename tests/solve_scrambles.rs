use std::io::Write;

use torus_solver::board::{Board, Dir, Move};
use torus_solver::{solve, Heuristic, ParseBoardError, SearchLimits};

fn write_board(board: &Board) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{board}").unwrap();
    file.flush().unwrap();
    file
}

fn read_board(file: &tempfile::NamedTempFile) -> Result<Board, ParseBoardError> {
    std::fs::read_to_string(file.path()).unwrap().parse()
}

#[test]
fn board_file_round_trips_through_render_and_parse() {
    let scramble = Board::solved()
        .apply(Move { dir: Dir::Down, index: 0 })
        .apply(Move { dir: Dir::Left, index: 1 });
    let file = write_board(&scramble);
    assert_eq!(read_board(&file).unwrap(), scramble);
}

#[test]
fn malformed_board_file_is_a_reported_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "1 2 3 4 5").unwrap();
    file.flush().unwrap();
    assert_eq!(read_board(&file).unwrap_err(), ParseBoardError::WrongCount(5));
}

#[test]
fn file_driven_scramble_solves_and_replays() {
    let moves = [
        Move { dir: Dir::Right, index: 0 },
        Move { dir: Dir::Up, index: 1 },
        Move { dir: Dir::Down, index: 3 },
        Move { dir: Dir::Left, index: 2 },
    ];
    let scramble = moves
        .iter()
        .fold(Board::solved(), |b, &mv| b.apply(mv));

    let file = write_board(&scramble);
    let board = read_board(&file).unwrap();
    assert_eq!(board, scramble);

    let solution = solve(board, Heuristic::AxisMax, SearchLimits::unbounded()).unwrap();
    assert!(!solution.moves.is_empty());

    let replayed = solution
        .moves
        .iter()
        .fold(board, |b, &mv| b.apply(mv));
    assert!(replayed.is_goal());

    // The rendered route parses back into the same move count.
    let route = solution.route();
    assert_eq!(route.split_whitespace().count(), solution.moves.len());
}

#[test]
fn budgeted_search_fails_fast_on_a_deep_scramble() {
    let moves = [
        Move { dir: Dir::Right, index: 0 },
        Move { dir: Dir::Down, index: 1 },
        Move { dir: Dir::Right, index: 2 },
        Move { dir: Dir::Down, index: 3 },
        Move { dir: Dir::Left, index: 1 },
        Move { dir: Dir::Up, index: 2 },
    ];
    let scramble = moves
        .iter()
        .fold(Board::solved(), |b, &mv| b.apply(mv));

    let err = solve(scramble, Heuristic::AxisMax, SearchLimits::max_expanded(2)).unwrap_err();
    let stats = err.stats();
    assert_eq!(stats.expanded, 3);
    assert!(stats.generated >= 16);
}
