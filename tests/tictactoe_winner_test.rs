//! Exhaustive checks of win detection over every 3x3 board.

use time_travel_tictactoe::games::tictactoe::rules::LINES;
use time_travel_tictactoe::{Board, Player, Position, Square, calculate_winner};

/// All 3^9 assignments of Empty/X/O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in squares.iter_mut() {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

fn complete_lines(board: &Board) -> Vec<[Position; 3]> {
    LINES
        .into_iter()
        .filter(|[a, b, c]| {
            let sq = board.get(*a);
            sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
        })
        .collect()
}

type Symmetry = fn(usize, usize) -> (usize, usize);

/// The 8 symmetries of the square, as maps on (row, col).
fn symmetries() -> [Symmetry; 8] {
    [
        |r, c| (r, c),
        |r, c| (c, 2 - r),
        |r, c| (2 - r, 2 - c),
        |r, c| (2 - c, r),
        |r, c| (r, 2 - c),
        |r, c| (2 - r, c),
        |r, c| (c, r),
        |r, c| (2 - c, 2 - r),
    ]
}

fn map_position(pos: Position, f: Symmetry) -> Position {
    let (r, c) = f(pos.row(), pos.col());
    Position::from_row_col(r, c).expect("symmetry stays on the board")
}

fn transform(board: &Board, f: Symmetry) -> Board {
    let mut out = Board::new();
    for pos in Position::ALL {
        out.set(map_position(pos, f), board.get(pos));
    }
    out
}

fn normalized(mut line: [Position; 3]) -> [Position; 3] {
    line.sort();
    line
}

#[test]
fn test_reports_first_complete_line() {
    for board in all_boards() {
        let expected = complete_lines(&board).first().copied();
        let found = calculate_winner(&board);
        assert_eq!(found.map(|l| l.cells()), expected, "board:\n{}", board.display());
        if let Some(line) = found {
            assert_eq!(
                board.get(line.cells()[0]),
                Square::Occupied(line.player())
            );
        }
    }
}

#[test]
fn test_winner_symmetric_under_board_symmetries() {
    for board in all_boards() {
        let lines = complete_lines(&board);
        let winners: Vec<Option<Player>> = lines
            .iter()
            .map(|l| board.get(l[0]).player())
            .collect();
        let single_winner = winners.windows(2).all(|w| w[0] == w[1]);

        for f in symmetries() {
            let image = transform(&board, f);

            // Complete lines map onto complete lines.
            let mut mapped: Vec<_> = lines
                .iter()
                .map(|l| normalized(l.map(|p| map_position(p, f))))
                .collect();
            let mut actual: Vec<_> = complete_lines(&image).into_iter().map(normalized).collect();
            mapped.sort();
            actual.sort();
            assert_eq!(mapped, actual);

            if single_winner {
                assert_eq!(
                    calculate_winner(&image).map(|l| l.player()),
                    calculate_winner(&board).map(|l| l.player())
                );
            }
        }
    }
}

#[test]
fn test_every_line_wins_alone() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(player));
            }
            let found = calculate_winner(&board).expect("line wins");
            assert_eq!(found.player(), player);
            assert_eq!(found.cells(), line);
        }
    }
}
