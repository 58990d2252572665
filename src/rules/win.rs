//! Win condition checking
//!
//! A player wins with five or more of their stones in an unbroken line along
//! one of four axes. Overlines count: a run of six or seven is returned whole.
//!
//! Scan order is part of the contract. Cells are visited row-major and, from
//! each cell, the directions are tried in [`Direction::ALL`] order. Every run
//! is walked forward only, so each line is looked at once per orientation.
//! The first run of [`WIN_LENGTH`] or more is returned even when the board
//! holds several.

use tracing::instrument;

use crate::board::{Board, Pos, Stone};

/// Minimum run length that wins
pub const WIN_LENGTH: usize = 5;

/// Line orientation, as a forward step of (row delta, col delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (1, 0)
    Down,
    /// (0, 1)
    Right,
    /// (1, 1)
    DownRight,
    /// (1, -1)
    DownLeft,
}

impl Direction {
    /// Scan priority
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    #[inline]
    fn priority(self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Right => 1,
            Direction::DownRight => 2,
            Direction::DownLeft => 3,
        }
    }
}

/// A winning run, cells in the order they were walked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    stone: Stone,
    direction: Direction,
    cells: Vec<Pos>,
}

impl WinLine {
    #[inline]
    pub fn winner(&self) -> Stone {
        self.stone
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a line holds at least [`WIN_LENGTH`] cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Walk forward from `start` while cells match the stone at `start`
fn scan_run(board: &Board, start: Pos, direction: Direction) -> Vec<Pos> {
    let stone = board.get(start);
    let (dr, dc) = direction.delta();
    let mut run = vec![start];
    let mut cur = start;
    while let Some(next) = cur.offset(dr, dc, board.size()) {
        if board.get(next) != stone {
            break;
        }
        run.push(next);
        cur = next;
    }
    run
}

/// Back up from `pos` to the first cell of its run
fn run_start(board: &Board, pos: Pos, direction: Direction) -> Pos {
    let stone = board.get(pos);
    let (dr, dc) = direction.delta();
    let mut cur = pos;
    while let Some(prev) = cur.offset(-dr, -dc, board.size()) {
        if board.get(prev) != stone {
            break;
        }
        cur = prev;
    }
    cur
}

/// First winning run starting at `start`, by direction priority
fn line_from(board: &Board, start: Pos) -> Option<WinLine> {
    let stone = board.get(start);
    if stone.is_empty() {
        return None;
    }
    Direction::ALL.into_iter().find_map(|direction| {
        let cells = scan_run(board, start, direction);
        (cells.len() >= WIN_LENGTH).then(|| WinLine {
            stone,
            direction,
            cells,
        })
    })
}

/// Full-board scan for a winning line
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn find_win_line(board: &Board) -> Option<WinLine> {
    board
        .iter()
        .filter(|(_, stone)| !stone.is_empty())
        .find_map(|(pos, _)| line_from(board, pos))
}

/// Winning line through `pos`, checking only the four lines that cross it.
///
/// If the board had no winning line before the stone at `pos` went down, the
/// result is the same as [`find_win_line`].
///
/// Panics if `pos` is outside the board.
pub fn find_win_line_at(board: &Board, pos: Pos) -> Option<WinLine> {
    let stone = board.get(pos);
    if stone.is_empty() {
        return None;
    }

    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let start = run_start(board, pos, direction);
            let cells = scan_run(board, start, direction);
            (cells.len() >= WIN_LENGTH).then_some((start, direction, cells))
        })
        .min_by_key(|(start, direction, _)| (*start, direction.priority()))
        .map(|(_, direction, cells)| WinLine {
            stone,
            direction,
            cells,
        })
}

/// Color owning the first winning line, if any
pub fn winner(board: &Board) -> Option<Stone> {
    find_win_line(board).map(|line| line.winner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DEFAULT_BOARD_SIZE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn board() -> Board {
        Board::new(DEFAULT_BOARD_SIZE).unwrap()
    }

    fn place_all(board: &mut Board, cells: &[(usize, usize)], stone: Stone) {
        for &(row, col) in cells {
            assert!(board.place_stone(Pos::new(row, col), stone));
        }
    }

    fn positions(cells: &[(usize, usize)]) -> Vec<Pos> {
        cells.iter().map(|&(r, c)| Pos::new(r, c)).collect()
    }

    #[test]
    fn test_empty_board_no_winner() {
        let board = board();
        assert_eq!(find_win_line(&board), None);
        assert_eq!(winner(&board), None);
        assert_eq!(find_win_line_at(&board, Pos::new(8, 8)), None);
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = board();
        let cells = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
        place_all(&mut board, &cells, Stone::Black);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.cells(), positions(&cells).as_slice());
        assert_eq!(line.winner(), Stone::Black);
        assert_eq!(line.direction(), Direction::Right);
    }

    #[test]
    fn test_six_in_row_not_truncated() {
        let mut board = board();
        let cells = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)];
        place_all(&mut board, &cells, Stone::Black);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line.cells(), positions(&cells).as_slice());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = board();
        let cells = [(3, 9), (4, 9), (5, 9), (6, 9), (7, 9)];
        place_all(&mut board, &cells, Stone::White);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.cells(), positions(&cells).as_slice());
        assert_eq!(line.direction(), Direction::Down);
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = board();
        let cells = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)];
        place_all(&mut board, &cells, Stone::White);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.cells(), positions(&cells).as_slice());
        assert_eq!(line.winner(), Stone::White);
        assert_eq!(line.direction(), Direction::DownRight);
    }

    #[test]
    fn test_diagonal_down_left_at_edge() {
        let mut board = board();
        let cells = [(12, 16), (13, 15), (14, 14), (15, 13), (16, 12)];
        place_all(&mut board, &cells, Stone::Black);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.cells(), positions(&cells).as_slice());
        assert_eq!(line.direction(), Direction::DownLeft);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = board();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert_eq!(find_win_line(&board), None);
    }

    #[test]
    fn test_blocked_run_not_win() {
        let mut board = board();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 3), (9, 4), (9, 5)], Stone::Black);
        place_all(&mut board, &[(9, 2)], Stone::White);
        assert_eq!(find_win_line(&board), None);
    }

    #[test]
    fn test_direction_priority_tie_break() {
        // Row and column share (0, 0); Down is tried before Right
        let mut board = board();
        place_all(
            &mut board,
            &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0), (2, 0), (3, 0), (4, 0)],
            Stone::Black,
        );

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.direction(), Direction::Down);
        assert_eq!(
            line.cells(),
            positions(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]).as_slice()
        );
    }

    #[test]
    fn test_row_major_tie_break() {
        let mut board = board();
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4), (10, 5), (10, 6)], Stone::Black);
        place_all(&mut board, &[(4, 8), (5, 8), (6, 8), (7, 8), (8, 8)], Stone::White);

        let line = find_win_line(&board).unwrap();
        assert_eq!(line.winner(), Stone::White);
        assert_eq!(line.cells()[0], Pos::new(4, 8));
    }

    #[test]
    fn test_deterministic() {
        let mut board = board();
        place_all(&mut board, &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], Stone::Black);
        assert_eq!(find_win_line(&board), find_win_line(&board));
    }

    #[test]
    fn test_at_pos_finds_whole_run_from_middle() {
        let mut board = board();
        let cells = [(8, 3), (8, 4), (8, 5), (8, 6), (8, 7), (8, 8)];
        place_all(&mut board, &cells, Stone::White);

        let line = find_win_line_at(&board, Pos::new(8, 5)).unwrap();
        assert_eq!(line.cells(), positions(&cells).as_slice());
        assert_eq!(Some(line), find_win_line(&board));
    }

    #[test]
    fn test_at_pos_ignores_other_lines() {
        let mut board = board();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Stone::Black);
        place_all(&mut board, &[(10, 10)], Stone::White);
        assert_eq!(find_win_line_at(&board, Pos::new(10, 10)), None);
    }

    #[test]
    fn test_at_pos_matches_full_scan_on_crossing_lines() {
        // The last stone at (4, 4) completes a column and a diagonal at once
        let mut board = board();
        place_all(
            &mut board,
            &[(0, 4), (1, 4), (2, 4), (3, 4), (0, 0), (1, 1), (2, 2), (3, 3)],
            Stone::Black,
        );
        place_all(&mut board, &[(4, 4)], Stone::Black);

        let full = find_win_line(&board);
        assert!(full.is_some());
        assert_eq!(find_win_line_at(&board, Pos::new(4, 4)), full);
    }

    #[test]
    fn test_at_pos_matches_full_scan_in_random_games() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let mut board = Board::new(9).unwrap();
            loop {
                let row = rng.random_range(0..9);
                let col = rng.random_range(0..9);
                if let crate::board::Placement::Accepted { pos, .. } = board.attempt_place(row, col) {
                    let at = find_win_line_at(&board, pos);
                    assert_eq!(at, find_win_line(&board));
                    if at.is_some() || board.stone_count() == 81 {
                        break;
                    }
                }
            }
        }
    }
}
