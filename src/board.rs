//! Board grid, cell tags and coordinates.
//!
//! Points are indices into a row-major grid: `pt = row * size + col`, with
//! row 0 at the top of the rendered board. Every stone carries the
//! [`ChainId`] of the chain it belongs to, so chain membership is a plain
//! cell lookup.

use std::fmt;

use crate::constants::{DELTA, TRIT_BLACK, TRIT_EMPTY, TRIT_WHITE};

/// A point on the board, represented as an index into the row-major grid.
pub type Point = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 0 for Black, 1 for White.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Value of this color's stones in a history snapshot.
    #[inline]
    pub fn trit(self) -> i8 {
        match self {
            Color::Black => TRIT_BLACK,
            Color::White => TRIT_WHITE,
        }
    }
}

/// Identity of one chain: the index of its smallest stone.
///
/// Merges keep the smaller of the two ids and captures remove whole chains,
/// so the id is always the minimum point of the chain's stones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u16);

impl ChainId {
    #[inline]
    pub fn of(pt: Point) -> Self {
        ChainId(pt as u16)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Content of a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Color, ChainId),
}

/// A move: place a stone on a point, or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Play(Point),
    Pass,
}

impl Action {
    /// Decode a flat action index: `0..size²` are points, `size²` is PASS.
    pub fn from_index(index: usize, size: usize) -> Option<Action> {
        let area = size * size;
        match index {
            i if i < area => Some(Action::Play(i)),
            i if i == area => Some(Action::Pass),
            _ => None,
        }
    }

    /// Flat action index, the inverse of [`Action::from_index`].
    pub fn index(self, size: usize) -> usize {
        match self {
            Action::Play(pt) => pt,
            Action::Pass => size * size,
        }
    }
}

/// A square grid of chain-tagged cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cell(&self, pt: Point) -> Cell {
        self.cells[pt]
    }

    #[inline]
    pub fn is_empty(&self, pt: Point) -> bool {
        self.cells[pt] == Cell::Empty
    }

    pub fn stone_at(&self, pt: Point) -> Option<Color> {
        match self.cells[pt] {
            Cell::Owned(color, _) => Some(color),
            Cell::Empty => None,
        }
    }

    pub fn chain_at(&self, pt: Point) -> Option<ChainId> {
        match self.cells[pt] {
            Cell::Owned(_, id) => Some(id),
            Cell::Empty => None,
        }
    }

    pub(crate) fn set(&mut self, pt: Point, cell: Cell) {
        self.cells[pt] = cell;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn point(&self, row: usize, col: usize) -> Point {
        row * self.size + col
    }

    pub fn row_col(&self, pt: Point) -> (usize, usize) {
        (pt / self.size, pt % self.size)
    }

    /// The 4 orthogonal neighbor slots (N, S, W, E); `None` where off-board.
    #[inline]
    pub fn neighbor_slots(&self, pt: Point) -> [Option<Point>; 4] {
        let (row, col) = self.row_col(pt);
        let n = self.size as isize;
        DELTA.map(|(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if (0..n).contains(&r) && (0..n).contains(&c) {
                Some(r as usize * self.size + c as usize)
            } else {
                None
            }
        })
    }

    /// On-board orthogonal neighbors of a point.
    #[inline]
    pub fn neighbors(&self, pt: Point) -> impl Iterator<Item = Point> + use<> {
        self.neighbor_slots(pt).into_iter().flatten()
    }

    /// All points tagged with the given chain.
    pub fn chain_stones(&self, id: ChainId) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| matches!(c, Cell::Owned(_, cid) if *cid == id))
            .map(|(pt, _)| pt)
    }

    pub fn count_stones(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Owned(owner, _) if *owner == color))
            .count()
    }

    /// Absolute black/white/empty encoding of the board, one value per point.
    pub fn snapshot(&self) -> Vec<i8> {
        self.cells
            .iter()
            .map(|c| match c {
                Cell::Owned(color, _) => color.trit(),
                Cell::Empty => TRIT_EMPTY,
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.stone_at(self.point(row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string (e.g., "D4", "pass") into an action.
///
/// Go coordinates use letters A-T (skipping I) for columns and 1-19 for rows,
/// with row 1 at the bottom. Returns `None` for malformed or off-board input.
pub fn parse_coord(s: &str, size: usize) -> Option<Action> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Action::Pass);
    }

    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == b'I' {
        return None;
    }
    let mut col = (col_char - b'A') as usize;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if col_char > b'I' {
        col -= 1;
    }

    let row: usize = s[1..].parse().ok()?;
    if col >= size || row == 0 || row > size {
        return None;
    }

    Some(Action::Play((size - row) * size + col))
}

/// Convert an action to a coordinate string (e.g., "D4"), or "pass".
pub fn str_coord(action: Action, size: usize) -> String {
    let pt = match action {
        Action::Pass => return "pass".into(),
        Action::Play(pt) => pt,
    };

    let row = pt / size;
    let col = pt % size;

    // Convert column to letter, skipping 'I'
    let mut c = (b'A' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }

    format!("{c}{}", size - row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_corner_and_center() {
        let board = Board::new(5);
        let corner: Vec<_> = board.neighbors(0).collect();
        assert_eq!(corner, vec![5, 1]);

        let center: Vec<_> = board.neighbors(12).collect();
        assert_eq!(center, vec![7, 17, 11, 13]);

        assert_eq!(board.neighbor_slots(24), [Some(19), None, Some(23), None]);
    }

    #[test]
    fn test_action_index_roundtrip() {
        assert_eq!(Action::from_index(0, 5), Some(Action::Play(0)));
        assert_eq!(Action::from_index(24, 5), Some(Action::Play(24)));
        assert_eq!(Action::from_index(25, 5), Some(Action::Pass));
        assert_eq!(Action::from_index(26, 5), None);
        assert_eq!(Action::Pass.index(5), 25);
    }

    #[test]
    fn test_parse_str_coord_roundtrip() {
        for size in [5, 9, 19] {
            for pt in 0..size * size {
                let s = str_coord(Action::Play(pt), size);
                assert_eq!(parse_coord(&s, size), Some(Action::Play(pt)), "{s}");
            }
        }
    }

    #[test]
    fn test_parse_coord_layout() {
        assert_eq!(parse_coord("A1", 5), Some(Action::Play(20)));
        assert_eq!(parse_coord("A5", 5), Some(Action::Play(0)));
        assert_eq!(parse_coord("E5", 5), Some(Action::Play(4)));
        assert_eq!(parse_coord("J1", 9), Some(Action::Play(80)));
        assert_eq!(parse_coord("PASS", 5), Some(Action::Pass));
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord("", 5), None);
        assert_eq!(parse_coord("Z", 5), None);
        assert_eq!(parse_coord("I3", 9), None);
        assert_eq!(parse_coord("F1", 5), None);
        assert_eq!(parse_coord("A6", 5), None);
        assert_eq!(parse_coord("A0", 5), None);
        assert_eq!(parse_coord("4D", 5), None);
    }

    #[test]
    fn test_snapshot_and_display() {
        let mut board = Board::new(5);
        board.set(0, Cell::Owned(Color::Black, ChainId::of(0)));
        board.set(6, Cell::Owned(Color::White, ChainId::of(6)));

        let snap = board.snapshot();
        assert_eq!(snap[0], TRIT_BLACK);
        assert_eq!(snap[6], TRIT_WHITE);
        assert_eq!(snap[1], TRIT_EMPTY);

        let text = board.to_string();
        assert!(text.starts_with("X . . . . \n. O . . . \n"));
        assert_eq!(board.count_stones(Color::Black), 1);
        assert_eq!(board.count_stones(Color::White), 1);
    }
}
