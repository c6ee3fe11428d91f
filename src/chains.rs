//! Chain tracking: liberties, atari, placement, capture and merge.
//!
//! Chains are identified by the [`ChainId`] stored in every stone's cell.
//! Liberties are kept as explicit per-chain bitsets computed from the board,
//! which answers both "how many liberties" and "which is the last one" for a
//! chain in atari.

use crate::board::{Board, Cell, ChainId, Color, Point};
use crate::constants::MAX_CELLS;

const WORDS: usize = MAX_CELLS.div_ceil(64);

/// A set of points, sized for the largest supported board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LibertySet([u64; WORDS]);

impl LibertySet {
    #[inline]
    pub fn insert(&mut self, pt: Point) {
        self.0[pt / 64] |= 1 << (pt % 64);
    }

    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.0[pt / 64] & (1 << (pt % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// The only member, if the set has exactly one.
    pub fn sole(&self) -> Option<Point> {
        if self.len() != 1 {
            return None;
        }
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().enumerate().flat_map(|(i, &word)| {
            (0..64)
                .filter(move |bit| word & (1 << bit) != 0)
                .map(move |bit| i * 64 + bit)
        })
    }
}

/// Liberty sets of every chain on a board, indexed by [`ChainId`].
#[derive(Clone, Debug)]
pub struct Liberties {
    sets: Vec<LibertySet>,
}

impl Liberties {
    /// Collect the distinct empty neighbors of every chain.
    pub fn compute(board: &Board) -> Self {
        let mut sets = vec![LibertySet::default(); board.area()];
        for pt in 0..board.area() {
            if let Cell::Owned(_, id) = board.cell(pt) {
                for n in board.neighbors(pt) {
                    if board.is_empty(n) {
                        sets[id.index()].insert(n);
                    }
                }
            }
        }
        Self { sets }
    }

    #[inline]
    pub fn of(&self, id: ChainId) -> &LibertySet {
        &self.sets[id.index()]
    }

    #[inline]
    pub fn count(&self, id: ChainId) -> usize {
        self.sets[id.index()].len()
    }

    /// A chain is in atari when it has exactly one liberty.
    #[inline]
    pub fn in_atari(&self, id: ChainId) -> bool {
        self.count(id) == 1
    }

    /// The last liberty of a chain in atari.
    pub fn sole_liberty(&self, id: ChainId) -> Option<Point> {
        self.sets[id.index()].sole()
    }
}

/// Put a stone on an empty point as a fresh single-stone chain.
pub fn place_stone(board: &mut Board, pt: Point, color: Color) -> ChainId {
    debug_assert!(board.is_empty(pt), "placing on occupied point {pt}");
    let id = ChainId::of(pt);
    board.set(pt, Cell::Owned(color, id));
    id
}

/// Remove every stone of a chain. Returns the number of stones removed.
pub fn remove_chain(board: &mut Board, id: ChainId) -> usize {
    let stones: Vec<Point> = board.chain_stones(id).collect();
    for &pt in &stones {
        board.set(pt, Cell::Empty);
    }
    stones.len()
}

/// Join two same-colored chains, keeping the smaller id.
///
/// Every stone tagged with the larger id is retagged. Returns the surviving id.
pub fn merge_chains(board: &mut Board, a: ChainId, b: ChainId) -> ChainId {
    if a == b {
        return a;
    }
    let (keep, drop) = if a < b { (a, b) } else { (b, a) };
    let stones: Vec<Point> = board.chain_stones(drop).collect();
    for pt in stones {
        if let Cell::Owned(color, _) = board.cell(pt) {
            board.set(pt, Cell::Owned(color, keep));
        }
    }
    keep
}

/// All stones connected to `start` by same-colored orthogonal steps.
///
/// Uses flood-fill; independent of the stored chain tags, so it can be used
/// to check them.
pub fn flood_chain(board: &Board, start: Point) -> Vec<Point> {
    let Some(color) = board.stone_at(start) else {
        return Vec::new();
    };
    let mut stack = vec![start];
    let mut visited = vec![false; board.area()];
    let mut out = Vec::new();

    while let Some(pt) = stack.pop() {
        if visited[pt] {
            continue;
        }
        visited[pt] = true;
        out.push(pt);
        for n in board.neighbors(pt) {
            if !visited[n] && board.stone_at(n) == Some(color) {
                stack.push(n);
            }
        }
    }
    out.sort_unstable();
    out
}
