//! Game state and move execution.
//!
//! This module provides the core game logic, including:
//! - The [`GameState`] value carried from ply to ply
//! - Stone placement with capture, chain merging and ko detection
//! - The per-ply wrapper that flips the turn, records history and checks superko
//!
//! Moves are not validated here: callers only submit actions that
//! [`crate::legality::legal_action_mask`] reports as legal.

use tracing::{debug, trace};

use crate::board::{Action, Board, Cell, ChainId, Color, Point};
use crate::chains::{Liberties, merge_chains, place_stone, remove_chain};
use crate::superko::{History, check_superko};

/// A Go position together with the bookkeeping needed to continue the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board cells tagged with their chain
    pub(crate) board: Board,
    /// Side to move
    pub(crate) color: Color,
    /// Stones captured by [Black, White]
    pub(crate) captures: [u32; 2],
    /// Point forbidden to the side to move by simple ko
    pub(crate) ko: Option<Point>,
    /// Passes in a row (two end the game)
    pub(crate) consecutive_passes: u32,
    /// Set when the last move repeated a recent position
    pub(crate) superko: bool,
    /// Recent board snapshots, newest first
    pub(crate) history: History,
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new(size: usize, history_length: usize) -> Self {
        Self {
            board: Board::new(size),
            color: Color::Black,
            captures: [0, 0],
            ko: None,
            consecutive_passes: 0,
            superko: false,
            history: History::new(history_length, size * size),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Total stones captured so far by `color`.
    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color.index()]
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn is_superko(&self) -> bool {
        self.superko
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

/// Advance the state by one ply.
///
/// Clears the ko, applies the placement or pass, hands the turn to the
/// opponent, records the new board in the history and re-evaluates superko.
pub fn apply_action(state: &mut GameState, action: Action) {
    trace!(?action, color = ?state.color, "apply action");
    state.ko = None;

    match action {
        Action::Play(pt) => {
            play_move(state, pt);
        }
        Action::Pass => pass_move(state),
    }

    state.color = state.color.opponent();
    let snapshot = state.board.snapshot();
    state.history.push(&snapshot);
    state.superko = check_superko(&state.history, state.consecutive_passes);
    if state.superko {
        debug!(?action, "position repeated within history window");
    }
}

/// Execute a pass: only the pass counter changes.
pub fn pass_move(state: &mut GameState) {
    state.consecutive_passes += 1;
}

/// Place a stone for the side to move at `pt`.
///
/// Removes opponent chains whose last liberty was `pt`, merges the new stone
/// with friendly neighbors and sets the ko point when exactly one stone was
/// captured by a move into an opponent's eye. Returns the number of stones
/// captured.
pub fn play_move(state: &mut GameState, pt: Point) -> usize {
    debug_assert!(pt < state.board.area(), "point {pt} off board");
    debug_assert!(state.board.is_empty(pt), "point {pt} not empty");

    state.consecutive_passes = 0;
    let me = state.color;
    let ko_candidate = ko_may_occur(&state.board, pt, me);

    // Remove chains whose only liberty is the point being played
    let liberties = Liberties::compute(&state.board);
    let mut removed: Vec<ChainId> = Vec::with_capacity(4);
    let mut captured = 0;
    let mut capture_point = pt;
    for n in state.board.neighbors(pt) {
        let Cell::Owned(color, id) = state.board.cell(n) else {
            continue;
        };
        if color == me || removed.contains(&id) {
            continue;
        }
        if liberties.sole_liberty(id) == Some(pt) {
            let count = remove_chain(&mut state.board, id);
            debug!(chain = id.index(), count, "captured chain");
            captured += count;
            capture_point = n;
            removed.push(id);
        }
    }
    state.captures[me.index()] += captured as u32;

    // Connect to friendly neighbors one at a time; earlier merges may
    // already have joined later neighbors to the new chain
    let mut chain = place_stone(&mut state.board, pt, me);
    for n in state.board.neighbors(pt) {
        if let Cell::Owned(color, id) = state.board.cell(n) {
            if color == me {
                chain = merge_chains(&mut state.board, chain, id);
            }
        }
    }

    // Ko only when the whole move captured a single stone
    if captured == 1 && ko_candidate {
        debug!(ko = capture_point, "ko created");
        state.ko = Some(capture_point);
    }

    captured
}

/// True if every on-board neighbor of `pt` is an opponent stone.
///
/// Checked before any mutation; a single-stone capture from such a point is
/// the shape that can be immediately retaken.
fn ko_may_occur(board: &Board, pt: Point, me: Color) -> bool {
    board
        .neighbor_slots(pt)
        .iter()
        .all(|slot| match slot {
            None => true,
            Some(n) => board.stone_at(*n) == Some(me.opponent()),
        })
}
