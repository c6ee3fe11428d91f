//! Legal move generation.
//!
//! A point is playable when it is empty, is not the ko point, and has at
//! least one neighbor that is empty, an opponent chain in atari, or a
//! friendly chain with more than one liberty. The friendly-chain test does
//! not simulate the move, so in rare capture-and-merge shapes it can differ
//! from a full suicide check.

use crate::board::{Cell, Color, Point};
use crate::chains::Liberties;
use crate::position::GameState;

/// One flag per point plus a final flag for PASS (always set).
pub fn legal_action_mask(state: &GameState) -> Vec<bool> {
    let board = &state.board;
    let liberties = Liberties::compute(board);
    let me = state.color;

    let mut mask: Vec<bool> = (0..board.area())
        .map(|pt| board.is_empty(pt) && neighbor_ok(state, &liberties, pt, me))
        .collect();

    if let Some(ko) = state.ko {
        mask[ko] = false;
    }
    mask.push(true);
    mask
}

/// Whether `me` playing at `pt` is allowed by its neighbors.
fn neighbor_ok(state: &GameState, liberties: &Liberties, pt: Point, me: Color) -> bool {
    state.board.neighbors(pt).any(|n| match state.board.cell(n) {
        Cell::Empty => true,
        Cell::Owned(color, id) if color == me => liberties.count(id) > 1,
        Cell::Owned(_, id) => liberties.in_atari(id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, parse_coord};
    use crate::position::apply_action;

    fn play_all(size: usize, moves: &[&str]) -> GameState {
        let mut state = GameState::new(size, 8);
        for mv in moves {
            apply_action(&mut state, parse_coord(mv, size).expect("valid move"));
        }
        state
    }

    fn idx(s: &str, size: usize) -> usize {
        parse_coord(s, size).expect("valid move").index(size)
    }

    #[test]
    fn test_empty_board_all_legal() {
        let mask = legal_action_mask(&GameState::new(5, 8));
        assert_eq!(mask.len(), 26);
        assert!(mask.iter().all(|&m| m));
    }

    #[test]
    fn test_occupied_illegal() {
        let state = play_all(5, &["C3"]);
        let mask = legal_action_mask(&state);
        assert!(!mask[idx("C3", 5)]);
        assert!(mask[Action::Pass.index(5)]);
    }

    #[test]
    fn test_suicide_illegal() {
        // Black A2 and B1; A1 is suicide for White
        let state = play_all(5, &["A2", "pass", "B1"]);
        let mask = legal_action_mask(&state);
        assert!(!mask[idx("A1", 5)]);
    }

    #[test]
    fn test_own_eye_filling_legal_with_liberties() {
        // Black A2, B1 are separate chains with 2 liberties each
        let state = play_all(5, &["A2", "pass", "B1", "pass"]);
        let mask = legal_action_mask(&state);
        assert!(mask[idx("A1", 5)]);
    }

    #[test]
    fn test_capture_makes_surrounded_point_legal() {
        // A1 touches only White A2 and B1; A2 has A1 as its last liberty
        let state = play_all(5, &["A3", "A2", "B2", "B1"]);
        let mask = legal_action_mask(&state);
        assert!(mask[idx("A1", 5)]);

        // Once A2 has a second liberty, A1 is plain suicide
        let state = play_all(5, &["A3", "A2", "B3", "B1"]);
        let mask = legal_action_mask(&state);
        assert!(!mask[idx("A1", 5)]);
    }

    #[test]
    fn test_ko_point_illegal_for_one_ply() {
        let state = play_all(
            5,
            &["B5", "C5", "A4", "D4", "B3", "C3", "pass", "B4", "C4"],
        );
        let b4 = idx("B4", 5);
        assert_eq!(state.ko(), Some(b4));
        assert!(!legal_action_mask(&state)[b4]);

        let mut later = state.clone();
        apply_action(&mut later, Action::Pass);
        apply_action(&mut later, Action::Pass);
        assert!(legal_action_mask(&later)[b4]);
    }
}
