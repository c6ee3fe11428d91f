//! Game end detection and area scoring.
//!
//! Area scoring counts stones on the board plus territory. A color's
//! territory is every empty point that cannot reach an opponent stone
//! through a path of empty points.

use std::collections::VecDeque;

use crate::board::{Board, Color};
use crate::position::GameState;

/// Two passes in a row, or a superko repetition, end the game.
pub fn is_terminal(state: &GameState) -> bool {
    state.consecutive_passes >= 2 || state.superko
}

/// Empty points from which no opponent stone of `color` is reachable.
///
/// Flood-fills outward from the opponent's stones through empty points;
/// whatever empty point the fill never reaches is territory.
pub fn territory(board: &Board, color: Color) -> usize {
    let opp = color.opponent();
    let mut reached = vec![false; board.area()];
    let mut queue: VecDeque<usize> = (0..board.area())
        .filter(|&pt| board.stone_at(pt) == Some(opp))
        .collect();

    while let Some(pt) = queue.pop_front() {
        for n in board.neighbors(pt) {
            if board.is_empty(n) && !reached[n] {
                reached[n] = true;
                queue.push_back(n);
            }
        }
    }

    (0..board.area())
        .filter(|&pt| board.is_empty(pt) && !reached[pt])
        .count()
}

/// Stones plus territory for (Black, White).
pub fn area_scores(state: &GameState) -> (f32, f32) {
    let board = &state.board;
    let black = board.count_stones(Color::Black) + territory(board, Color::Black);
    let white = board.count_stones(Color::White) + territory(board, Color::White);
    (black as f32, white as f32)
}

/// Rewards for (Black, White): +1 for the winner, -1 for the loser.
///
/// Black wins when its area minus komi exceeds White's area. After a superko
/// repetition the area count is ignored and the side to move wins, since the
/// previous mover caused the repetition.
pub fn terminal_values(state: &GameState, komi: f32) -> (f32, f32) {
    let winner = if state.superko {
        state.color
    } else {
        let (black, white) = area_scores(state);
        if black - komi > white {
            Color::Black
        } else {
            Color::White
        }
    };

    match winner {
        Color::Black => (1.0, -1.0),
        Color::White => (-1.0, 1.0),
    }
}
