//! Feature planes for a policy/value network.
//!
//! For a history of depth `H` the observation has `2H + 1` channels per
//! point: for every history slot (newest first) one plane with the
//! perspective player's stones and one with the opponent's, followed by a
//! constant plane holding 0 for a Black perspective and 1 for White.

use crate::board::Color;
use crate::position::GameState;

/// A `[size][size][channels]` tensor of 0/1 values, flattened row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub size: usize,
    pub channels: usize,
    pub data: Vec<f32>,
}

impl Observation {
    pub fn shape(&self) -> [usize; 3] {
        [self.size, self.size, self.channels]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize, channel: usize) -> f32 {
        self.data[(row * self.size + col) * self.channels + channel]
    }
}

/// Encode the state's history from `perspective`'s point of view.
pub fn observe(state: &GameState, perspective: Color) -> Observation {
    let size = state.size();
    let area = size * size;
    let depth = state.history.depth();
    let channels = 2 * depth + 1;
    let mine = perspective.trit();
    let theirs = perspective.opponent().trit();
    let color_plane = perspective.index() as f32;

    let mut data = vec![0.0; area * channels];
    for (slot, snapshot) in state.history.iter().enumerate() {
        for (pt, &v) in snapshot.iter().enumerate() {
            let base = pt * channels + 2 * slot;
            if v == mine {
                data[base] = 1.0;
            } else if v == theirs {
                data[base + 1] = 1.0;
            }
        }
    }
    for pt in 0..area {
        data[pt * channels + channels - 1] = color_plane;
    }

    Observation {
        size,
        channels,
        data,
    }
}
