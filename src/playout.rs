//! Random self-play.
//!
//! A playout picks uniformly among the legal actions (PASS included) until
//! the game ends or a move limit is hit. The generator is seeded, so the same
//! seed replays the same game.

use crate::board::Action;
use crate::game::Game;
use crate::position::GameState;

/// Outcome of one random game.
#[derive(Debug, Clone)]
pub struct PlayoutResult {
    /// Final position
    pub state: GameState,
    /// Actions played, in order
    pub moves: Vec<Action>,
    /// (Black, White) rewards of the final position
    pub rewards: (f32, f32),
    /// Whether the game ended by passes or superko rather than the move limit
    pub finished: bool,
}

/// Pick a random legal action for the side to move.
pub fn choose_random_action(game: &Game, state: &GameState, rng: &mut fastrand::Rng) -> Action {
    let actions = game.legal_actions(state);
    // PASS is always legal, so the list is never empty
    actions[rng.usize(..actions.len())]
}

/// Play random legal actions from the initial position.
pub fn random_game(game: &Game, seed: u64, max_moves: usize) -> PlayoutResult {
    random_game_from(game, game.init(), seed, max_moves)
}

/// Play random legal actions from `state` until the game ends or
/// `max_moves` actions have been played.
pub fn random_game_from(
    game: &Game,
    mut state: GameState,
    seed: u64,
    max_moves: usize,
) -> PlayoutResult {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut moves = Vec::new();

    while !game.is_terminal(&state) && moves.len() < max_moves {
        let action = choose_random_action(game, &state, &mut rng);
        state = game.step(&state, action);
        moves.push(action);
    }

    let finished = game.is_terminal(&state);
    let rewards = game.terminal_values(&state);
    PlayoutResult {
        state,
        moves,
        rewards,
        finished,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn small() -> Game {
        Game::new(GameConfig::default().with_size(5)).expect("valid config")
    }

    #[test]
    fn test_same_seed_same_game() {
        let game = small();
        let a = random_game(&game, 42, 200);
        let b = random_game(&game, 42, 200);
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.state, b.state);
        assert_eq!(a.rewards, b.rewards);
    }

    #[test]
    fn test_move_limit() {
        let game = small();
        let result = random_game(&game, 7, 3);
        assert!(result.moves.len() <= 3);
        if !result.finished {
            assert_eq!(result.moves.len(), 3);
        }
    }

    #[test]
    fn test_rewards_zero_sum() {
        let game = small();
        for seed in 0..20 {
            let result = random_game(&game, seed, 500);
            let (b, w) = result.rewards;
            assert_eq!(b + w, 0.0);
            assert!(b == 1.0 || b == -1.0);
        }
    }
}
