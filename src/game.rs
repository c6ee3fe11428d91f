//! The engine facade: a fixed rule configuration plus pure transitions.
//!
//! [`Game`] holds only the configuration. Every operation takes a
//! [`GameState`] by reference and, for [`Game::step`], returns a new value,
//! so independent games never share mutable data.

use crate::board::{Action, Color};
use crate::config::{ConfigError, GameConfig};
use crate::legality;
use crate::observe::{self, Observation};
use crate::position::{GameState, apply_action};
use crate::scoring;

/// Rules engine for one board size, komi and history depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn komi(&self) -> f32 {
        self.config.komi
    }

    /// Number of actions: one per point plus PASS.
    pub fn num_actions(&self) -> usize {
        self.config.size * self.config.size + 1
    }

    /// Empty board, Black to move, history filled with unplayed slots.
    pub fn init(&self) -> GameState {
        GameState::new(self.config.size, self.config.history_length)
    }

    /// The state after `action`; `state` itself is left untouched.
    ///
    /// `action` must be legal in `state` (see [`Game::legal_action_mask`]);
    /// legality is not checked again here.
    pub fn step(&self, state: &GameState, action: Action) -> GameState {
        let mut next = state.clone();
        apply_action(&mut next, action);
        next
    }

    /// Like [`Game::step`] but with a flat action index (`size²` is PASS).
    pub fn step_index(&self, state: &GameState, index: usize) -> GameState {
        let action = Action::from_index(index, self.config.size).unwrap_or_else(|| {
            panic!("action index {index} out of range 0..={}", self.num_actions() - 1)
        });
        self.step(state, action)
    }

    pub fn legal_action_mask(&self, state: &GameState) -> Vec<bool> {
        legality::legal_action_mask(state)
    }

    /// Legal actions in index order, PASS last.
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        self.legal_action_mask(state)
            .iter()
            .enumerate()
            .filter(|(_, legal)| **legal)
            .filter_map(|(i, _)| Action::from_index(i, self.config.size))
            .collect()
    }

    pub fn is_terminal(&self, state: &GameState) -> bool {
        scoring::is_terminal(state)
    }

    /// (Black, White) area scores, before komi.
    pub fn area_scores(&self, state: &GameState) -> (f32, f32) {
        scoring::area_scores(state)
    }

    /// (Black, White) rewards, each +1 or -1.
    pub fn terminal_values(&self, state: &GameState) -> (f32, f32) {
        scoring::terminal_values(state, self.config.komi)
    }

    /// Feature planes from `perspective`, or from the side to move if `None`.
    pub fn observe(&self, state: &GameState, perspective: Option<Color>) -> Observation {
        observe::observe(state, perspective.unwrap_or(state.color()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Game {
        Game::new(GameConfig::default().with_size(5).with_komi(0.5)).expect("valid config")
    }

    #[test]
    fn test_new_validates() {
        assert!(Game::new(GameConfig::default().with_size(0)).is_err());
        assert!(Game::new(GameConfig::default().with_history_length(0)).is_err());
        assert_eq!(Game::default().size(), 19);
        assert_eq!(Game::default().num_actions(), 362);
    }

    #[test]
    fn test_step_is_pure() {
        let game = small();
        let state = game.init();
        let before = state.clone();
        let next = game.step(&state, Action::Play(12));
        assert_eq!(state, before);
        assert_ne!(next, state);
        assert_eq!(next.board().stone_at(12), Some(Color::Black));
    }

    #[test]
    fn test_step_index_pass() {
        let game = small();
        let state = game.step_index(&game.init(), 25);
        assert_eq!(state.consecutive_passes(), 1);
    }

    #[test]
    fn test_legal_actions_lists_pass_last() {
        let game = small();
        let state = game.step(&game.init(), Action::Play(0));
        let actions = game.legal_actions(&state);
        assert_eq!(actions.len(), 25);
        assert_eq!(actions.last(), Some(&Action::Pass));
        assert!(!actions.contains(&Action::Play(0)));
    }

    #[test]
    fn test_observe_defaults_to_side_to_move() {
        let game = small();
        let state = game.step(&game.init(), Action::Play(12));
        assert_eq!(game.observe(&state, None), game.observe(&state, Some(Color::White)));
    }

    #[test]
    fn test_two_passes_white_wins_on_komi() {
        let game = small();
        let state = game.step(&game.init(), Action::Pass);
        let state = game.step(&state, Action::Pass);
        assert!(game.is_terminal(&state));
        assert_eq!(game.terminal_values(&state), (-1.0, 1.0));
    }
}
