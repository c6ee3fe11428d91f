//! gosim: a deterministic Go rules engine for self-play and training loops.
//!
//! The engine implements area scoring with simple ko and a bounded-window
//! approximation of positional superko. Every transition is a pure function
//! of `(state, action)`, so any number of games can be simulated side by side.
//!
//! ## Modules
//!
//! - [`constants`] - Defaults and encoding constants
//! - [`config`] - Board size, komi and history depth, with validation
//! - [`board`] - Board grid, cell tags, actions and coordinates
//! - [`chains`] - Chain liberties, capture removal and merging
//! - [`position`] - Game state and move execution (captures, ko)
//! - [`legality`] - Legal action mask
//! - [`superko`] - Board history ring and repetition check
//! - [`scoring`] - Game end and area scoring
//! - [`observe`] - Feature planes for neural network input
//! - [`game`] - The public engine facade
//! - [`playout`] - Seeded random self-play
//!
//! ## Example
//!
//! ```
//! use gosim::board::{parse_coord, Action};
//! use gosim::config::GameConfig;
//! use gosim::game::Game;
//!
//! let game = Game::new(GameConfig::default().with_size(9)).unwrap();
//! let mut state = game.init();
//!
//! // Play a move, then both sides pass
//! state = game.step(&state, parse_coord("E5", 9).unwrap());
//! state = game.step(&state, Action::Pass);
//! state = game.step(&state, Action::Pass);
//!
//! assert!(game.is_terminal(&state));
//! assert_eq!(game.terminal_values(&state), (1.0, -1.0));
//! ```

pub mod board;
pub mod chains;
pub mod config;
pub mod constants;
pub mod game;
pub mod legality;
pub mod observe;
pub mod playout;
pub mod position;
pub mod scoring;
pub mod superko;

pub use board::{Action, Color};
pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use position::GameState;
