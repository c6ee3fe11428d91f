//! Default engine parameters and encoding constants.
//!
//! Board size, komi and history depth are chosen at construction time (see
//! [`crate::config::GameConfig`]); the values here are the defaults and the
//! hard bounds that construction validates against.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 19;

/// Smallest accepted board size.
pub const MIN_SIZE: usize = 5;

/// Largest accepted board size. Liberty sets are sized for this.
pub const MAX_SIZE: usize = 19;

/// Number of cells on the largest board.
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

// =============================================================================
// Rule Parameters
// =============================================================================

/// Default komi (compensation points for White).
pub const DEFAULT_KOMI: f32 = 7.5;

/// Default number of board snapshots kept for superko detection and observation.
pub const DEFAULT_HISTORY: usize = 8;

// =============================================================================
// History Snapshot Values
// =============================================================================

/// Black stone in a history snapshot.
pub const TRIT_BLACK: i8 = 1;

/// White stone in a history snapshot.
pub const TRIT_WHITE: i8 = -1;

/// Empty point in a history snapshot.
pub const TRIT_EMPTY: i8 = 0;

/// Slot that has not been written yet. Never equal to a real snapshot value.
pub const TRIT_UNPLAYED: i8 = 2;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Row/column offsets to orthogonal neighbors.
/// Order: North, South, West, East
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
