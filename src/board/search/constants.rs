//! Search constants.

/// Scale of a checkmate score; the remaining depth multiplies it so
/// quicker mates score higher.
pub const MATE_SCORE: f64 = 1e9;

/// Root branching factor; each level down doubles it.
pub const DEFAULT_BRANCH: usize = 99;

/// Bounds of the adaptive search depth
pub const MIN_DEPTH: u32 = 3;
pub const MAX_DEPTH: u32 = 10;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================

/// Capture that also gives check
pub const CHECKING_CAPTURE_SCORE: i64 = 1 << 50;

/// Non-capturing check
pub const QUIET_CHECK_SCORE: i64 = 1 << 30;
