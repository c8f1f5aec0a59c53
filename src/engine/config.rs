#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::SearchConfig;
use crate::memo::{DEFAULT_EVAL_SLOTS, DEFAULT_LEGAL_SLOTS};

/// Construction-time engine settings. Each can be changed later with a
/// `SetOption` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    pub search: SearchConfig,
    /// Evaluation memo size in entries (0 disables)
    pub eval_memo_slots: usize,
    /// Legal-move memo size in entries (0 disables)
    pub legal_memo_slots: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search: SearchConfig::default(),
            eval_memo_slots: DEFAULT_EVAL_SLOTS,
            legal_memo_slots: DEFAULT_LEGAL_SLOTS,
        }
    }
}
