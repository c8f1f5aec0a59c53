use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::EngineConfig;

/// Largest accepted memo size, in slots.
pub const MAX_MEMO_SLOTS: usize = 1 << 24;

/// A runtime setting change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineOption {
    /// Fixed search depth, or `None` for adaptive
    Depth(Option<u32>),
    /// Root branching factor
    Branch(usize),
    EvalMemo(usize),
    LegalMemo(usize),
}

/// Error type for rejected `SetOption` requests
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl EngineOption {
    /// Parse a name/value pair. Names are case-insensitive.
    pub fn parse(name: &str, value: &str) -> Result<Self, OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.trim();
        let invalid = || OptionError::InvalidValue {
            name: normalized.clone(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "depth" => {
                if value.eq_ignore_ascii_case("auto") {
                    Ok(EngineOption::Depth(None))
                } else {
                    value
                        .parse::<u32>()
                        .map(|d| EngineOption::Depth(Some(d)))
                        .map_err(|_| invalid())
                }
            }
            "branch" => match value.parse::<usize>() {
                Ok(branch) if branch > 0 => Ok(EngineOption::Branch(branch)),
                _ => Err(invalid()),
            },
            "evalmemo" => match value.parse::<usize>() {
                Ok(slots) if slots <= MAX_MEMO_SLOTS => Ok(EngineOption::EvalMemo(slots)),
                _ => Err(invalid()),
            },
            "legalmemo" => match value.parse::<usize>() {
                Ok(slots) if slots <= MAX_MEMO_SLOTS => Ok(EngineOption::LegalMemo(slots)),
                _ => Err(invalid()),
            },
            _ => Err(OptionError::UnknownOption {
                name: normalized.clone(),
            }),
        }
    }

    /// Write the option into `config`. Returns true when the memo tables
    /// need rebuilding.
    pub(crate) fn apply(self, config: &mut EngineConfig) -> bool {
        match self {
            EngineOption::Depth(depth) => {
                config.search.depth = depth;
                false
            }
            EngineOption::Branch(branch) => {
                config.search.branch = branch;
                false
            }
            EngineOption::EvalMemo(slots) => {
                let changed = config.eval_memo_slots != slots;
                config.eval_memo_slots = slots;
                changed
            }
            EngineOption::LegalMemo(slots) => {
                let changed = config.legal_memo_slots != slots;
                config.legal_memo_slots = slots;
                changed
            }
        }
    }
}
