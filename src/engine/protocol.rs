//! Request/response messages exchanged with an engine.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{EngineOption, OptionError};
use crate::board::{
    Color, GameStatus, KeyError, Move, MoveError, NotationError, PieceCode, PositionKey,
    SearchResult,
};

/// One operation on the engine's board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Request {
    ApplyMove(Move),
    UndoMove,
    LegalMoves(Color),
    InCheck(Color),
    Evaluate(Color),
    ChooseMove,
    LoadGame(String),
    ExportGame,
    Turn,
    Grid,
    History,
    Points(Color),
    Depth,
    Status,
    Hash,
    LoadKey(PositionKey),
    NewGame,
    SetOption { name: String, value: String },
}

/// Name of a request, echoed in its response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    ApplyMove,
    UndoMove,
    LegalMoves,
    InCheck,
    Evaluate,
    ChooseMove,
    LoadGame,
    ExportGame,
    Turn,
    Grid,
    History,
    Points,
    Depth,
    Status,
    Hash,
    LoadKey,
    NewGame,
    SetOption,
}

impl Request {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Request::ApplyMove(_) => Operation::ApplyMove,
            Request::UndoMove => Operation::UndoMove,
            Request::LegalMoves(_) => Operation::LegalMoves,
            Request::InCheck(_) => Operation::InCheck,
            Request::Evaluate(_) => Operation::Evaluate,
            Request::ChooseMove => Operation::ChooseMove,
            Request::LoadGame(_) => Operation::LoadGame,
            Request::ExportGame => Operation::ExportGame,
            Request::Turn => Operation::Turn,
            Request::Grid => Operation::Grid,
            Request::History => Operation::History,
            Request::Points(_) => Operation::Points,
            Request::Depth => Operation::Depth,
            Request::Status => Operation::Status,
            Request::Hash => Operation::Hash,
            Request::LoadKey(_) => Operation::LoadKey,
            Request::NewGame => Operation::NewGame,
            Request::SetOption { .. } => Operation::SetOption,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ApplyMove => "applyMove",
            Operation::UndoMove => "undoMove",
            Operation::LegalMoves => "legalMoves",
            Operation::InCheck => "inCheck",
            Operation::Evaluate => "evaluate",
            Operation::ChooseMove => "chooseMove",
            Operation::LoadGame => "loadGame",
            Operation::ExportGame => "exportGame",
            Operation::Turn => "turn",
            Operation::Grid => "getBoard",
            Operation::History => "getStack",
            Operation::Points => "getPoints",
            Operation::Depth => "getDepth",
            Operation::Status => "status",
            Operation::Hash => "hash",
            Operation::LoadKey => "loadKey",
            Operation::NewGame => "newGame",
            Operation::SetOption => "setOption",
        };
        f.write_str(name)
    }
}

/// Successful result of a request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reply {
    /// Board changed; nothing to report
    Done,
    /// The undone move, if there was one
    Undone(Option<Move>),
    Moves(Vec<Move>),
    Flag(bool),
    Score(f64),
    Search(SearchResult),
    /// Number of moves a move list applied
    Loaded(usize),
    Game(String),
    Turn(Color),
    Grid([[PieceCode; 8]; 8]),
    History(Vec<Move>),
    Points(u32),
    Depth(u32),
    Status(GameStatus),
    Key(PositionKey),
    OptionSet(EngineOption),
}

/// Error type for failed engine requests
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineError {
    Move(MoveError),
    Notation(NotationError),
    Key(KeyError),
    Option(OptionError),
    /// The worker thread is gone
    Disconnected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Move(err) => write!(f, "{err}"),
            EngineError::Notation(err) => write!(f, "{err}"),
            EngineError::Key(err) => write!(f, "{err}"),
            EngineError::Option(err) => write!(f, "{err}"),
            EngineError::Disconnected => write!(f, "Engine worker has shut down"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Move(err) => Some(err),
            EngineError::Notation(err) => Some(err),
            EngineError::Key(err) => Some(err),
            EngineError::Option(err) => Some(err),
            EngineError::Disconnected => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(err: MoveError) -> Self {
        EngineError::Move(err)
    }
}

impl From<NotationError> for EngineError {
    fn from(err: NotationError) -> Self {
        EngineError::Notation(err)
    }
}

impl From<KeyError> for EngineError {
    fn from(err: KeyError) -> Self {
        EngineError::Key(err)
    }
}

impl From<OptionError> for EngineError {
    fn from(err: OptionError) -> Self {
        EngineError::Option(err)
    }
}

/// Answer to one request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    pub op: Operation,
    pub result: Result<Reply, EngineError>,
}
