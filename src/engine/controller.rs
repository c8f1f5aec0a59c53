//! Engine instance: one board plus its settings.

use super::{EngineConfig, EngineError, EngineOption, Reply, Request, Response};
use crate::board::{Board, HistoryEntry};

/// Owns a board and answers requests against it, one at a time.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            board: Board::new().with_memo_capacity(config.eval_memo_slots, config.legal_memo_slots),
            config,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process one request. Failures are reported in the response and
    /// leave the board as it was.
    pub fn handle(&mut self, request: Request) -> Response {
        let op = request.operation();
        log::trace!("request {op}");
        let result = self.dispatch(request);
        if let Err(err) = &result {
            log::warn!("{op} refused: {err}");
        }
        Response { op, result }
    }

    fn dispatch(&mut self, request: Request) -> Result<Reply, EngineError> {
        let board = &mut self.board;
        let reply = match request {
            Request::ApplyMove(mv) => {
                board.apply_move(&mv)?;
                Reply::Done
            }
            Request::UndoMove => Reply::Undone(board.undo_move()),
            Request::LegalMoves(color) => Reply::Moves(board.legal_moves(color)),
            Request::InCheck(color) => Reply::Flag(board.in_check(color)),
            Request::Evaluate(color) => Reply::Score(board.evaluate(color)),
            Request::ChooseMove => Reply::Search(board.choose_move_with(&self.config.search)),
            Request::LoadGame(text) => Reply::Loaded(board.load_game(&text)?),
            Request::ExportGame => Reply::Game(board.export_game()),
            Request::Turn => Reply::Turn(board.turn()),
            Request::Grid => Reply::Grid(*board.grid()),
            Request::History => {
                Reply::History(board.history().iter().map(HistoryEntry::mv).collect())
            }
            Request::Points(color) => Reply::Points(board.material_points(color)),
            Request::Depth => Reply::Depth(board.search_depth()),
            Request::Status => Reply::Status(board.status()),
            Request::Hash => Reply::Key(board.hash()),
            Request::LoadKey(key) => {
                self.board = Board::from_key(&key)?
                    .with_memo_capacity(self.config.eval_memo_slots, self.config.legal_memo_slots);
                Reply::Done
            }
            Request::NewGame => {
                self.board = Board::new()
                    .with_memo_capacity(self.config.eval_memo_slots, self.config.legal_memo_slots);
                Reply::Done
            }
            Request::SetOption { name, value } => {
                let option = EngineOption::parse(&name, &value)?;
                if option.apply(&mut self.config) {
                    self.board
                        .set_memo_capacity(self.config.eval_memo_slots, self.config.legal_memo_slots);
                }
                log::debug!("option {option:?} set");
                Reply::OptionSet(option)
            }
        };
        Ok(reply)
    }
}
