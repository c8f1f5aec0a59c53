//! Text commands for the line-oriented host.

use log::LevelFilter;

use super::{Reply, Request};
use crate::board::{Color, GridDiagram, PositionKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to the engine as-is
    Engine(Request),
    /// Legal moves of whichever side is to move
    LegalForTurn,
    /// Search, then play the chosen move
    Go,
    /// Change the host's log level
    Log(LevelFilter),
    Help,
    Quit,
    /// Recognized command with unusable arguments
    Invalid { line: String, reason: String },
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  new                      start a new game
  move <tokens...>         play moves, e.g. 'move e2e4 e7e5' or 'move O-O'
  undo                     take back one move
  legal [white|black]      list legal moves
  check <side>             is <side> in check
  eval <side>              static evaluation for <side>
  go                       search and play a move
  export                   print the move list
  board                    print the board
  turn | status | depth    game state queries
  points <side>            material points for <side>
  hash                     print the position key
  key <hex>                load a position key
  set <name> <value>       depth | branch | evalmemo | legalmemo
  log <level>              off | error | warn | info | debug | trace
  quit";

fn parse_side(word: Option<&&str>) -> Option<Color> {
    match word.map(|w| w.to_ascii_lowercase()).as_deref() {
        Some("white" | "w") => Some(Color::White),
        Some("black" | "b") => Some(Color::Black),
        _ => None,
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let invalid = |reason: &str| Command::Invalid {
        line: trimmed.to_string(),
        reason: reason.to_string(),
    };
    let sided = |make: fn(Color) -> Request| match parse_side(parts.get(1)) {
        Some(color) => Command::Engine(make(color)),
        None => invalid("expected 'white' or 'black'"),
    };

    let cmd = match first {
        "new" => Command::Engine(Request::NewGame),
        "move" if parts.len() > 1 => Command::Engine(Request::LoadGame(parts[1..].join(" "))),
        "move" => invalid("expected at least one move"),
        "undo" => Command::Engine(Request::UndoMove),
        "legal" if parts.len() == 1 => Command::LegalForTurn,
        "legal" => sided(Request::LegalMoves),
        "check" => sided(Request::InCheck),
        "eval" => sided(Request::Evaluate),
        "points" => sided(Request::Points),
        "go" => Command::Go,
        "export" => Command::Engine(Request::ExportGame),
        "board" => Command::Engine(Request::Grid),
        "turn" => Command::Engine(Request::Turn),
        "status" => Command::Engine(Request::Status),
        "depth" => Command::Engine(Request::Depth),
        "hash" => Command::Engine(Request::Hash),
        "key" => match parts.get(1).map(|hex| hex.parse::<PositionKey>()) {
            Some(Ok(key)) => Command::Engine(Request::LoadKey(key)),
            Some(Err(err)) => invalid(&err.to_string()),
            None => invalid("expected a position key"),
        },
        "set" => match (parts.get(1), parts.get(2)) {
            (Some(name), Some(value)) => Command::Engine(Request::SetOption {
                name: (*name).to_string(),
                value: (*value).to_string(),
            }),
            _ => invalid("expected 'set <name> <value>'"),
        },
        "log" => match parts.get(1).map(|level| level.parse::<LevelFilter>()) {
            Some(Ok(level)) => Command::Log(level),
            _ => invalid("expected a log level"),
        },
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Human-readable form of a reply.
#[must_use]
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Done => "ok".to_string(),
        Reply::Undone(Some(mv)) => format!("undone {mv}"),
        Reply::Undone(None) => "nothing to undo".to_string(),
        Reply::Moves(moves) => {
            let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
            format!("{} moves: {}", moves.len(), list.join(" "))
        }
        Reply::Flag(flag) => flag.to_string(),
        Reply::Score(score) => format!("{score:.4}"),
        Reply::Search(result) => format!(
            "bestmove {} score {:.4} depth {} nodes {} evals {} time {}ms",
            result
                .best_move
                .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            result.score,
            result.depth,
            result.nodes,
            result.evaluations,
            result.elapsed.as_millis()
        ),
        Reply::Loaded(count) => format!("played {count} moves"),
        Reply::Game(text) if text.is_empty() => "(no moves)".to_string(),
        Reply::Game(text) => text.clone(),
        Reply::Turn(color) => format!("{color} to move"),
        Reply::Grid(grid) => GridDiagram(grid).to_string(),
        Reply::History(moves) => {
            let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
            list.join(" ")
        }
        Reply::Points(points) => points.to_string(),
        Reply::Depth(depth) => depth.to_string(),
        Reply::Status(status) => format!("{status:?}"),
        Reply::Key(key) => key.to_string(),
        Reply::OptionSet(option) => format!("set {option:?}"),
    }
}
