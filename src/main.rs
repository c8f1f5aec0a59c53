use std::fmt;
use std::io::{self, BufRead, Write};

use log::LevelFilter;

use minimax_chess::engine::command::{parse_command, render_reply, Command, HELP};
use minimax_chess::engine::{EngineError, EngineHandle, Reply, Request};
use minimax_chess::{logger, EngineConfig, EngineWorker};

fn print_response(handle: &EngineHandle, request: Request) -> Option<Reply> {
    match handle.call(request) {
        Ok(response) => match response.result {
            Ok(reply) => {
                println!("{}", render_reply(&reply));
                Some(reply)
            }
            Err(err) => {
                println!("error: {} failed: {err}", response.op);
                None
            }
        },
        Err(err) => {
            println!("error: {err}");
            None
        }
    }
}

/// Failure of a host-side query.
enum QueryError {
    Engine(EngineError),
    /// The engine answered with a reply of the wrong kind
    UnexpectedReply(Reply),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Engine(err) => write!(f, "{err}"),
            QueryError::UnexpectedReply(reply) => write!(f, "unexpected reply {reply:?}"),
        }
    }
}

impl From<EngineError> for QueryError {
    fn from(err: EngineError) -> Self {
        QueryError::Engine(err)
    }
}

fn turn(handle: &EngineHandle) -> Result<minimax_chess::Color, QueryError> {
    match handle.call(Request::Turn)?.result? {
        Reply::Turn(color) => Ok(color),
        other => Err(QueryError::UnexpectedReply(other)),
    }
}

fn main() {
    if let Err(err) = logger::init(LevelFilter::Warn) {
        eprintln!("logger unavailable: {err}");
    }

    let worker = match EngineWorker::spawn(EngineConfig::default()) {
        Ok(worker) => worker,
        Err(err) => {
            eprintln!("failed to start engine: {err}");
            std::process::exit(1);
        }
    };
    let handle = worker.handle();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Engine(request) => {
                print_response(&handle, request);
            }
            Command::LegalForTurn => match turn(&handle) {
                Ok(color) => {
                    print_response(&handle, Request::LegalMoves(color));
                }
                Err(err) => println!("error: {err}"),
            },
            Command::Go => {
                if let Some(Reply::Search(result)) = print_response(&handle, Request::ChooseMove) {
                    if let Some(mv) = result.best_move {
                        print_response(&handle, Request::ApplyMove(mv));
                    }
                    if let Some(Reply::Status(status)) = print_response(&handle, Request::Status) {
                        if status.is_over() {
                            println!("game over");
                        }
                    }
                }
            }
            Command::Log(level) => {
                logger::set_level(level);
                println!("log level {level}");
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Invalid { line, reason } => println!("error: '{line}': {reason}"),
            Command::Unknown(line) => println!("error: unknown command '{line}' (try 'help')"),
        }
        let _ = io::stdout().flush();
    }

    drop(handle);
    worker.shutdown();
}
