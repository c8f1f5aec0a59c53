//! Engine worker thread.
//!
//! The worker owns an `Engine` and drains a request channel in arrival
//! order. A long `ChooseMove` delays the requests queued behind it; there
//! is no cancellation.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};

use super::{Engine, EngineConfig, EngineError, Request, Response};

/// Worker thread stack size (32 MB); search recursion is deep at high
/// branch counts.
const WORKER_STACK_SIZE: usize = 32 * 1024 * 1024;

enum Message {
    Request {
        request: Request,
        reply: Sender<Response>,
    },
    Shutdown,
}

/// Cloneable sender side of a worker.
#[derive(Clone, Debug)]
pub struct EngineHandle {
    sender: Sender<Message>,
}

impl EngineHandle {
    /// Queue a request; the response arrives on the returned receiver.
    pub fn submit(&self, request: Request) -> Result<Receiver<Response>, EngineError> {
        let (reply, response) = bounded(1);
        self.sender
            .send(Message::Request { request, reply })
            .map_err(|_| EngineError::Disconnected)?;
        Ok(response)
    }

    /// Queue a request and wait for its response.
    pub fn call(&self, request: Request) -> Result<Response, EngineError> {
        self.submit(request)?
            .recv()
            .map_err(|_| EngineError::Disconnected)
    }
}

/// A running engine thread.
#[derive(Debug)]
pub struct EngineWorker {
    handle: EngineHandle,
    thread: JoinHandle<()>,
}

impl EngineWorker {
    /// Start a worker thread named `engine`.
    pub fn spawn(config: EngineConfig) -> io::Result<Self> {
        let (sender, receiver) = unbounded();
        let thread = thread::Builder::new()
            .name("engine".to_string())
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || run(Engine::new(config), &receiver))?;
        Ok(EngineWorker {
            handle: EngineHandle { sender },
            thread,
        })
    }

    #[must_use]
    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Stop after the requests already queued and wait for the thread.
    /// Handles still held elsewhere get `Disconnected` afterwards.
    pub fn shutdown(self) {
        let _ = self.handle.sender.send(Message::Shutdown);
        if self.thread.join().is_err() {
            log::warn!("engine worker panicked");
        }
    }
}

fn run(mut engine: Engine, receiver: &Receiver<Message>) {
    log::debug!("engine worker started");
    for message in receiver {
        match message {
            Message::Request { request, reply } => {
                let response = engine.handle(request);
                // the caller may have stopped waiting
                let _ = reply.send(response);
            }
            Message::Shutdown => break,
        }
    }
    log::debug!("engine worker stopped");
}
