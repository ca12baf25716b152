//! Ready-made event handlers for embedding, logging, and tests
//!
//! Handlers are adapters on the consumer side of the bus; none of them is
//! required by the rules core.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use serde::Serialize;

use crate::{Error, Result};

use super::{
    bus::EventHandler,
    event::{ExecutionContext, GameEvent},
};

/// One recorded emission.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub event: GameEvent,
    pub ctx: ExecutionContext,
}

/// Collects emissions into a shared in-memory log.
///
/// The handler itself is moved into the bus; keep the handle returned by
/// [`RecordingHandler::log`] to inspect what was delivered.
pub struct RecordingHandler {
    log: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        RecordingHandler {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle onto the recorded events.
    pub fn log(&self) -> Arc<Mutex<Vec<RecordedEvent>>> {
        Arc::clone(&self.log)
    }
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for RecordingHandler {
    fn handle(&mut self, event: &GameEvent, ctx: &ExecutionContext) -> Result<()> {
        self.log
            .lock()
            .expect("event log mutex poisoned")
            .push(RecordedEvent {
                event: event.clone(),
                ctx: *ctx,
            });
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonlLine<'a> {
    event: &'a str,
    payload: &'a GameEvent,
    for_ai_simulation: bool,
    is_actual_ai_move: bool,
}

/// Writes each emission as one JSON line.
///
/// Usually registered through `subscribe_real` so the log only contains
/// committed gameplay, but the handler itself writes whatever it is handed.
pub struct JsonlEventWriter {
    writer: BufWriter<File>,
}

impl JsonlEventWriter {
    /// Create a writer targeting `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create event log {:?}", path.as_ref()),
            source,
        })?;
        Ok(JsonlEventWriter {
            writer: BufWriter::new(file),
        })
    }
}

impl EventHandler for JsonlEventWriter {
    fn handle(&mut self, event: &GameEvent, ctx: &ExecutionContext) -> Result<()> {
        let line = JsonlLine {
            event: event.name(),
            payload: event,
            for_ai_simulation: ctx.is_simulation,
            is_actual_ai_move: ctx.is_committed_ai_move,
        };
        serde_json::to_writer(&mut self.writer, &line)?;
        self.writer.write_all(b"\n").map_err(|source| Error::Io {
            operation: "write event log line".to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Prints notable committed events in human terms. Intended for the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleHandler;

impl EventHandler for ConsoleHandler {
    fn handle(&mut self, event: &GameEvent, _ctx: &ExecutionContext) -> Result<()> {
        match event {
            GameEvent::TokenCaptured { position, color } => {
                println!("  {color} token at {position} was captured");
            }
            GameEvent::TokenDeactivated { position, color } => {
                println!("  {color} token at {position} is inactive next turn");
            }
            GameEvent::AiThinking { player } => {
                println!("  {player} is thinking...");
            }
            GameEvent::GameOver { winner, reason } => {
                println!("  game over: {winner} wins ({reason})");
            }
            _ => {}
        }
        Ok(())
    }
}
