//! Game event logger
//!
//! The engine emits one human-readable notification per significant event
//! (era transitions, turn outcomes, forced payouts, game over with scores).
//! Consumers pick the destination: stdout for interactive play, the in-memory
//! buffer for tests and determinism comparisons, or both.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns, rounds, and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - all actions and failures
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
}

/// Read-only access to captured log entries.
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }

    /// Messages joined with newlines, for whole-log comparisons.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in self.guard.iter() {
            out.push_str(&entry.message);
            out.push('\n');
        }
        out
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Centralized sink for engine notifications.
///
/// Interior mutability lets the engine log while other parts of the state are
/// borrowed; no messages are dropped below the configured verbosity until
/// emission time, so tests comparing buffers see exactly what a stdout
/// consumer would have seen.
#[derive(Debug, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        GameLogger::default()
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            ..GameLogger::default()
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Emit a message at the given level; suppressed when above the
    /// configured verbosity.
    pub fn log(&self, level: VerbosityLevel, message: &str) {
        if level > self.verbosity {
            return;
        }
        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            println!("{message}");
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }
    }

    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message);
    }

    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message);
    }

    /// Captured entries (Memory/Both modes only).
    pub fn entries(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.buffer.borrow(),
        }
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}
