//! Scripted fakes for the console and command-runner ports

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::domain::ports::{CommandOutcome, CommandRunner, CommandSpec, Console};
use crate::error::{InstallerError, InstallerResult};

#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Input(String),
    Password(String),
}

pub fn confirm(value: bool) -> Answer {
    Answer::Confirm(value)
}

/// An empty string accepts the prompt default.
pub fn input(value: impl Into<String>) -> Answer {
    Answer::Input(value.into())
}

pub fn password(value: impl Into<String>) -> Answer {
    Answer::Password(value.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

/// Console that replays a fixed list of answers and records everything.
///
/// Running out of answers returns `Interrupted`, like a user pressing Ctrl-C.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: RefCell<VecDeque<Answer>>,
    prompts: RefCell<Vec<String>>,
    messages: RefCell<Vec<(Level, String)>>,
}

impl ScriptedConsole {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn asked(&self, needle: &str) -> bool {
        self.prompts.borrow().iter().any(|p| p.contains(needle))
    }

    pub fn said(&self, level: Level, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> InstallerResult<Answer> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(InstallerError::Interrupted)
    }

    fn record(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl Console for ScriptedConsole {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn success(&self, message: &str) {
        self.record(Level::Success, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }

    fn confirm(&self, prompt: &str, _default: bool) -> InstallerResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => panic!("prompt {prompt:?} expected a confirm answer, got {other:?}"),
        }
    }

    fn input(&self, prompt: &str, default: &str) -> InstallerResult<String> {
        match self.next(prompt)? {
            Answer::Input(value) if value.is_empty() => Ok(default.to_string()),
            Answer::Input(value) => Ok(value),
            other => panic!("prompt {prompt:?} expected an input answer, got {other:?}"),
        }
    }

    fn password(&self, prompt: &str) -> InstallerResult<String> {
        match self.next(prompt)? {
            Answer::Password(value) => Ok(value),
            other => panic!("prompt {prompt:?} expected a password answer, got {other:?}"),
        }
    }
}

/// Runner that records every command and fails the chosen programs.
#[derive(Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<CommandSpec>>,
    failing: Vec<String>,
    unspawnable: Vec<String>,
    interrupting: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands whose rendered line contains `needle` exit with status 1.
    pub fn failing(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    /// Commands whose rendered line contains `needle` cannot be started.
    pub fn unspawnable(mut self, needle: &str) -> Self {
        self.unspawnable.push(needle.to_string());
        self
    }

    /// Commands whose rendered line contains `needle` end in a Ctrl-C.
    pub fn interrupting(mut self, needle: &str) -> Self {
        self.interrupting.push(needle.to_string());
        self
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn ran(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> InstallerResult<CommandOutcome> {
        self.commands.borrow_mut().push(command.clone());
        let line = command.to_string();
        if self.interrupting.iter().any(|n| line.contains(n.as_str())) {
            return Err(InstallerError::Interrupted);
        }
        if self.unspawnable.iter().any(|n| line.contains(n.as_str())) {
            return Err(InstallerError::CommandSpawn {
                program: command.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        if self.failing.iter().any(|n| line.contains(n.as_str())) {
            return Ok(CommandOutcome::Failed { code: Some(1) });
        }
        Ok(CommandOutcome::Success)
    }
}

/// Log lines at `WARN` and above, captured on the current thread only.
#[derive(Clone, Default)]
pub struct WarnLog(Arc<Mutex<Vec<u8>>>);

impl WarnLog {
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for WarnLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
