use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::io;

use thiserror::Error;
use yamlet_common::{EventKind, Mark};

/// A specialized `Result` type where the error is hard-wired to [`Error`].
///
/// [`Error`]: enum.Error.html
pub type YamletResult<T> = Result<T, Error>;

/// Failure of a parse pass.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine could not produce the next event. The pass cannot resume.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// A listener rejected an event. Remaining listeners and events were skipped.
    #[error("{kind} listener failed: {source}")]
    Listener {
        kind: EventKind,
        #[source]
        source: ListenerError,
    },
    /// `parse` was called on a parser that already ran its pass.
    #[error("parser already ran its pass")]
    AlreadyParsed,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EngineErrorKind {
    Memory,
    Reader,
    Scanner,
    Parser,
    Other,
}

impl Display for EngineErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EngineErrorKind::Memory => "memory",
            EngineErrorKind::Reader => "reader",
            EngineErrorKind::Scanner => "scanner",
            EngineErrorKind::Parser => "parser",
            EngineErrorKind::Other => "engine",
        })
    }
}

/// Error reported by the low-level engine.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{kind} error: {problem}{}", position(.context.as_deref(), .mark.as_ref()))]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub problem: String,
    /// What the engine was doing when it failed, e.g. `while parsing a flow sequence`.
    pub context: Option<String>,
    pub mark: Option<Mark>,
}

impl EngineError {
    pub fn new(kind: EngineErrorKind, problem: impl Into<String>) -> Self {
        EngineError {
            kind,
            problem: problem.into(),
            context: None,
            mark: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.mark = Some(mark);
        self
    }
}

fn position(context: Option<&str>, mark: Option<&Mark>) -> String {
    let mut out = String::new();
    if let Some(context) = context {
        out.push_str(", ");
        out.push_str(context);
    }
    if let Some(mark) = mark {
        out.push_str(&format!(" at line {} column {}", mark.line + 1, mark.column + 1));
    }
    out
}

/// Failure signalled by a listener callback.
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct ListenerError {
    inner: Box<dyn StdError + Send + Sync>,
}

impl ListenerError {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ListenerError {
            inner: Box::new(error),
        }
    }

    pub fn msg(message: impl Into<String>) -> Self {
        ListenerError {
            inner: message.into().into(),
        }
    }
}

impl From<&str> for ListenerError {
    fn from(message: &str) -> Self {
        ListenerError::msg(message)
    }
}

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        ListenerError::msg(message)
    }
}

impl From<io::Error> for ListenerError {
    /// Wraps an I/O failure of a listener writing events out
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn from(error: io::Error) -> Self {
        ListenerError::new(error)
    }
}

impl From<std::fmt::Error> for ListenerError {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn from(error: std::fmt::Error) -> Self {
        ListenerError::new(error)
    }
}
