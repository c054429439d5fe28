//! Contract of the low-level engine.
//!
//! An engine turns input into [`RawEvent`]s. Construction initializes it,
//! [`Engine::next_event`] pulls one event and `Drop` tears it down. Raw events
//! borrow from the engine and stay valid until the next pull.

#[cfg(feature = "libyaml")]
mod libyaml;

#[cfg(feature = "libyaml")]
pub use libyaml::LibyamlEngine;

use yamlet_common::Mark;

use crate::error::EngineError;

/// `%YAML major.minor` directive.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VersionDirective {
    pub major: i32,
    pub minor: i32,
}

/// Event as the engine reports it: numeric style codes and optional,
/// borrowed byte strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent<'a> {
    pub start: Mark,
    pub end: Mark,
    pub data: RawEventData<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEventData<'a> {
    /// The engine had nothing to report. Not dispatched.
    Empty,
    StreamStart {
        encoding: u32,
    },
    StreamEnd,
    DocumentStart {
        version: Option<VersionDirective>,
        implicit: bool,
    },
    DocumentEnd {
        implicit: bool,
    },
    Alias {
        anchor: Option<&'a [u8]>,
    },
    Scalar {
        anchor: Option<&'a [u8]>,
        tag: Option<&'a [u8]>,
        /// Length-delimited, may contain NUL bytes.
        value: Option<&'a [u8]>,
        plain_implicit: bool,
        quoted_implicit: bool,
        style: u32,
    },
    SequenceStart {
        anchor: Option<&'a [u8]>,
        tag: Option<&'a [u8]>,
        implicit: bool,
        style: u32,
    },
    SequenceEnd,
    MappingStart {
        anchor: Option<&'a [u8]>,
        tag: Option<&'a [u8]>,
        implicit: bool,
        style: u32,
    },
    MappingEnd,
}

impl<'a> RawEvent<'a> {
    pub fn new(start: Mark, end: Mark, data: RawEventData<'a>) -> Self {
        RawEvent { start, end, data }
    }
}

/// Source of low-level parse events.
pub trait Engine {
    /// Pulls the next event. An error ends the pass, the engine is not
    /// expected to recover from it.
    fn next_event(&mut self) -> Result<RawEvent<'_>, EngineError>;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn next_event(&mut self) -> Result<RawEvent<'_>, EngineError> {
        (**self).next_event()
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn next_event(&mut self) -> Result<RawEvent<'_>, EngineError> {
        (**self).next_event()
    }
}
