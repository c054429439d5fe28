extern crate core;

pub mod event;
pub mod symbol;

pub use event::{
    AliasEvent, DocumentEndEvent, DocumentStartEvent, Event, EventKind, EventRecord,
    MappingEndEvent, MappingStartEvent, ScalarEvent, SequenceEndEvent, SequenceStartEvent,
    StreamEndEvent, StreamStartEvent,
};
pub use symbol::{
    code, normalize_collection_style, normalize_encoding, normalize_scalar_style,
    CollectionStyle, Encoding, ScalarStyle,
};

use std::fmt::{Display, Formatter};

/// Position of an event boundary in the input.
///
/// `line` and `column` start from zero, `index` is the absolute character
/// offset from the start of the input.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
    pub index: usize,
}

impl Mark {
    #[must_use]
    pub const fn new(line: usize, column: usize, index: usize) -> Self {
        Mark {
            line,
            column,
            index,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(line, column, index) == ({}, {}, {})",
            self.line, self.column, self.index
        )
    }
}
