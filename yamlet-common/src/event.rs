//! Event records delivered to listeners.
//!
//! Every record carries the `start` and `end` [`Mark`] of the event, copied
//! from the engine. Optional strings (anchors, tags, directives) are never
//! `Option`: an absent value is the empty string.

use std::fmt::{Display, Formatter, Write};

use crate::{CollectionStyle, Encoding, Mark, ScalarStyle};

/// Fieldless tag for the ten event kinds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EventKind {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias,
    Scalar,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::StreamStart,
        EventKind::StreamEnd,
        EventKind::DocumentStart,
        EventKind::DocumentEnd,
        EventKind::Alias,
        EventKind::Scalar,
        EventKind::SequenceStart,
        EventKind::SequenceEnd,
        EventKind::MappingStart,
        EventKind::MappingEnd,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::StreamStart => "stream start",
            EventKind::StreamEnd => "stream end",
            EventKind::DocumentStart => "document start",
            EventKind::DocumentEnd => "document end",
            EventKind::Alias => "alias",
            EventKind::Scalar => "scalar",
            EventKind::SequenceStart => "sequence start",
            EventKind::SequenceEnd => "sequence end",
            EventKind::MappingStart => "mapping start",
            EventKind::MappingEnd => "mapping end",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface of the ten event records.
pub trait EventRecord {
    const KIND: EventKind;

    fn start(&self) -> Mark;

    fn end(&self) -> Mark;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamStartEvent {
    pub start: Mark,
    pub end: Mark,
    pub encoding: Encoding,
}

/// Terminal event of a parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamEndEvent {
    pub start: Mark,
    pub end: Mark,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStartEvent {
    pub start: Mark,
    pub end: Mark,
    /// `major.minor` of the `%YAML` directive, empty when absent.
    pub version_directive: String,
    /// Always empty, `%TAG` directives are not surfaced.
    pub tag_directives: String,
    /// `true` when the document has no `---` marker.
    pub implicit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentEndEvent {
    pub start: Mark,
    pub end: Mark,
    /// `true` when the document has no `...` marker.
    pub implicit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasEvent {
    pub start: Mark,
    pub end: Mark,
    pub anchor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarEvent {
    pub start: Mark,
    pub end: Mark,
    pub anchor: String,
    pub tag: String,
    /// Tag may be omitted when the value is presented plain.
    pub plain_implicit: bool,
    /// Tag may be omitted when the value is presented in any non-plain style.
    pub quoted_implicit: bool,
    pub value: String,
    pub style: ScalarStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStartEvent {
    pub start: Mark,
    pub end: Mark,
    pub anchor: String,
    pub tag: String,
    pub implicit: bool,
    pub style: CollectionStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceEndEvent {
    pub start: Mark,
    pub end: Mark,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStartEvent {
    pub start: Mark,
    pub end: Mark,
    pub anchor: String,
    pub tag: String,
    pub implicit: bool,
    pub style: CollectionStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingEndEvent {
    pub start: Mark,
    pub end: Mark,
}

/// One structural event of a YAML stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StreamStart(StreamStartEvent),
    StreamEnd(StreamEndEvent),
    DocumentStart(DocumentStartEvent),
    DocumentEnd(DocumentEndEvent),
    Alias(AliasEvent),
    Scalar(ScalarEvent),
    SequenceStart(SequenceStartEvent),
    SequenceEnd(SequenceEndEvent),
    MappingStart(MappingStartEvent),
    MappingEnd(MappingEndEvent),
}

macro_rules! impl_records {
    ($($variant:ident => $record:ident),+ $(,)?) => {
        $(
            impl EventRecord for $record {
                const KIND: EventKind = EventKind::$variant;

                #[inline]
                fn start(&self) -> Mark {
                    self.start
                }

                #[inline]
                fn end(&self) -> Mark {
                    self.end
                }
            }

            impl From<$record> for Event {
                fn from(record: $record) -> Self {
                    Event::$variant(record)
                }
            }
        )+

        impl Event {
            #[must_use]
            pub fn kind(&self) -> EventKind {
                match self {
                    $(Event::$variant(_) => EventKind::$variant,)+
                }
            }

            #[must_use]
            pub fn start(&self) -> Mark {
                match self {
                    $(Event::$variant(ev) => ev.start,)+
                }
            }

            #[must_use]
            pub fn end(&self) -> Mark {
                match self {
                    $(Event::$variant(ev) => ev.end,)+
                }
            }
        }
    };
}

impl_records! {
    StreamStart => StreamStartEvent,
    StreamEnd => StreamEndEvent,
    DocumentStart => DocumentStartEvent,
    DocumentEnd => DocumentEndEvent,
    Alias => AliasEvent,
    Scalar => ScalarEvent,
    SequenceStart => SequenceStartEvent,
    SequenceEnd => SequenceEndEvent,
    MappingStart => MappingStartEvent,
    MappingEnd => MappingEndEvent,
}

fn write_properties(f: &mut Formatter<'_>, anchor: &str, tag: &str) -> std::fmt::Result {
    if !anchor.is_empty() {
        write!(f, " &{anchor}")?;
    }
    if !tag.is_empty() {
        write!(f, " <{tag}>")?;
    }
    Ok(())
}

fn write_escaped(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    for chr in value.chars() {
        match chr {
            '\\' => f.write_str("\\\\")?,
            '\0' => f.write_str("\\0")?,
            '\x08' => f.write_str("\\b")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            _ => f.write_char(chr)?,
        }
    }
    Ok(())
}

/// Formats the event in yaml-test-suite notation, e.g. `=VAL &a <!t> :x`.
impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::StreamStart(_) => f.write_str("+STR"),
            Event::StreamEnd(_) => f.write_str("-STR"),
            Event::DocumentStart(ev) => {
                f.write_str("+DOC")?;
                if !ev.implicit {
                    f.write_str(" ---")?;
                }
                Ok(())
            }
            Event::DocumentEnd(ev) => {
                f.write_str("-DOC")?;
                if !ev.implicit {
                    f.write_str(" ...")?;
                }
                Ok(())
            }
            Event::Alias(ev) => write!(f, "=ALI *{}", ev.anchor),
            Event::Scalar(ev) => {
                f.write_str("=VAL")?;
                write_properties(f, &ev.anchor, &ev.tag)?;
                write!(f, " {}", ev.style.indicator())?;
                write_escaped(f, &ev.value)
            }
            Event::SequenceStart(ev) => {
                f.write_str("+SEQ")?;
                if ev.style == CollectionStyle::Flow {
                    f.write_str(" []")?;
                }
                write_properties(f, &ev.anchor, &ev.tag)
            }
            Event::SequenceEnd(_) => f.write_str("-SEQ"),
            Event::MappingStart(ev) => {
                f.write_str("+MAP")?;
                if ev.style == CollectionStyle::Flow {
                    f.write_str(" {}")?;
                }
                write_properties(f, &ev.anchor, &ev.tag)
            }
            Event::MappingEnd(_) => f.write_str("-MAP"),
        }
    }
}
