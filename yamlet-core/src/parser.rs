use std::borrow::Cow;

use log::{debug, error, trace, warn};
use memchr::memchr;
use yamlet_common::{
    normalize_collection_style, normalize_encoding, normalize_scalar_style, AliasEvent,
    DocumentEndEvent, DocumentStartEvent, Event, EventKind, MappingEndEvent, MappingStartEvent,
    ScalarEvent, SequenceEndEvent, SequenceStartEvent, StreamEndEvent, StreamStartEvent,
};

use crate::config::ParserConfig;
use crate::engine::{Engine, RawEvent, RawEventData};
use crate::error::{Error, YamletResult};
use crate::listener::{Listeners, ListenerOutcome, Subscribe};

/// Lifecycle of a [`Parser`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParserState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Drives one pass of an [`Engine`], translating its raw events and
/// dispatching them to the registered listeners.
///
/// Listeners run inline on the calling thread, before the next raw event is
/// requested. They may borrow anything that outlives `'l`.
pub struct Parser<'l, E> {
    engine: E,
    listeners: Listeners<'l>,
    config: ParserConfig,
    state: ParserState,
}

macro_rules! on_kind {
    ($l:lifetime; $($name:ident => $record:ident),+ $(,)?) => {
        $(
            pub fn $name<F, R>(&mut self, callback: F) -> &mut Self
            where
                F: FnMut(&$record) -> R + $l,
                R: ListenerOutcome,
            {
                self.listeners.register(callback);
                self
            }
        )+
    };
}

impl<'l, E: Engine> Parser<'l, E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, ParserConfig::default())
    }

    pub fn with_config(engine: E, config: ParserConfig) -> Self {
        Parser {
            engine,
            listeners: Listeners::new(),
            config,
            state: ParserState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> ParserState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    #[must_use]
    pub fn listeners(&self) -> &Listeners<'l> {
        &self.listeners
    }

    /// Registers a listener for the record type `Rec`.
    pub fn on<Rec, F, R>(&mut self, callback: F) -> &mut Self
    where
        Rec: Subscribe,
        F: FnMut(&Rec) -> R + 'l,
        R: ListenerOutcome,
    {
        self.listeners.register(callback);
        self
    }

    /// Registers a listener that receives every event, after the listeners
    /// registered for its kind.
    pub fn on_event<F, R>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&Event) -> R + 'l,
        R: ListenerOutcome,
    {
        self.listeners.register_any(callback);
        self
    }

    on_kind! {
        'l;
        on_stream_start => StreamStartEvent,
        on_stream_end => StreamEndEvent,
        on_document_start => DocumentStartEvent,
        on_document_end => DocumentEndEvent,
        on_alias => AliasEvent,
        on_scalar => ScalarEvent,
        on_sequence_start => SequenceStartEvent,
        on_sequence_end => SequenceEndEvent,
        on_mapping_start => MappingStartEvent,
        on_mapping_end => MappingEndEvent,
    }

    /// Runs the pass to completion.
    ///
    /// Returns after the stream end event was dispatched, or with the first
    /// engine or listener error. A parser runs a single pass, later calls
    /// return [`Error::AlreadyParsed`].
    pub fn parse(&mut self) -> YamletResult<()> {
        if self.state != ParserState::Idle {
            return Err(Error::AlreadyParsed);
        }
        self.state = ParserState::Running;
        debug!("parse pass started");

        let mut dispatched = 0usize;
        loop {
            let event = match self.engine.next_event() {
                Ok(raw) => translate(raw, &self.config),
                Err(err) => {
                    self.state = ParserState::Failed;
                    error!("engine failed after {dispatched} events: {err}");
                    return Err(err.into());
                }
            };
            let Some(event) = event else {
                trace!("engine reported no event");
                continue;
            };

            trace!("dispatching {event}");
            if let Err(err) = self.listeners.dispatch(&event) {
                self.state = ParserState::Failed;
                warn!("pass aborted by listener: {err}");
                return Err(err);
            }
            dispatched += 1;

            if event.kind() == EventKind::StreamEnd {
                self.state = ParserState::Completed;
                debug!("parse pass completed, {dispatched} events dispatched");
                return Ok(());
            }
        }
    }
}

/// Translates a raw engine event into its record. Returns `None` for
/// [`RawEventData::Empty`].
///
/// Absent anchors, tags and values become empty strings. Bytes that are not
/// valid UTF-8 are replaced, so translation never fails.
pub fn translate(raw: RawEvent<'_>, config: &ParserConfig) -> Option<Event> {
    let RawEvent { start, end, data } = raw;
    let event = match data {
        RawEventData::Empty => return None,
        RawEventData::StreamStart { encoding } => Event::StreamStart(StreamStartEvent {
            start,
            end,
            encoding: normalize_encoding(encoding),
        }),
        RawEventData::StreamEnd => Event::StreamEnd(StreamEndEvent { start, end }),
        RawEventData::DocumentStart { version, implicit } => {
            Event::DocumentStart(DocumentStartEvent {
                start,
                end,
                version_directive: version
                    .map(|v| format!("{}.{}", v.major, v.minor))
                    .unwrap_or_default(),
                tag_directives: String::new(),
                implicit,
            })
        }
        RawEventData::DocumentEnd { implicit } => {
            Event::DocumentEnd(DocumentEndEvent {
                start,
                end,
                implicit,
            })
        }
        RawEventData::Alias { anchor } => Event::Alias(AliasEvent {
            start,
            end,
            anchor: text(anchor),
        }),
        RawEventData::Scalar {
            anchor,
            tag,
            value,
            plain_implicit,
            quoted_implicit,
            style,
        } => Event::Scalar(ScalarEvent {
            start,
            end,
            anchor: text(anchor),
            tag: text(tag),
            plain_implicit,
            quoted_implicit,
            value: scalar_value(value, config.truncate_at_nul),
            style: normalize_scalar_style(style),
        }),
        RawEventData::SequenceStart {
            anchor,
            tag,
            implicit,
            style,
        } => Event::SequenceStart(SequenceStartEvent {
            start,
            end,
            anchor: text(anchor),
            tag: text(tag),
            implicit,
            style: normalize_collection_style(style),
        }),
        RawEventData::SequenceEnd => Event::SequenceEnd(SequenceEndEvent { start, end }),
        RawEventData::MappingStart {
            anchor,
            tag,
            implicit,
            style,
        } => Event::MappingStart(MappingStartEvent {
            start,
            end,
            anchor: text(anchor),
            tag: text(tag),
            implicit,
            style: normalize_collection_style(style),
        }),
        RawEventData::MappingEnd => Event::MappingEnd(MappingEndEvent { start, end }),
    };
    Some(event)
}

#[inline]
fn text(bytes: Option<&[u8]>) -> String {
    String::from_utf8_lossy(bytes.unwrap_or_default()).into_owned()
}

fn scalar_value(bytes: Option<&[u8]>, truncate_at_nul: bool) -> String {
    let bytes = bytes.unwrap_or_default();
    let bytes = match memchr(0, bytes) {
        Some(nul) if truncate_at_nul => &bytes[..nul],
        _ => bytes,
    };
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(valid) => valid.to_owned(),
        Cow::Owned(replaced) => {
            warn!("scalar value is not valid UTF-8, invalid bytes were replaced");
            replaced
        }
    }
}
