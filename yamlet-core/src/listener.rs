//! Listener registry and dispatch.
//!
//! Listeners are kept per event kind in registration order. Dispatch is
//! fail-fast: the first listener returning an error stops delivery of that
//! event, and the error is handed back to the caller.

use yamlet_common::{
    AliasEvent, DocumentEndEvent, DocumentStartEvent, Event, EventKind, EventRecord,
    MappingEndEvent, MappingStartEvent, ScalarEvent, SequenceEndEvent, SequenceStartEvent,
    StreamEndEvent, StreamStartEvent,
};

use crate::error::{Error, ListenerError};

/// Boxed listener for one record type.
pub type Callback<'l, E> = Box<dyn FnMut(&E) -> Result<(), ListenerError> + 'l>;

/// Return value of a listener: `()` for listeners that cannot fail, or a
/// `Result` whose error converts into [`ListenerError`].
pub trait ListenerOutcome {
    fn into_result(self) -> Result<(), ListenerError>;
}

impl ListenerOutcome for () {
    #[inline]
    fn into_result(self) -> Result<(), ListenerError> {
        Ok(())
    }
}

impl<E: Into<ListenerError>> ListenerOutcome for Result<(), E> {
    #[inline]
    fn into_result(self) -> Result<(), ListenerError> {
        self.map_err(Into::into)
    }
}

/// Record types that listeners can subscribe to.
pub trait Subscribe: EventRecord + Sized {
    #[doc(hidden)]
    fn slot<'a, 'l>(listeners: &'a mut Listeners<'l>) -> &'a mut Vec<Callback<'l, Self>>;
}

#[derive(Default)]
pub struct Listeners<'l> {
    stream_start: Vec<Callback<'l, StreamStartEvent>>,
    stream_end: Vec<Callback<'l, StreamEndEvent>>,
    document_start: Vec<Callback<'l, DocumentStartEvent>>,
    document_end: Vec<Callback<'l, DocumentEndEvent>>,
    alias: Vec<Callback<'l, AliasEvent>>,
    scalar: Vec<Callback<'l, ScalarEvent>>,
    sequence_start: Vec<Callback<'l, SequenceStartEvent>>,
    sequence_end: Vec<Callback<'l, SequenceEndEvent>>,
    mapping_start: Vec<Callback<'l, MappingStartEvent>>,
    mapping_end: Vec<Callback<'l, MappingEndEvent>>,
    /// Called for every event, after the listeners of its kind.
    any: Vec<Callback<'l, Event>>,
}

macro_rules! subscribe {
    ($($record:ident => $field:ident),+ $(,)?) => {
        $(
            impl Subscribe for $record {
                #[inline]
                fn slot<'a, 'l>(listeners: &'a mut Listeners<'l>) -> &'a mut Vec<Callback<'l, Self>> {
                    &mut listeners.$field
                }
            }
        )+
    };
}

subscribe! {
    StreamStartEvent => stream_start,
    StreamEndEvent => stream_end,
    DocumentStartEvent => document_start,
    DocumentEndEvent => document_end,
    AliasEvent => alias,
    ScalarEvent => scalar,
    SequenceStartEvent => sequence_start,
    SequenceEndEvent => sequence_end,
    MappingStartEvent => mapping_start,
    MappingEndEvent => mapping_end,
}

fn run<E: EventRecord>(callbacks: &mut [Callback<'_, E>], event: &E) -> Result<(), Error> {
    for callback in callbacks.iter_mut() {
        callback(event).map_err(|source| Error::Listener {
            kind: E::KIND,
            source,
        })?;
    }
    Ok(())
}

impl<'l> Listeners<'l> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `callback` to the listeners of record type `E`.
    pub fn register<E, F, R>(&mut self, mut callback: F) -> &mut Self
    where
        E: Subscribe,
        F: FnMut(&E) -> R + 'l,
        R: ListenerOutcome,
    {
        E::slot(self).push(Box::new(move |event: &E| callback(event).into_result()));
        self
    }

    /// Appends a listener that sees every event.
    pub fn register_any<F, R>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&Event) -> R + 'l,
        R: ListenerOutcome,
    {
        self.any
            .push(Box::new(move |event: &Event| callback(event).into_result()));
        self
    }

    /// Number of listeners registered for `kind`, not counting catch-all ones.
    #[must_use]
    pub fn len(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::StreamStart => self.stream_start.len(),
            EventKind::StreamEnd => self.stream_end.len(),
            EventKind::DocumentStart => self.document_start.len(),
            EventKind::DocumentEnd => self.document_end.len(),
            EventKind::Alias => self.alias.len(),
            EventKind::Scalar => self.scalar.len(),
            EventKind::SequenceStart => self.sequence_start.len(),
            EventKind::SequenceEnd => self.sequence_end.len(),
            EventKind::MappingStart => self.mapping_start.len(),
            EventKind::MappingEnd => self.mapping_end.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.any.is_empty() && EventKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    /// Invokes the listeners of the event's kind in registration order,
    /// then the catch-all listeners. Stops at the first failure.
    pub fn dispatch(&mut self, event: &Event) -> Result<(), Error> {
        match event {
            Event::StreamStart(ev) => run(&mut self.stream_start, ev)?,
            Event::StreamEnd(ev) => run(&mut self.stream_end, ev)?,
            Event::DocumentStart(ev) => run(&mut self.document_start, ev)?,
            Event::DocumentEnd(ev) => run(&mut self.document_end, ev)?,
            Event::Alias(ev) => run(&mut self.alias, ev)?,
            Event::Scalar(ev) => run(&mut self.scalar, ev)?,
            Event::SequenceStart(ev) => run(&mut self.sequence_start, ev)?,
            Event::SequenceEnd(ev) => run(&mut self.sequence_end, ev)?,
            Event::MappingStart(ev) => run(&mut self.mapping_start, ev)?,
            Event::MappingEnd(ev) => run(&mut self.mapping_end, ev)?,
        }
        for callback in &mut self.any {
            callback(event).map_err(|source| Error::Listener {
                kind: event.kind(),
                source,
            })?;
        }
        Ok(())
    }
}
