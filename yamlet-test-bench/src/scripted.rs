use std::cell::Cell;
use std::rc::Rc;

use yamlet_core::{Engine, EngineError, EngineErrorKind, Mark, RawEvent, RawEventData};

/// Engine that replays a fixed list of raw events.
///
/// Each pull hands out the next scripted event. Pulling past the end, or
/// reaching the pull configured with [`ScriptedEngine::fail_at`], reports an
/// engine error instead.
pub struct ScriptedEngine {
    events: Vec<RawEvent<'static>>,
    pulls: usize,
    fail_at: Option<usize>,
    released: Rc<Cell<bool>>,
}

impl ScriptedEngine {
    /// Scripts `data` with generated marks: event `n` spans indices
    /// `4n..4n + 2` on line `n`.
    pub fn new(data: Vec<RawEventData<'static>>) -> Self {
        let events = data
            .into_iter()
            .enumerate()
            .map(|(n, data)| RawEvent::new(Mark::new(n, 0, n * 4), Mark::new(n, 2, n * 4 + 2), data))
            .collect();
        Self::from_events(events)
    }

    pub fn from_events(events: Vec<RawEvent<'static>>) -> Self {
        ScriptedEngine {
            events,
            pulls: 0,
            fail_at: None,
            released: Rc::new(Cell::new(false)),
        }
    }

    /// Fails the `pull`-th request (1-based) with a parser error.
    #[must_use]
    pub fn fail_at(mut self, pull: usize) -> Self {
        self.fail_at = Some(pull);
        self
    }

    /// Number of events requested so far.
    pub fn pulls(&self) -> usize {
        self.pulls
    }

    /// Flag set once the engine is dropped.
    pub fn released(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.released)
    }
}

impl Engine for ScriptedEngine {
    fn next_event(&mut self) -> Result<RawEvent<'_>, EngineError> {
        self.pulls += 1;
        if self.fail_at == Some(self.pulls) {
            return Err(EngineError::new(EngineErrorKind::Parser, "scripted failure")
                .with_mark(Mark::new(self.pulls, 0, self.pulls * 4)));
        }
        self.events
            .get(self.pulls - 1)
            .cloned()
            .ok_or_else(|| EngineError::new(EngineErrorKind::Other, "script exhausted"))
    }
}

impl Drop for ScriptedEngine {
    fn drop(&mut self) {
        self.released.set(true);
    }
}

/// Builders for scripted raw events.
pub mod raw {
    use yamlet_core::{code, RawEventData, VersionDirective};

    pub fn stream_start() -> RawEventData<'static> {
        RawEventData::StreamStart {
            encoding: code::UTF8_ENCODING,
        }
    }

    pub fn stream_end() -> RawEventData<'static> {
        RawEventData::StreamEnd
    }

    pub fn document_start(implicit: bool) -> RawEventData<'static> {
        RawEventData::DocumentStart {
            version: None,
            implicit,
        }
    }

    pub fn versioned_document_start(major: i32, minor: i32) -> RawEventData<'static> {
        RawEventData::DocumentStart {
            version: Some(VersionDirective { major, minor }),
            implicit: false,
        }
    }

    pub fn document_end(implicit: bool) -> RawEventData<'static> {
        RawEventData::DocumentEnd { implicit }
    }

    pub fn alias(anchor: &'static str) -> RawEventData<'static> {
        RawEventData::Alias {
            anchor: Some(anchor.as_bytes()),
        }
    }

    pub fn scalar(value: &'static str, style: u32) -> RawEventData<'static> {
        RawEventData::Scalar {
            anchor: None,
            tag: None,
            value: Some(value.as_bytes()),
            plain_implicit: style == code::PLAIN_SCALAR_STYLE,
            quoted_implicit: style != code::PLAIN_SCALAR_STYLE,
            style,
        }
    }

    pub fn plain(value: &'static str) -> RawEventData<'static> {
        scalar(value, code::PLAIN_SCALAR_STYLE)
    }

    pub fn sequence_start(style: u32) -> RawEventData<'static> {
        RawEventData::SequenceStart {
            anchor: None,
            tag: None,
            implicit: true,
            style,
        }
    }

    pub fn sequence_end() -> RawEventData<'static> {
        RawEventData::SequenceEnd
    }

    pub fn mapping_start(style: u32) -> RawEventData<'static> {
        RawEventData::MappingStart {
            anchor: None,
            tag: None,
            implicit: true,
            style,
        }
    }

    pub fn mapping_end() -> RawEventData<'static> {
        RawEventData::MappingEnd
    }

    /// Stream holding a single empty, implicit document.
    pub fn empty_document() -> Vec<RawEventData<'static>> {
        vec![
            stream_start(),
            document_start(true),
            document_end(true),
            stream_end(),
        ]
    }
}
