use std::cell::{Cell, RefCell};

use pretty_assertions::assert_eq;
use rstest::rstest;
use yamlet_core::{
    code, CollectionStyle, EngineErrorKind, Error, Event, EventKind, EventRecord, Mark, Parser,
    ParserConfig, ParserState, RawEvent, RawEventData, ScalarEvent, ScalarStyle,
};
use yamlet_test_bench::{collect_events, raw, ScriptedEngine};

fn kinds(events: &[Event]) -> Vec<EventKind> {
    events.iter().map(Event::kind).collect()
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn empty_document_stream() {
    let (events, err) = collect_events(ScriptedEngine::new(raw::empty_document()));
    assert!(err.is_none());
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::StreamStart,
            EventKind::DocumentStart,
            EventKind::DocumentEnd,
            EventKind::StreamEnd,
        ]
    );
    assert!(matches!(&events[1], Event::DocumentStart(doc) if doc.implicit));
}

#[test]
fn marks_are_ordered() {
    let (events, _) = collect_events(ScriptedEngine::new(raw::empty_document()));
    for event in &events {
        assert!(event.start().index <= event.end().index);
    }
    assert_eq!(events[2].start(), Mark::new(2, 0, 8));
    assert_eq!(events[2].end(), Mark::new(2, 2, 10));
}

#[rstest]
#[case::sequence(raw::sequence_start(code::BLOCK_COLLECTION_STYLE), raw::sequence_end())]
#[case::mapping(raw::mapping_start(code::FLOW_COLLECTION_STYLE), raw::mapping_end())]
fn collections_are_framed(
    #[case] open: RawEventData<'static>,
    #[case] close: RawEventData<'static>,
) {
    let script = vec![
        raw::stream_start(),
        raw::document_start(false),
        open,
        raw::plain("a"),
        raw::plain("b"),
        close,
        raw::document_end(false),
        raw::stream_end(),
    ];
    let (events, err) = collect_events(ScriptedEngine::new(script));
    assert!(err.is_none());
    assert_eq!(events.len(), 8);
    assert_eq!(events.first().map(Event::kind), Some(EventKind::StreamStart));
    assert_eq!(events.last().map(Event::kind), Some(EventKind::StreamEnd));

    let mut depth = 0i32;
    for event in &events {
        match event.kind() {
            EventKind::SequenceStart | EventKind::MappingStart => depth += 1,
            EventKind::SequenceEnd | EventKind::MappingEnd => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
}

#[test]
fn engine_failure_stops_the_pass() {
    init_logs();
    let engine = ScriptedEngine::new(raw::empty_document()).fail_at(3);
    let released = engine.released();
    let mut seen = Vec::new();
    let mut parser = Parser::new(engine);
    parser.on_event(|ev: &Event| seen.push(ev.kind()));

    let err = parser.parse().unwrap_err();
    assert_eq!(parser.state(), ParserState::Failed);
    match &err {
        Error::Engine(engine) => {
            assert_eq!(engine.kind, EngineErrorKind::Parser);
            assert_eq!(engine.mark, Some(Mark::new(3, 0, 12)));
        }
        other => panic!("expected engine error, got {other:?}"),
    }
    assert!(!released.get());
    drop(parser);

    assert!(released.get());
    assert_eq!(seen, vec![EventKind::StreamStart, EventKind::DocumentStart]);
}

#[test]
fn exhausted_script_without_stream_end_fails() {
    let script = vec![raw::stream_start(), raw::document_start(true)];
    let (events, err) = collect_events(ScriptedEngine::new(script));
    assert_eq!(events.len(), 2);
    assert!(matches!(err, Some(Error::Engine(e)) if e.kind == EngineErrorKind::Other));
}

#[test]
fn listener_failure_stops_the_pass() {
    init_logs();
    let engine = ScriptedEngine::new(raw::empty_document());
    let later = Cell::new(0);
    let mut parser = Parser::new(engine);
    parser
        .on_document_start(|_| Err::<(), _>("document rejected"))
        .on_document_end(|_| later.set(later.get() + 1))
        .on_stream_end(|_| later.set(later.get() + 1));

    let err = parser.parse().unwrap_err();
    assert_eq!(parser.state(), ParserState::Failed);
    assert_eq!(err.to_string(), "document start listener failed: document rejected");
    assert!(matches!(
        err,
        Error::Listener {
            kind: EventKind::DocumentStart,
            ..
        }
    ));
    drop(parser);
    assert_eq!(later.get(), 0);
}

#[test]
fn parse_runs_once() {
    let mut count = 0;
    let mut parser = Parser::new(ScriptedEngine::new(raw::empty_document()));
    parser.on_event(|_: &Event| count += 1);
    assert_eq!(parser.state(), ParserState::Idle);

    parser.parse().unwrap();
    assert_eq!(parser.state(), ParserState::Completed);
    assert!(matches!(parser.parse(), Err(Error::AlreadyParsed)));
    assert_eq!(parser.state(), ParserState::Completed);
    drop(parser);

    assert_eq!(count, 4);
}

#[test]
fn failed_parser_does_not_restart() {
    let engine = ScriptedEngine::new(raw::empty_document()).fail_at(1);
    let mut parser = Parser::new(engine);
    assert!(matches!(parser.parse(), Err(Error::Engine(_))));
    assert!(matches!(parser.parse(), Err(Error::AlreadyParsed)));
    assert_eq!(parser.state(), ParserState::Failed);
}

#[test]
fn empty_raw_events_are_skipped() {
    let script = vec![
        raw::stream_start(),
        RawEventData::Empty,
        raw::document_start(true),
        RawEventData::Empty,
        raw::document_end(true),
        raw::stream_end(),
    ];
    let (events, err) = collect_events(ScriptedEngine::new(script));
    assert!(err.is_none());
    assert_eq!(events.len(), 4);
}

#[test]
fn listeners_per_kind_run_before_catch_all() {
    let log = RefCell::new(Vec::new());
    let script = vec![
        raw::stream_start(),
        raw::document_start(true),
        raw::alias("x"),
        raw::document_end(true),
        raw::stream_end(),
    ];
    let mut parser = Parser::new(ScriptedEngine::new(script));
    parser
        .on_event(|ev: &Event| log.borrow_mut().push(format!("any {}", ev.kind())))
        .on_alias(|ev| log.borrow_mut().push(format!("alias {}", ev.anchor)))
        .on_alias(|ev| log.borrow_mut().push(format!("alias again {}", ev.anchor)));
    parser.parse().unwrap();
    drop(parser);

    assert_eq!(
        log.into_inner(),
        vec![
            "any stream start",
            "any document start",
            "alias x",
            "alias again x",
            "any alias",
            "any document end",
            "any stream end",
        ]
    );
}

#[test]
fn absent_strings_are_empty() {
    let script = vec![
        raw::stream_start(),
        raw::document_start(true),
        RawEventData::Alias { anchor: None },
        RawEventData::Scalar {
            anchor: None,
            tag: None,
            value: None,
            plain_implicit: true,
            quoted_implicit: false,
            style: code::PLAIN_SCALAR_STYLE,
        },
        RawEventData::SequenceStart {
            anchor: None,
            tag: None,
            implicit: true,
            style: code::BLOCK_COLLECTION_STYLE,
        },
        raw::sequence_end(),
        raw::document_end(true),
        raw::stream_end(),
    ];
    let mut aliases = Vec::new();
    let mut scalars = Vec::new();
    let mut sequences = Vec::new();
    let mut parser = Parser::new(ScriptedEngine::new(script));
    parser
        .on_alias(|ev| aliases.push(ev.anchor.clone()))
        .on_scalar(|ev| scalars.push(ev.clone()))
        .on_sequence_start(|ev| sequences.push((ev.anchor.clone(), ev.tag.clone())));
    parser.parse().unwrap();
    drop(parser);

    assert_eq!(aliases, vec![String::new()]);
    assert_eq!(scalars.len(), 1);
    assert_eq!(scalars[0].anchor, "");
    assert_eq!(scalars[0].tag, "");
    assert_eq!(scalars[0].value, "");
    assert_eq!(sequences, vec![(String::new(), String::new())]);
}

#[test]
fn scalar_with_nul_is_kept_by_default() {
    let nul_scalar = || {
        vec![
            raw::stream_start(),
            raw::document_start(true),
            raw::scalar("a\0b", code::DOUBLE_QUOTED_SCALAR_STYLE),
            raw::document_end(true),
            raw::stream_end(),
        ]
    };

    let mut kept = String::new();
    let mut parser = Parser::new(ScriptedEngine::new(nul_scalar()));
    parser.on_scalar(|ev: &ScalarEvent| kept = ev.value.clone());
    parser.parse().unwrap();
    drop(parser);
    assert_eq!(kept, "a\0b");

    let mut cut = String::new();
    let config = ParserConfig::new().truncate_at_nul(true);
    let mut parser = Parser::with_config(ScriptedEngine::new(nul_scalar()), config);
    parser.on_scalar(|ev: &ScalarEvent| cut = ev.value.clone());
    parser.parse().unwrap();
    drop(parser);
    assert_eq!(cut, "a");
}

#[test]
fn version_directive_and_styles() {
    let script = vec![
        raw::stream_start(),
        raw::versioned_document_start(1, 1),
        raw::sequence_start(code::FLOW_COLLECTION_STYLE),
        raw::scalar("lit", code::LITERAL_SCALAR_STYLE),
        raw::scalar("odd", 42),
        raw::sequence_end(),
        raw::document_end(false),
        raw::stream_end(),
    ];
    let (events, err) = collect_events(ScriptedEngine::new(script));
    assert!(err.is_none());

    let Event::DocumentStart(doc) = &events[1] else {
        panic!("expected document start, got {:?}", events[1]);
    };
    assert_eq!(doc.version_directive, "1.1");
    assert_eq!(doc.tag_directives, "");
    assert!(!doc.implicit);

    assert!(matches!(&events[2], Event::SequenceStart(seq) if seq.style == CollectionStyle::Flow));
    assert!(matches!(&events[3], Event::Scalar(s) if s.style == ScalarStyle::Literal));
    assert!(matches!(&events[4], Event::Scalar(s) if s.style == ScalarStyle::Plain));
}

#[test]
fn exact_marks_pass_through() {
    let events = vec![
        RawEvent::new(Mark::new(0, 0, 0), Mark::new(0, 0, 0), raw::stream_start()),
        RawEvent::new(Mark::new(0, 0, 0), Mark::new(0, 0, 0), raw::document_start(true)),
        RawEvent::new(Mark::new(0, 0, 0), Mark::new(0, 1, 1), raw::plain("x")),
        RawEvent::new(Mark::new(1, 0, 2), Mark::new(1, 0, 2), raw::document_end(true)),
        RawEvent::new(Mark::new(1, 0, 2), Mark::new(1, 0, 2), raw::stream_end()),
    ];
    let mut scalar = None;
    let mut parser = Parser::new(ScriptedEngine::from_events(events));
    parser.on_scalar(|ev| scalar = Some((ev.start(), ev.end())));
    parser.parse().unwrap();
    drop(parser);

    assert_eq!(scalar, Some((Mark::new(0, 0, 0), Mark::new(0, 1, 1))));
}
