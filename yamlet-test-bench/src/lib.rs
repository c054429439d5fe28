use std::fmt::Write;

use yamlet_core::{Engine, Error, Event, EventKind, Parser};

pub use scripted::{raw, ScriptedEngine};

pub mod consts;
mod scripted;

/// Runs a full pass over `engine` and collects every dispatched event,
/// together with the error that ended the pass early, if any.
pub fn collect_events<E: Engine>(engine: E) -> (Vec<Event>, Option<Error>) {
    let mut events = Vec::new();
    let result = {
        let mut parser = Parser::new(engine);
        parser.on_event(|ev: &Event| events.push(ev.clone()));
        parser.parse()
    };
    (events, result.err())
}

/// Renders the events of `input` in test-suite notation, one per line, each
/// preceded by a newline. A failed pass ends with `ERR`.
pub fn event_string(input: &str, emit_stream_token: bool) -> String {
    let mut line = String::new();
    let result = match Parser::new_from_str(input) {
        Ok(mut parser) => {
            parser.on_event(|ev: &Event| {
                if emit_stream_token
                    || !matches!(ev.kind(), EventKind::StreamStart | EventKind::StreamEnd)
                {
                    write!(line, "\n{ev}")
                } else {
                    Ok(())
                }
            });
            parser.parse()
        }
        Err(err) => Err(err),
    };
    if result.is_err() {
        line.push_str("\nERR");
    }
    line
}

pub fn assert_eq_event(input: &str, events: &str) {
    let line = event_string(input, false);
    assert_eq!(line, events, "Error in {input}");
}

pub fn assert_eq_event_exact(input: &str, events: &str) {
    let line = event_string(input, true);
    assert_eq!(line, events, "Error in {input}");
}
