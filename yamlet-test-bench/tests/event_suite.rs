extern crate libtest_mimic;

use libtest_mimic::{Arguments, Failed, Trial};
use yamlet_test_bench::consts::{
    ALIAS_EVENTS, ALIAS_INPUT, BLOCK_MAP_EVENTS, BLOCK_MAP_INPUT, BLOCK_SEQ_EVENTS,
    BLOCK_SEQ_INPUT, FLOW_MAP_EVENTS, FLOW_MAP_INPUT, FLOW_SEQ_EVENTS, FLOW_SEQ_INPUT,
    LITERAL_EVENTS, LITERAL_INPUT, MULTI_DOC_EVENTS, MULTI_DOC_INPUT, SUITE, TAG_EVENTS,
    TAG_INPUT,
};
use yamlet_test_bench::event_string;

/// Cases whose expected events leave out the stream markers.
const FRAMED: &[(&str, &str, &str)] = &[
    ("block_seq", BLOCK_SEQ_INPUT, BLOCK_SEQ_EVENTS),
    ("block_map", BLOCK_MAP_INPUT, BLOCK_MAP_EVENTS),
    ("flow_seq", FLOW_SEQ_INPUT, FLOW_SEQ_EVENTS),
    ("flow_map", FLOW_MAP_INPUT, FLOW_MAP_EVENTS),
    ("literal", LITERAL_INPUT, LITERAL_EVENTS),
    ("alias", ALIAS_INPUT, ALIAS_EVENTS),
    ("tag", TAG_INPUT, TAG_EVENTS),
    ("multi_doc", MULTI_DOC_INPUT, MULTI_DOC_EVENTS),
];

fn perform_test(input: &str, expected: &str) -> Result<(), Failed> {
    let actual = event_string(input, true);
    if actual != expected {
        return Err(format!("expected:{expected}\nactual:{actual}").into());
    }
    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let mut tests: Vec<Trial> = SUITE
        .iter()
        .map(|&(name, input, expected)| {
            Trial::test(format!("exact::{name}"), move || perform_test(input, expected))
        })
        .collect();
    tests.extend(FRAMED.iter().map(|&(name, input, expected)| {
        Trial::test(format!("framed::{name}"), move || {
            perform_test(input, &format!("\n+STR{expected}\n-STR"))
        })
    }));

    libtest_mimic::run(&args, tests).exit();
}
