use yamlet_test_bench::assert_eq_event;
use yamlet_test_bench::consts::*;

#[test]
fn flow_seq() {
    assert_eq_event(FLOW_SEQ_INPUT, FLOW_SEQ_EVENTS);
    assert_eq_event(NESTED_FLOW_SEQ_INPUT, NESTED_FLOW_SEQ_EVENTS);
}

#[test]
fn flow_map() {
    assert_eq_event(FLOW_MAP_INPUT, FLOW_MAP_EVENTS);
}

#[test]
fn flow_quoted() {
    assert_eq_event(QUOTED_INPUT, QUOTED_EVENTS);
    assert_eq_event(ESCAPED_INPUT, ESCAPED_EVENTS);
}
