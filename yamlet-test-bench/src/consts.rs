pub const BLOCK_SEQ_INPUT: &str = r#"
- x
- y
"#;

pub const BLOCK_SEQ_EVENTS: &str = r#"
+DOC
+SEQ
=VAL :x
=VAL :y
-SEQ
-DOC"#;

pub const FLOW_SEQ_INPUT: &str = r#"[a, b]"#;

pub const FLOW_SEQ_EVENTS: &str = r#"
+DOC
+SEQ []
=VAL :a
=VAL :b
-SEQ
-DOC"#;

pub const NESTED_FLOW_SEQ_INPUT: &str = r#"
&seq
[[name, hr], [Mark, 65]]
"#;

pub const NESTED_FLOW_SEQ_EVENTS: &str = r#"
+DOC
+SEQ [] &seq
+SEQ []
=VAL :name
=VAL :hr
-SEQ
+SEQ []
=VAL :Mark
=VAL :65
-SEQ
-SEQ
-DOC"#;

pub const BLOCK_MAP_INPUT: &str = r#"
a: 1
b: 2
"#;

pub const BLOCK_MAP_EVENTS: &str = r#"
+DOC
+MAP
=VAL :a
=VAL :1
=VAL :b
=VAL :2
-MAP
-DOC"#;

pub const FLOW_MAP_INPUT: &str = r#"{a: 1}"#;

pub const FLOW_MAP_EVENTS: &str = r#"
+DOC
+MAP {}
=VAL :a
=VAL :1
-MAP
-DOC"#;

pub const MAP_OF_SEQ_INPUT: &str = r#"
key:
  - 1
  - 2
"#;

pub const MAP_OF_SEQ_EVENTS: &str = r#"
+DOC
+MAP
=VAL :key
+SEQ
=VAL :1
=VAL :2
-SEQ
-MAP
-DOC"#;

pub const QUOTED_INPUT: &str = r#"
- 'single'
- "double"
"#;

pub const QUOTED_EVENTS: &str = r#"
+DOC
+SEQ
=VAL 'single
=VAL "double
-SEQ
-DOC"#;

pub const ESCAPED_INPUT: &str = r#""a\tb\nc""#;

pub const ESCAPED_EVENTS: &str = r#"
+DOC
=VAL "a\tb\nc
-DOC"#;

pub const LITERAL_INPUT: &str = r#"
text: |
  line one
  line two
"#;

pub const LITERAL_EVENTS: &str = r#"
+DOC
+MAP
=VAL :text
=VAL |line one\nline two\n
-MAP
-DOC"#;

pub const FOLDED_INPUT: &str = r#"
text: >
  folded
  line
"#;

pub const FOLDED_EVENTS: &str = r#"
+DOC
+MAP
=VAL :text
=VAL >folded line\n
-MAP
-DOC"#;

pub const STRIP_INPUT: &str = r#"
|-
  a
"#;

pub const STRIP_EVENTS: &str = r#"
+DOC
=VAL |a
-DOC"#;

pub const ALIAS_INPUT: &str = r#"
a: &x 1
b: *x
"#;

pub const ALIAS_EVENTS: &str = r#"
+DOC
+MAP
=VAL :a
=VAL &x :1
=VAL :b
=ALI *x
-MAP
-DOC"#;

pub const TAG_INPUT: &str = r#"
- !!str 1
- !local x
"#;

pub const TAG_EVENTS: &str = r#"
+DOC
+SEQ
=VAL <tag:yaml.org,2002:str> :1
=VAL <!local> :x
-SEQ
-DOC"#;

pub const EXPLICIT_DOC_INPUT: &str = r#"
--- a
...
"#;

pub const EXPLICIT_DOC_EVENTS: &str = r#"
+DOC ---
=VAL :a
-DOC ..."#;

pub const MULTI_DOC_INPUT: &str = r#"
a
---
b
"#;

pub const MULTI_DOC_EVENTS: &str = r#"
+DOC
=VAL :a
-DOC
+DOC ---
=VAL :b
-DOC"#;

pub const VERSION_INPUT: &str = r#"
%YAML 1.1
--- x
"#;

pub const VERSION_EVENTS: &str = r#"
+DOC ---
=VAL :x
-DOC"#;

pub const COMMENT_ONLY_INPUT: &str = r#"
# nothing here
"#;

pub const EMPTY_STREAM_EVENTS: &str = r#"
+STR
-STR"#;

pub const SINGLE_SCALAR_EVENTS: &str = r#"
+STR
+DOC
=VAL :a
-DOC
-STR"#;

pub const UNCLOSED_FLOW_INPUT: &str = r#"[a, b"#;

pub const UNCLOSED_FLOW_EVENTS: &str = r#"
+STR
+DOC
+SEQ []
=VAL :a
=VAL :b
ERR"#;

pub const UNCLOSED_QUOTE_INPUT: &str = r#""abc"#;

pub const UNCLOSED_QUOTE_EVENTS: &str = r#"
+STR
ERR"#;

/// Name, input and the exact event string, stream markers included.
pub const SUITE: &[(&str, &str, &str)] = &[
    ("empty", "", EMPTY_STREAM_EVENTS),
    ("comment_only", COMMENT_ONLY_INPUT, EMPTY_STREAM_EVENTS),
    ("single_scalar", "a", SINGLE_SCALAR_EVENTS),
    ("unclosed_flow", UNCLOSED_FLOW_INPUT, UNCLOSED_FLOW_EVENTS),
    ("unclosed_quote", UNCLOSED_QUOTE_INPUT, UNCLOSED_QUOTE_EVENTS),
];
