use std::ffi::{c_void, CStr};
use std::io::{self, ErrorKind, Read};
use std::mem::MaybeUninit;
use std::{ptr, slice};

use log::{debug, trace};
use unsafe_libyaml as sys;
use yamlet_common::{code, Encoding, Mark};

use crate::config::ParserConfig;
use crate::engine::{Engine, RawEvent, RawEventData, VersionDirective};
use crate::error::{EngineError, EngineErrorKind, YamletResult};
use crate::parser::Parser;

struct Input<'r> {
    reader: Box<dyn Read + 'r>,
    /// Last I/O failure, reported instead of libyaml's generic "input error".
    error: Option<io::Error>,
}

/// Engine backed by libyaml, through its pure Rust translation in
/// `unsafe-libyaml`.
///
/// The libyaml parser and the last parsed event are released when the engine
/// is dropped, whatever state the pass ended in.
pub struct LibyamlEngine<'r> {
    parser: Box<MaybeUninit<sys::yaml_parser_t>>,
    event: Box<MaybeUninit<sys::yaml_event_t>>,
    /// `event` holds a parsed event that was not deleted yet.
    event_pending: bool,
    /// Owned. libyaml keeps it as the read handler's data pointer.
    input: *mut Input<'r>,
}

impl<'r> LibyamlEngine<'r> {
    pub fn from_reader<R: Read + 'r>(reader: R) -> Result<Self, EngineError> {
        Self::with_config(reader, &ParserConfig::default())
    }

    pub fn from_slice(input: &'r [u8]) -> Result<Self, EngineError> {
        Self::from_reader(input)
    }

    pub fn new_from_str(input: &'r str) -> Result<Self, EngineError> {
        Self::from_reader(input.as_bytes())
    }

    pub fn with_config<R: Read + 'r>(
        reader: R,
        config: &ParserConfig,
    ) -> Result<Self, EngineError> {
        let mut parser = Box::new(MaybeUninit::<sys::yaml_parser_t>::uninit());
        if unsafe { sys::yaml_parser_initialize(parser.as_mut_ptr()) }.fail {
            return Err(EngineError::new(
                EngineErrorKind::Memory,
                "cannot initialize libyaml parser",
            ));
        }

        let input = Box::into_raw(Box::new(Input {
            reader: Box::new(reader),
            error: None,
        }));
        unsafe {
            sys::yaml_parser_set_input(parser.as_mut_ptr(), read_handler, input.cast());
            if let Some(encoding) = config.encoding.and_then(libyaml_encoding) {
                sys::yaml_parser_set_encoding(parser.as_mut_ptr(), encoding);
            }
        }

        Ok(LibyamlEngine {
            parser,
            event: Box::new(MaybeUninit::uninit()),
            event_pending: false,
            input,
        })
    }

    fn release_event(&mut self) {
        if self.event_pending {
            unsafe { sys::yaml_event_delete(self.event.as_mut_ptr()) };
            self.event_pending = false;
        }
    }

    fn failure(&mut self) -> EngineError {
        if let Some(err) = unsafe { (*self.input).error.take() } {
            return EngineError::new(EngineErrorKind::Reader, err.to_string());
        }

        let parser = unsafe { self.parser.assume_init_ref() };
        let kind = match parser.error {
            sys::YAML_MEMORY_ERROR => EngineErrorKind::Memory,
            sys::YAML_READER_ERROR => EngineErrorKind::Reader,
            sys::YAML_SCANNER_ERROR => EngineErrorKind::Scanner,
            sys::YAML_PARSER_ERROR => EngineErrorKind::Parser,
            _ => EngineErrorKind::Other,
        };
        let problem = unsafe { c_string(parser.problem) }
            .unwrap_or_else(|| String::from("unknown libyaml failure"));

        let mut error = EngineError::new(kind, problem);
        if let Some(context) = unsafe { c_string(parser.context) } {
            error = error.with_context(context);
        }
        // reader errors report a byte offset, not a mark
        if matches!(kind, EngineErrorKind::Scanner | EngineErrorKind::Parser) {
            error = error.with_mark(mark(&parser.problem_mark));
        }
        error
    }
}

impl Engine for LibyamlEngine<'_> {
    fn next_event(&mut self) -> Result<RawEvent<'_>, EngineError> {
        self.release_event();

        let parsed =
            unsafe { sys::yaml_parser_parse(self.parser.as_mut_ptr(), self.event.as_mut_ptr()) };
        if parsed.fail {
            return Err(self.failure());
        }
        self.event_pending = true;

        let event = unsafe { self.event.assume_init_ref() };
        Ok(unsafe { convert(event) })
    }
}

impl Drop for LibyamlEngine<'_> {
    fn drop(&mut self) {
        self.release_event();
        unsafe {
            sys::yaml_parser_delete(self.parser.as_mut_ptr());
            drop(Box::from_raw(self.input));
        }
    }
}

impl<'l, 'r> Parser<'l, LibyamlEngine<'r>> {
    pub fn from_reader<R: Read + 'r>(reader: R) -> YamletResult<Self> {
        Self::from_reader_with_config(reader, ParserConfig::default())
    }

    pub fn from_reader_with_config<R: Read + 'r>(
        reader: R,
        config: ParserConfig,
    ) -> YamletResult<Self> {
        let engine = LibyamlEngine::with_config(reader, &config)?;
        Ok(Parser::with_config(engine, config))
    }

    pub fn from_slice(input: &'r [u8]) -> YamletResult<Self> {
        Self::from_reader(input)
    }

    pub fn new_from_str(input: &'r str) -> YamletResult<Self> {
        Self::from_reader(input.as_bytes())
    }
}

/// Fills libyaml's buffer from the reader. Zero bytes with a success status
/// signals end of input.
unsafe fn read_handler(data: *mut c_void, buffer: *mut u8, size: u64, size_read: *mut u64) -> i32 {
    let input = &mut *data.cast::<Input<'_>>();
    let len = size as usize;
    ptr::write_bytes(buffer, 0, len);
    let buffer = slice::from_raw_parts_mut(buffer, len);
    loop {
        match input.reader.read(buffer) {
            Ok(read) => {
                trace!("read {read} of {len} requested bytes");
                *size_read = read as u64;
                return 1;
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => {
                debug!("reading input failed: {err}");
                input.error = Some(err);
                *size_read = 0;
                return 0;
            }
        }
    }
}

unsafe fn convert(event: &sys::yaml_event_t) -> RawEvent<'_> {
    let data = match event.type_ {
        sys::YAML_STREAM_START_EVENT => RawEventData::StreamStart {
            encoding: encoding_code(&event.data.stream_start.encoding),
        },
        sys::YAML_STREAM_END_EVENT => RawEventData::StreamEnd,
        sys::YAML_DOCUMENT_START_EVENT => {
            let doc = &event.data.document_start;
            RawEventData::DocumentStart {
                version: doc.version_directive.as_ref().map(|v| VersionDirective {
                    major: v.major,
                    minor: v.minor,
                }),
                implicit: doc.implicit,
            }
        }
        sys::YAML_DOCUMENT_END_EVENT => RawEventData::DocumentEnd {
            implicit: event.data.document_end.implicit,
        },
        sys::YAML_ALIAS_EVENT => RawEventData::Alias {
            anchor: c_bytes(event.data.alias.anchor),
        },
        sys::YAML_SCALAR_EVENT => {
            let scalar = &event.data.scalar;
            RawEventData::Scalar {
                anchor: c_bytes(scalar.anchor),
                tag: c_bytes(scalar.tag),
                value: sized_bytes(scalar.value, scalar.length as usize),
                plain_implicit: scalar.plain_implicit,
                quoted_implicit: scalar.quoted_implicit,
                style: scalar_style_code(&scalar.style),
            }
        }
        sys::YAML_SEQUENCE_START_EVENT => {
            let seq = &event.data.sequence_start;
            RawEventData::SequenceStart {
                anchor: c_bytes(seq.anchor),
                tag: c_bytes(seq.tag),
                implicit: seq.implicit,
                style: sequence_style_code(&seq.style),
            }
        }
        sys::YAML_SEQUENCE_END_EVENT => RawEventData::SequenceEnd,
        sys::YAML_MAPPING_START_EVENT => {
            let map = &event.data.mapping_start;
            RawEventData::MappingStart {
                anchor: c_bytes(map.anchor),
                tag: c_bytes(map.tag),
                implicit: map.implicit,
                style: mapping_style_code(&map.style),
            }
        }
        sys::YAML_MAPPING_END_EVENT => RawEventData::MappingEnd,
        _ => RawEventData::Empty,
    };
    RawEvent::new(mark(&event.start_mark), mark(&event.end_mark), data)
}

fn mark(mark: &sys::yaml_mark_t) -> Mark {
    Mark::new(mark.line as usize, mark.column as usize, mark.index as usize)
}

unsafe fn c_string<T>(ptr: *const T) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
}

unsafe fn c_bytes<'a>(ptr: *const u8) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr.cast()).to_bytes())
}

unsafe fn sized_bytes<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts(ptr, len))
}

/// Encoding to force on libyaml. `Any` leaves BOM detection on.
fn libyaml_encoding(encoding: Encoding) -> Option<sys::yaml_encoding_t> {
    match encoding.code()? {
        code::UTF8_ENCODING => Some(sys::YAML_UTF8_ENCODING),
        code::UTF16LE_ENCODING => Some(sys::YAML_UTF16LE_ENCODING),
        code::UTF16BE_ENCODING => Some(sys::YAML_UTF16BE_ENCODING),
        _ => None,
    }
}

fn encoding_code(encoding: &sys::yaml_encoding_t) -> u32 {
    match *encoding {
        sys::YAML_ANY_ENCODING => code::ANY_ENCODING,
        sys::YAML_UTF8_ENCODING => code::UTF8_ENCODING,
        sys::YAML_UTF16LE_ENCODING => code::UTF16LE_ENCODING,
        sys::YAML_UTF16BE_ENCODING => code::UTF16BE_ENCODING,
        #[allow(unreachable_patterns)]
        _ => code::UNKNOWN,
    }
}

fn scalar_style_code(style: &sys::yaml_scalar_style_t) -> u32 {
    match *style {
        sys::YAML_ANY_SCALAR_STYLE => code::ANY_SCALAR_STYLE,
        sys::YAML_PLAIN_SCALAR_STYLE => code::PLAIN_SCALAR_STYLE,
        sys::YAML_SINGLE_QUOTED_SCALAR_STYLE => code::SINGLE_QUOTED_SCALAR_STYLE,
        sys::YAML_DOUBLE_QUOTED_SCALAR_STYLE => code::DOUBLE_QUOTED_SCALAR_STYLE,
        sys::YAML_LITERAL_SCALAR_STYLE => code::LITERAL_SCALAR_STYLE,
        sys::YAML_FOLDED_SCALAR_STYLE => code::FOLDED_SCALAR_STYLE,
        #[allow(unreachable_patterns)]
        _ => code::UNKNOWN,
    }
}

fn sequence_style_code(style: &sys::yaml_sequence_style_t) -> u32 {
    match *style {
        sys::YAML_ANY_SEQUENCE_STYLE => code::ANY_COLLECTION_STYLE,
        sys::YAML_BLOCK_SEQUENCE_STYLE => code::BLOCK_COLLECTION_STYLE,
        sys::YAML_FLOW_SEQUENCE_STYLE => code::FLOW_COLLECTION_STYLE,
        #[allow(unreachable_patterns)]
        _ => code::UNKNOWN,
    }
}

fn mapping_style_code(style: &sys::yaml_mapping_style_t) -> u32 {
    match *style {
        sys::YAML_ANY_MAPPING_STYLE => code::ANY_COLLECTION_STYLE,
        sys::YAML_BLOCK_MAPPING_STYLE => code::BLOCK_COLLECTION_STYLE,
        sys::YAML_FLOW_MAPPING_STYLE => code::FLOW_COLLECTION_STYLE,
        #[allow(unreachable_patterns)]
        _ => code::UNKNOWN,
    }
}
