//! Stable symbols for the engine's encoding and style codes.
//!
//! The engine reports encodings and presentation styles as numeric codes.
//! Everything outside this module only sees the symbolic enums below, so the
//! numeric vocabulary lives here and nowhere else.

use std::fmt::{Display, Formatter};

/// Numeric codes used by the low-level engine (libyaml numbering).
pub mod code {
    pub const ANY_ENCODING: u32 = 0;
    pub const UTF8_ENCODING: u32 = 1;
    pub const UTF16LE_ENCODING: u32 = 2;
    pub const UTF16BE_ENCODING: u32 = 3;

    pub const ANY_SCALAR_STYLE: u32 = 0;
    pub const PLAIN_SCALAR_STYLE: u32 = 1;
    pub const SINGLE_QUOTED_SCALAR_STYLE: u32 = 2;
    pub const DOUBLE_QUOTED_SCALAR_STYLE: u32 = 3;
    pub const LITERAL_SCALAR_STYLE: u32 = 4;
    pub const FOLDED_SCALAR_STYLE: u32 = 5;

    pub const ANY_COLLECTION_STYLE: u32 = 0;
    pub const BLOCK_COLLECTION_STYLE: u32 = 1;
    pub const FLOW_COLLECTION_STYLE: u32 = 2;

    /// Code reported for values the engine binding could not map.
    pub const UNKNOWN: u32 = u32::MAX;
}

/// Encoding of the input stream, as reported on stream start.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// Engine was left to autodetect the encoding.
    Any,
    /// Unrecognized or absent encoding. Displays as the empty string.
    #[default]
    Unknown,
}

impl Encoding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Any => "Any",
            Encoding::Unknown => "",
        }
    }

    /// Engine code for this encoding, `None` for [`Encoding::Unknown`].
    #[must_use]
    pub const fn code(self) -> Option<u32> {
        match self {
            Encoding::Utf8 => Some(code::UTF8_ENCODING),
            Encoding::Utf16Le => Some(code::UTF16LE_ENCODING),
            Encoding::Utf16Be => Some(code::UTF16BE_ENCODING),
            Encoding::Any => Some(code::ANY_ENCODING),
            Encoding::Unknown => None,
        }
    }
}

/// Presentation style of a scalar.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ScalarStyle {
    /// Plain, unspecified or unknown style. Displays as the empty string.
    #[default]
    Plain,
    /// Single quote string which permits any symbol inside
    /// E.g. :
    /// ```yaml
    /// ' This is a quoted string
    ///    with ''quoted'' string within.'
    /// ```
    SingleQuoted,
    /// Double quoted string with escapes
    /// E.g. :
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuoted,
    /// Literal block scalar like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Folded block scalar like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
}

impl ScalarStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarStyle::Plain => "",
            ScalarStyle::SingleQuoted => "single-quoted",
            ScalarStyle::DoubleQuoted => "double-quoted",
            ScalarStyle::Literal => "literal",
            ScalarStyle::Folded => "folded",
        }
    }

    /// Style indicator used by the yaml-test-suite event notation.
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            ScalarStyle::Plain => ':',
            ScalarStyle::SingleQuoted => '\'',
            ScalarStyle::DoubleQuoted => '"',
            ScalarStyle::Literal => '|',
            ScalarStyle::Folded => '>',
        }
    }
}

/// Presentation style of a sequence or mapping.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CollectionStyle {
    /// flow style like `[x, x, x]` or `{x: Y, a: B}`
    Flow,
    /// block style like:
    /// ```yaml
    /// - x
    /// - x
    /// ```
    Block,
    Any,
    /// Unrecognized style. Displays as the empty string.
    #[default]
    Unknown,
}

impl CollectionStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CollectionStyle::Flow => "flow",
            CollectionStyle::Block => "block",
            CollectionStyle::Any => "any",
            CollectionStyle::Unknown => "",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Encoding, ScalarStyle, CollectionStyle);

/// Maps an engine encoding code to its symbol. Unknown codes map to
/// [`Encoding::Unknown`].
#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub const fn normalize_encoding(code: u32) -> Encoding {
    match code {
        code::UTF8_ENCODING => Encoding::Utf8,
        code::UTF16LE_ENCODING => Encoding::Utf16Le,
        code::UTF16BE_ENCODING => Encoding::Utf16Be,
        code::ANY_ENCODING => Encoding::Any,
        _ => Encoding::Unknown,
    }
}

/// Maps an engine scalar style code to its symbol. Plain, "any" and unknown
/// codes all map to [`ScalarStyle::Plain`].
#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub const fn normalize_scalar_style(code: u32) -> ScalarStyle {
    match code {
        code::SINGLE_QUOTED_SCALAR_STYLE => ScalarStyle::SingleQuoted,
        code::DOUBLE_QUOTED_SCALAR_STYLE => ScalarStyle::DoubleQuoted,
        code::LITERAL_SCALAR_STYLE => ScalarStyle::Literal,
        code::FOLDED_SCALAR_STYLE => ScalarStyle::Folded,
        _ => ScalarStyle::Plain,
    }
}

/// Maps an engine sequence or mapping style code to its symbol.
#[must_use]
#[cfg_attr(not(feature = "no-inline"), inline)]
pub const fn normalize_collection_style(code: u32) -> CollectionStyle {
    match code {
        code::FLOW_COLLECTION_STYLE => CollectionStyle::Flow,
        code::BLOCK_COLLECTION_STYLE => CollectionStyle::Block,
        code::ANY_COLLECTION_STYLE => CollectionStyle::Any,
        _ => CollectionStyle::Unknown,
    }
}
