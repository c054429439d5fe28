use yamlet_common::Encoding;

/// Options for a parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Cut scalar values at the first embedded NUL byte instead of keeping
    /// the full length-delimited value.
    pub truncate_at_nul: bool,
    /// Input encoding to assume instead of detecting it from the byte order
    /// mark. `None` and [`Encoding::Any`] both mean autodetect.
    pub encoding: Option<Encoding>,
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn truncate_at_nul(mut self, truncate: bool) -> Self {
        self.truncate_at_nul = truncate;
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}
