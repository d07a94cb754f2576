//! Limits applied while parsing and compiling patterns.

use bon::Builder;

/// Default maximum nesting depth of select/plural branch messages.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resource limits for parsing and compiling.
///
/// Recursion in the parser, the compiler, and the formatter is proportional to
/// the nesting depth of branch messages, so every entry point enforces
/// `max_depth`.
///
/// # Example
///
/// ```
/// use messageformat::Options;
///
/// let options = Options::builder().max_depth(8).max_pattern_len(4096).build();
/// assert_eq!(options.max_depth(), 8);
/// assert_eq!(options.max_pattern_len(), Some(4096));
///
/// let defaults = Options::default();
/// assert_eq!(defaults.max_depth(), 64);
/// assert_eq!(defaults.max_pattern_len(), None);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Options {
    /// Maximum nesting depth of branch messages. The root message has depth 0.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum pattern length in bytes; unlimited when unset.
    max_pattern_len: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Options::builder().build()
    }
}

impl Options {
    /// Maximum nesting depth of branch messages.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Maximum pattern length in bytes, if any.
    pub fn max_pattern_len(&self) -> Option<usize> {
        self.max_pattern_len
    }
}
