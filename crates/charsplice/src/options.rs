/// Working-buffer size used by [`materialize`](crate::materialize) and
/// [`copy`](crate::copy).
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Configuration for the draining operations.
///
/// # Examples
///
/// ```rust
/// use charsplice::{DrainOptions, StrSource, materialize_with};
///
/// let options = DrainOptions { buffer_size: 4 };
/// let text = materialize_with(&mut StrSource::new("spliced"), options).unwrap();
/// assert_eq!(text, "spliced");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrainOptions {
    /// Characters requested from the source per bulk read.
    ///
    /// Zero is treated as one.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_SIZE`]
    pub buffer_size: usize,
}

impl DrainOptions {
    pub(crate) fn effective_buffer_size(self) -> usize {
        self.buffer_size.max(1)
    }
}

impl Default for DrainOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
