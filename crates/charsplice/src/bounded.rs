use crate::CharSource;

/// A view that yields at most `limit` characters of the wrapped source.
///
/// The view carves a fixed-length field out of a longer stream that is still
/// needed afterwards, so it never releases what it wraps: [`release`] is a
/// no-op and the wrapped source's lifetime stays with whoever built it. Wrap
/// a `&mut S` or a [`SharedSource`](crate::SharedSource) handle rather than
/// moving the only copy of a source in.
///
/// ```rust
/// use charsplice::{CharSource, StrSource, materialize};
///
/// let mut source = StrSource::new("HelloWorld");
/// let mut hello = (&mut source).bounded(5);
/// assert_eq!(materialize(&mut hello).unwrap(), "Hello");
/// assert_eq!(source.remaining(), "World");
/// ```
///
/// [`release`]: CharSource::release
#[derive(Debug, Clone)]
pub struct BoundedView<S> {
    source: S,
    limit: u64,
    consumed: u64,
}

impl<S: CharSource> BoundedView<S> {
    /// Wrap `source`, allowing at most `limit` characters through.
    #[must_use]
    pub fn new(source: S, limit: u64) -> Self {
        Self {
            source,
            limit,
            consumed: 0,
        }
    }

    /// The cap fixed at construction.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Characters handed out so far.
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Characters still allowed through before the view reports end-of-data.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.limit - self.consumed
    }

    /// Recover the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CharSource> CharSource for BoundedView<S> {
    type Error = S::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        if self.consumed == self.limit {
            return Ok(None);
        }
        let next = self.source.read_char()?;
        if next.is_some() {
            self.consumed += 1;
        }
        Ok(next)
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        if self.consumed == self.limit {
            return Ok(None);
        }
        // remaining() may exceed usize on narrow targets
        let allowed = usize::try_from(self.remaining()).map_or(buf.len(), |r| r.min(buf.len()));
        match self.source.read(&mut buf[..allowed])? {
            Some(count) => {
                debug_assert!(count <= allowed, "source overfilled its buffer");
                self.consumed += count as u64;
                Ok(Some(count))
            }
            // end-of-data leaves `consumed` untouched
            None => Ok(None),
        }
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        // The wrapped source belongs to the caller.
        Ok(())
    }
}
