use alloc::{boxed::Box, string::String, vec::Vec};
use core::{convert::Infallible, fmt};

use crate::{bounded::BoundedView, splice::SplicedView};

/// A pull-based, single-reader source of characters.
///
/// End-of-data is reported as `Ok(None)`. Once a source has reported
/// end-of-data, every later read on the same instance reports it again.
///
/// Errors raised by the underlying transport are returned unchanged; no
/// combinator in this crate retries or recovers from them.
///
/// # Zero-length reads
///
/// A bulk read into an empty slice returns `Ok(Some(0))` while the source is
/// still live and `Ok(None)` once it has reached its end.
pub trait CharSource {
    /// Failure raised by the underlying transport.
    type Error: fmt::Debug;

    /// Read the next character, or `None` at end-of-data.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying transport.
    fn read_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Read up to `buf.len()` characters into `buf`.
    ///
    /// Returns the number of characters placed at the front of `buf`, or
    /// `None` if the source had no characters left to place.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying transport.
    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error>;

    /// Read up to `max_len` characters into `buf` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying transport.
    ///
    /// # Panics
    ///
    /// Panics if `offset` or `offset + max_len` is out of bounds for `buf`.
    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        max_len: usize,
    ) -> Result<Option<usize>, Self::Error> {
        self.read(&mut buf[offset..][..max_len])
    }

    /// Release whatever this source itself acquired.
    ///
    /// Callers invoke this at most once per source.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised while releasing.
    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Cap this source at `limit` characters.
    ///
    /// The returned view never releases `self`; pass a borrow or a
    /// [`SharedSource`](crate::SharedSource) handle to keep ownership.
    fn bounded(self, limit: u64) -> BoundedView<Self>
    where
        Self: Sized,
    {
        BoundedView::new(self, limit)
    }

    /// Continue with `second` once this source is exhausted.
    fn splice<B>(self, second: B) -> SplicedView<Self, B>
    where
        Self: Sized,
        B: CharSource<Error = Self::Error>,
    {
        SplicedView::new(self, second)
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    type Error = S::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        (**self).read_char()
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        (**self).read(buf)
    }

    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        max_len: usize,
    ) -> Result<Option<usize>, Self::Error> {
        (**self).read_into(buf, offset, max_len)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    type Error = S::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        (**self).read_char()
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        (**self).read(buf)
    }

    fn read_into(
        &mut self,
        buf: &mut [char],
        offset: usize,
        max_len: usize,
    ) -> Result<Option<usize>, Self::Error> {
        (**self).read_into(buf, offset, max_len)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

/// An in-memory [`CharSource`] over an owned string.
#[derive(Debug, Clone, Default)]
pub struct StrSource {
    text: String,
    pos: usize,
}

impl StrSource {
    /// Create a source yielding the characters of `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
        }
    }

    /// The characters not yet read.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Whether every character has been read.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.text.len()
    }
}

impl From<&str> for StrSource {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StrSource {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl CharSource for StrSource {
    type Error = Infallible;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        let next = self.remaining().chars().next();
        if let Some(c) = next {
            self.pos += c.len_utf8();
        }
        Ok(next)
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        if self.is_exhausted() {
            return Ok(None);
        }
        let mut count = 0;
        for (slot, c) in buf.iter_mut().zip(self.text[self.pos..].chars()) {
            *slot = c;
            self.pos += c.len_utf8();
            count += 1;
        }
        Ok(Some(count))
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        self.text = String::new();
        self.pos = 0;
        Ok(())
    }
}

/// A destination accepting bulk character writes.
pub trait CharSink {
    /// Failure raised by the destination.
    type Error: fmt::Debug;

    /// Write every character of `chars`.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the destination.
    fn write_chars(&mut self, chars: &[char]) -> Result<(), Self::Error>;
}

impl CharSink for String {
    type Error = Infallible;

    fn write_chars(&mut self, chars: &[char]) -> Result<(), Self::Error> {
        self.extend(chars);
        Ok(())
    }
}

impl CharSink for Vec<char> {
    type Error = Infallible;

    fn write_chars(&mut self, chars: &[char]) -> Result<(), Self::Error> {
        self.extend_from_slice(chars);
        Ok(())
    }
}

impl<W: CharSink + ?Sized> CharSink for &mut W {
    type Error = W::Error;

    fn write_chars(&mut self, chars: &[char]) -> Result<(), Self::Error> {
        (**self).write_chars(chars)
    }
}
