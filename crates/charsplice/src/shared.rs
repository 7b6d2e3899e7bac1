use alloc::rc::Rc;
use core::cell::RefCell;

use crate::CharSource;

/// A cloneable, non-owning handle onto one source.
///
/// Several views may hold handles onto the same source, for example
/// successive fixed-length fields carved out of one connection with
/// [`bounded`](CharSource::bounded). Reads through different handles must be
/// sequenced by the caller; the handles add no ordering of their own.
///
/// Releasing a handle does nothing. The source itself is released once,
/// through [`release_source`](Self::release_source).
///
/// ```rust
/// use charsplice::{CharSource, SharedSource, StrSource, materialize};
///
/// let shared = SharedSource::new(StrSource::new("HelloWorld"));
/// let mut both = shared.clone().bounded(5).splice(shared.clone().bounded(5));
/// assert_eq!(materialize(&mut both).unwrap(), "HelloWorld");
/// ```
///
/// # Panics
///
/// Reading through a handle panics if the source is already borrowed through
/// another handle further up the call stack.
#[derive(Debug)]
pub struct SharedSource<S> {
    inner: Rc<RefCell<S>>,
}

impl<S: CharSource> SharedSource<S> {
    /// Share `source` between handles.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(source)),
        }
    }

    /// Release the shared source on behalf of every handle.
    ///
    /// # Errors
    ///
    /// Propagates the source's release failure.
    pub fn release_source(&self) -> Result<(), S::Error> {
        self.inner.borrow_mut().release()
    }

    /// Run `f` with exclusive access to the shared source.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Recover the source if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns the handle back if other handles are still alive.
    pub fn try_unwrap(self) -> Result<S, Self> {
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<S> Clone for SharedSource<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: CharSource> CharSource for SharedSource<S> {
    type Error = S::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        self.inner.borrow_mut().read_char()
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        self.inner.borrow_mut().read(buf)
    }

    fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
