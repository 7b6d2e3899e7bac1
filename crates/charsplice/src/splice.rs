use crate::CharSource;

/// Which of the two spliced sources is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplicePhase {
    /// `first` has not reported end-of-data yet.
    BeforeSwitch,
    /// `first` is exhausted; all reads go to `second` from now on.
    AfterSwitch,
}

/// Two sources read back to back as one.
///
/// The switch from `first` to `second` happens at most once, the first time
/// `first` reports end-of-data, and is never undone. Nothing is read from
/// `second` before that. Callers never observe the seam: `first` running dry
/// is answered from `second` within the same call.
///
/// The view owns both sources and releases both in [`release`].
///
/// ```rust
/// use charsplice::{CharSource, StrSource, materialize};
///
/// let mut joined = StrSource::new("ab").splice(StrSource::new("cd"));
/// assert_eq!(materialize(&mut joined).unwrap(), "abcd");
/// ```
///
/// [`release`]: CharSource::release
#[derive(Debug, Clone)]
pub struct SplicedView<A, B> {
    first: A,
    second: B,
    phase: SplicePhase,
}

impl<A, B> SplicedView<A, B>
where
    A: CharSource,
    B: CharSource<Error = A::Error>,
{
    /// Read `first` to its end, then `second`.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            phase: SplicePhase::BeforeSwitch,
        }
    }

    /// Current side of the seam.
    #[must_use]
    pub fn phase(&self) -> SplicePhase {
        self.phase
    }

    /// Recover both sources without releasing them.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }

    fn switch(&mut self) {
        log::trace!("first spliced source exhausted, switching to second");
        self.phase = SplicePhase::AfterSwitch;
    }
}

impl<A, B> CharSource for SplicedView<A, B>
where
    A: CharSource,
    B: CharSource<Error = A::Error>,
{
    type Error = A::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        if self.phase == SplicePhase::BeforeSwitch {
            if let Some(c) = self.first.read_char()? {
                return Ok(Some(c));
            }
            self.switch();
        }
        self.second.read_char()
    }

    fn read(&mut self, buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        if self.phase == SplicePhase::BeforeSwitch {
            // Some(0) is a live answer from `first`, not a reason to switch.
            if let Some(count) = self.first.read(buf)? {
                return Ok(Some(count));
            }
            self.switch();
        }
        self.second.read(buf)
    }

    /// Release `first`, then `second`, attempting both regardless.
    ///
    /// A failure from `first` wins. If both fail, the second failure is
    /// logged and dropped.
    fn release(&mut self) -> Result<(), Self::Error> {
        let first = self.first.release();
        let second = self.second.release();
        match (first, second) {
            (Err(err), Err(suppressed)) => {
                log::warn!("suppressed release failure of second spliced source: {suppressed:?}");
                Err(err)
            }
            (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
            (Ok(()), Ok(())) => Ok(()),
        }
    }
}
