use thiserror::Error;

/// Failure of [`copy`](crate::copy).
///
/// `R` is the source's error type and `W` the sink's.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CopyError<R, W> {
    /// Reading from the source failed.
    #[error("read error: {0:?}")]
    Read(R),
    /// Writing to the sink failed.
    #[error("write error: {0:?}")]
    Write(W),
    /// The source was fully copied but releasing it failed.
    #[error("release error: {0:?}")]
    Release(R),
}
