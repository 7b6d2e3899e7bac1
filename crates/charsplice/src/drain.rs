use alloc::{string::String, vec};

use crate::{CharSink, CharSource, CopyError, DrainOptions};

/// Read `source` to end-of-data and collect everything into a string.
///
/// The source is not released; it still belongs to the caller. A source that
/// is already at end-of-data yields an empty string.
///
/// # Errors
///
/// Propagates the first read failure of `source`.
pub fn materialize<S>(source: &mut S) -> Result<String, S::Error>
where
    S: CharSource + ?Sized,
{
    materialize_with(source, DrainOptions::default())
}

/// [`materialize`] with an explicit working-buffer size.
///
/// # Errors
///
/// Propagates the first read failure of `source`.
pub fn materialize_with<S>(source: &mut S, options: DrainOptions) -> Result<String, S::Error>
where
    S: CharSource + ?Sized,
{
    let mut buf = vec!['\0'; options.effective_buffer_size()];
    let mut text = String::new();
    while let Some(count) = source.read(&mut buf)? {
        text.extend(&buf[..count]);
    }
    Ok(text)
}

/// Write everything `source` yields into `sink`, then release `source`.
///
/// The source is taken by value: releasing it is this function's job. The
/// sink is never released. Returns the number of characters copied.
///
/// # Errors
///
/// A read or write failure stops the copy; `source` is still released and
/// the read or write failure is returned. Otherwise a release failure is
/// returned as [`CopyError::Release`].
pub fn copy<S, W>(source: S, sink: &mut W) -> Result<u64, CopyError<S::Error, W::Error>>
where
    S: CharSource,
    W: CharSink + ?Sized,
{
    copy_with(source, sink, DrainOptions::default())
}

/// [`copy`] with an explicit working-buffer size.
///
/// # Errors
///
/// See [`copy`].
pub fn copy_with<S, W>(
    mut source: S,
    sink: &mut W,
    options: DrainOptions,
) -> Result<u64, CopyError<S::Error, W::Error>>
where
    S: CharSource,
    W: CharSink + ?Sized,
{
    let copied = pump(&mut source, sink, options);
    let released = source.release();
    match (copied, released) {
        (Ok(total), Ok(())) => {
            log::debug!("copied {total} chars and released source");
            Ok(total)
        }
        (Ok(_), Err(err)) => Err(CopyError::Release(err)),
        (Err(err), released) => {
            if let Err(suppressed) = released {
                log::warn!("suppressed release failure after aborted copy: {suppressed:?}");
            }
            Err(err)
        }
    }
}

fn pump<S, W>(
    source: &mut S,
    sink: &mut W,
    options: DrainOptions,
) -> Result<u64, CopyError<S::Error, W::Error>>
where
    S: CharSource,
    W: CharSink + ?Sized,
{
    let mut buf = vec!['\0'; options.effective_buffer_size()];
    let mut total = 0u64;
    while let Some(count) = source.read(&mut buf).map_err(CopyError::Read)? {
        if count > 0 {
            sink.write_chars(&buf[..count]).map_err(CopyError::Write)?;
            total += count as u64;
        }
    }
    Ok(total)
}
