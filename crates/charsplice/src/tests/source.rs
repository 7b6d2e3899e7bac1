use alloc::{boxed::Box, vec::Vec};
use core::convert::Infallible;

use rstest::rstest;

use crate::{CharSource, StrSource};

/// Records every `read_into` request it receives.
#[derive(Default)]
struct OffsetRecorder {
    requests: Vec<(usize, usize)>,
}

impl CharSource for OffsetRecorder {
    type Error = Infallible;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        Ok(None)
    }

    fn read(&mut self, _buf: &mut [char]) -> Result<Option<usize>, Self::Error> {
        Ok(None)
    }

    fn read_into(
        &mut self,
        _buf: &mut [char],
        offset: usize,
        max_len: usize,
    ) -> Result<Option<usize>, Self::Error> {
        self.requests.push((offset, max_len));
        Ok(Some(0))
    }
}

/// Go through `S`'s own `read_into`, whatever wrapper `S` is.
fn read_window<S: CharSource>(source: &mut S, offset: usize, max_len: usize) -> Option<usize> {
    let mut buf = ['\0'; 4];
    source.read_into(&mut buf, offset, max_len).unwrap()
}

#[test]
fn borrowed_source_keeps_read_into_override() {
    let mut recorder = OffsetRecorder::default();
    let mut borrowed = &mut recorder;
    assert_eq!(read_window(&mut borrowed, 1, 2), Some(0));
    assert_eq!(recorder.requests, [(1, 2)]);
}

#[test]
fn boxed_source_keeps_read_into_override() {
    let mut boxed = Box::new(OffsetRecorder::default());
    assert_eq!(read_window(&mut boxed, 3, 1), Some(0));
    assert_eq!(boxed.requests, [(3, 1)]);
}

#[test]
fn read_into_fills_requested_window() {
    let mut source = StrSource::new("abcdef");
    let mut buf = ['.'; 5];
    assert_eq!(source.read_into(&mut buf, 1, 3), Ok(Some(3)));
    assert_eq!(buf, ['.', 'a', 'b', 'c', '.']);
}

#[rstest]
#[case::huge_offset(usize::MAX, 2)]
#[case::huge_len(2, usize::MAX)]
#[should_panic(expected = "out of range")]
fn read_into_out_of_bounds_is_a_range_panic(#[case] offset: usize, #[case] max_len: usize) {
    let mut buf = ['\0'; 4];
    let _ = StrSource::new("abc").read_into(&mut buf, offset, max_len);
}
