use alloc::string::String;

use rstest::rstest;

use super::probe::{Probe, ProbeError, ReleaseLog, drain_chars};
use crate::{
    CharSource, DrainOptions, SplicePhase, SplicedView, StrSource, materialize, materialize_with,
};

#[rstest]
#[case::both("ab", "cd", "abcd")]
#[case::empty_first("", "abc", "abc")]
#[case::empty_second("ab", "", "ab")]
#[case::both_empty("", "", "")]
#[case::multibyte("ü€", "𝄞x", "ü€𝄞x")]
fn yields_concatenation(#[case] first: &str, #[case] second: &str, #[case] expected: &str) {
    let mut by_char = StrSource::new(first).splice(StrSource::new(second));
    assert_eq!(drain_chars(&mut by_char).unwrap(), expected);

    let mut bulk = StrSource::new(first).splice(StrSource::new(second));
    assert_eq!(materialize(&mut bulk).unwrap(), expected);
}

#[test]
fn second_untouched_before_switch() {
    let mut first = Probe::new("ab");
    let mut second = Probe::new("cd");
    let mut view = SplicedView::new(&mut first, &mut second);
    assert_eq!(view.read_char(), Ok(Some('a')));
    assert_eq!(view.read_char(), Ok(Some('b')));
    assert_eq!(view.phase(), SplicePhase::BeforeSwitch);
    assert_eq!(second.reads, 0);
}

#[test]
fn seam_is_crossed_within_one_call() {
    let mut view = StrSource::new("a").splice(StrSource::new("b"));
    assert_eq!(view.read_char(), Ok(Some('a')));
    assert_eq!(view.read_char(), Ok(Some('b')));
    assert_eq!(view.phase(), SplicePhase::AfterSwitch);
    assert_eq!(view.read_char(), Ok(None));
}

#[test]
fn switch_is_permanent() {
    let mut first = Probe::new("a");
    let mut second = Probe::new("bc");
    let mut view = SplicedView::new(&mut first, &mut second);
    let mut buf = ['\0'; 4];
    assert_eq!(view.read(&mut buf), Ok(Some(1)));
    assert_eq!(view.read(&mut buf), Ok(Some(2)));
    assert_eq!(view.read(&mut buf), Ok(None));
    assert_eq!(view.read_char(), Ok(None));
    // one read to find the end, never consulted again
    assert_eq!(first.reads, 2);
    assert_eq!(first.reads_after_end, 1);
}

#[test]
fn exhausted_splice_does_not_loop() {
    let mut first = Probe::new("ab");
    let mut second = Probe::new("");
    let mut view = SplicedView::new(&mut first, &mut second);
    assert_eq!(drain_chars(&mut view).unwrap(), "ab");
    assert_eq!(view.read_char(), Ok(None));
    assert_eq!(first.reads, 3);
    assert_eq!(second.reads, 2);
}

#[test]
fn zero_count_from_first_is_returned_as_is() {
    let mut view = StrSource::new("ab").splice(StrSource::new("cd"));
    assert_eq!(view.read(&mut []), Ok(Some(0)));
    assert_eq!(view.phase(), SplicePhase::BeforeSwitch);
}

#[test]
fn mixed_granularity_reads() {
    let mut view = Probe::chunked("hello", 2).splice(Probe::chunked("world", 3));
    let mut out = String::new();
    let mut buf = ['\0'; 8];
    let mut toggle = false;
    loop {
        toggle = !toggle;
        if toggle {
            match view.read_char().unwrap() {
                Some(c) => out.push(c),
                None => break,
            }
        } else {
            match view.read(&mut buf).unwrap() {
                Some(count) => out.extend(&buf[..count]),
                None => break,
            }
        }
    }
    assert_eq!(out, "helloworld");
}

#[test]
fn small_working_buffer_crosses_seam() {
    let mut view = StrSource::new("abc").splice(StrSource::new("defg"));
    let text = materialize_with(&mut view, DrainOptions { buffer_size: 2 }).unwrap();
    assert_eq!(text, "abcdefg");
}

#[test]
fn release_reaches_both_in_order() {
    let log = ReleaseLog::default();
    let mut view = Probe::new("ab")
        .logging_release(&log, "first")
        .splice(Probe::new("cd").logging_release(&log, "second"));
    assert_eq!(view.read_char(), Ok(Some('a')));
    assert_eq!(view.release(), Ok(()));
    assert_eq!(*log.borrow(), ["first", "second"]);
    let (first, second) = view.into_inner();
    assert_eq!(first.releases, 1);
    assert_eq!(second.releases, 1);
}

#[rstest]
#[case::first_fails(Some("first"), None, Err(ProbeError("first")))]
#[case::second_fails(None, Some("second"), Err(ProbeError("second")))]
#[case::both_fail(Some("first"), Some("second"), Err(ProbeError("first")))]
#[case::neither_fails(None, None, Ok(()))]
fn release_is_best_effort(
    #[case] first_failure: Option<&'static str>,
    #[case] second_failure: Option<&'static str>,
    #[case] expected: Result<(), ProbeError>,
) {
    let log = ReleaseLog::default();
    let mut first = Probe::new("ab").logging_release(&log, "first");
    first.fail_release = first_failure;
    let mut second = Probe::new("cd").logging_release(&log, "second");
    second.fail_release = second_failure;
    let mut view = first.splice(second);
    assert_eq!(view.release(), expected);
    assert_eq!(*log.borrow(), ["first", "second"]);
    let (first, second) = view.into_inner();
    assert_eq!(first.releases, 1);
    assert_eq!(second.releases, 1);
}

#[test]
fn read_failure_in_first_does_not_switch() {
    let mut view = Probe::new("ab").failing_read_at(1).splice(Probe::new("cd"));
    assert_eq!(view.read_char(), Ok(Some('a')));
    assert_eq!(view.read_char(), Err(ProbeError("read failed")));
    assert_eq!(view.phase(), SplicePhase::BeforeSwitch);
}
