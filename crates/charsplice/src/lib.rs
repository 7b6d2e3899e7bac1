//! Pull-based character streams that compose.
//!
//! [`CharSource`] is the capability everything here is built on: read one
//! character or a batch of them, learn about end-of-data, release. Two views
//! implement it on top of other sources and nest freely:
//!
//! - [`BoundedView`] caps how many characters may be read through it and
//!   leaves the wrapped source open for whoever reads next.
//! - [`SplicedView`] reads one source to its end, then another, as if they
//!   were a single stream.
//!
//! [`materialize`] and [`copy`] drain any source to a string or a
//! [`CharSink`].
//!
//! ```rust
//! use charsplice::{CharSource, StrSource, materialize};
//!
//! let header = StrSource::new("From: joe\r\n");
//! let mut wire = StrSource::new("Subject: hi\r\n\r\nbody");
//! let mut message = header.splice((&mut wire).bounded(13));
//! assert_eq!(
//!     materialize(&mut message).unwrap(),
//!     "From: joe\r\nSubject: hi\r\n"
//! );
//! assert_eq!(wire.remaining(), "\r\nbody");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bounded;
mod drain;
mod error;
mod options;
mod shared;
mod source;
mod splice;

pub mod service;

#[cfg(test)]
mod tests;

pub use bounded::BoundedView;
pub use drain::{copy, copy_with, materialize, materialize_with};
pub use error::CopyError;
pub use options::{DEFAULT_BUFFER_SIZE, DrainOptions};
pub use shared::SharedSource;
pub use source::{CharSink, CharSource, StrSource};
pub use splice::{SplicePhase, SplicedView};
