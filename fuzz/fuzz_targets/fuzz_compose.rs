#![no_main]
use std::convert::Infallible;

use arbitrary::Arbitrary;
use charsplice::{CharSource, DrainOptions, StrSource, materialize_with};
use libfuzzer_sys::fuzz_target;

/// A composition of views, built bottom-up over in-memory sources.
#[derive(Debug, Arbitrary)]
enum Tree {
    Leaf(String),
    Bounded(Box<Tree>, u8),
    Spliced(Box<Tree>, Box<Tree>),
}

impl Tree {
    /// What draining this composition must produce.
    fn expected(&self) -> String {
        match self {
            Tree::Leaf(text) => text.clone(),
            Tree::Bounded(inner, limit) => inner.expected().chars().take(usize::from(*limit)).collect(),
            Tree::Spliced(first, second) => first.expected() + &second.expected(),
        }
    }

    fn build(&self) -> Box<dyn CharSource<Error = Infallible>> {
        match self {
            Tree::Leaf(text) => Box::new(StrSource::new(text.as_str())),
            Tree::Bounded(inner, limit) => Box::new(inner.build().bounded(u64::from(*limit))),
            Tree::Spliced(first, second) => Box::new(first.build().splice(second.build())),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    tree: Tree,
    buffer_size: u8,
    by_char: bool,
}

fuzz_target!(|input: Input| {
    let expected = input.tree.expected();
    let mut source = input.tree.build();
    let actual = if input.by_char {
        let mut out = String::new();
        while let Some(c) = source.read_char().unwrap() {
            out.push(c);
        }
        out
    } else {
        let options = DrainOptions {
            buffer_size: usize::from(input.buffer_size),
        };
        materialize_with(&mut source, options).unwrap()
    };
    assert_eq!(actual, expected);
    assert_eq!(source.read_char().unwrap(), None);
});
