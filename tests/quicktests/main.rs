use course_catalog::Course;
use quickcheck::{Arbitrary, Gen};

mod store;

/// A small alphabet so generated course numbers collide often enough to exercise duplicates.
const PREFIXES: &[&str] = &["CS", "MATH", "ENG", "cs", "BIO"];

/// An enum for the various kinds of "things" to do to
/// the course store in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Insert the course into the store
    Insert(Course),
    /// Drop everything in the store
    Clear,
    /// Compare iteration against the model
    Iter,
}

/// Generates course numbers like `CS12` or `MATH3`.
pub(crate) fn course_number(g: &mut Gen) -> String {
    let prefix = g.choose(PREFIXES).unwrap();
    format!("{prefix}{}", u8::arbitrary(g) % 50)
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(Course::new(course_number(g), String::arbitrary(g))),
            1 => Op::Clear,
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
