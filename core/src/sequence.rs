use crate::{PResult, Parser, Scanner};

/// An ordered list of parsers run back to back by a [`Sequence`].
///
/// Implemented for tuples of up to eight parsers (output: the tuple of their
/// outputs) and for `Vec<P>` (output: `Vec<P::Output>`). Use
/// [`boxed`](crate::boxed) to put parsers of different types in one `Vec`.
pub trait Stages<'src> {
    type Output;

    /// Runs every stage in order, stopping at the first failure.
    fn run(&self, scanner: &mut Scanner<'src>) -> PResult<Self::Output>;
}

/// Runs its stages in order, each through [`Scanner::parse`].
///
/// The first failing stage fails the whole sequence with that stage's
/// failure; later stages are not invoked and no partial result escapes.
#[derive(Debug, Clone)]
pub struct Sequence<S> {
    stages: S,
}

/// Creates a [`Sequence`] from a tuple or `Vec` of parsers.
pub fn sequence<S>(stages: S) -> Sequence<S> {
    Sequence { stages }
}

impl<S> Sequence<S> {
    #[inline]
    pub fn stages(&self) -> &S {
        &self.stages
    }
}

impl<'src, S: Stages<'src>> Parser<'src> for Sequence<S> {
    type Output = S::Output;

    #[inline]
    fn parse(&self, scanner: &mut Scanner<'src>) -> PResult<S::Output> {
        self.stages.run(scanner)
    }
}

impl<'src, P: Parser<'src>> Stages<'src> for Vec<P> {
    type Output = Vec<P::Output>;

    fn run(&self, scanner: &mut Scanner<'src>) -> PResult<Self::Output> {
        let mut values = Vec::with_capacity(self.len());
        for stage in self {
            values.push(scanner.parse(stage)?);
        }
        Ok(values)
    }
}

macro_rules! tuple_stages {
    ($($name:ident $idx:tt),+) => {
        impl<'src, $($name: Parser<'src>),+> Stages<'src> for ($($name,)+) {
            type Output = ($(<$name as Parser<'src>>::Output,)+);

            fn run(&self, scanner: &mut Scanner<'src>) -> PResult<Self::Output> {
                Ok(($(scanner.parse(&self.$idx)?,)+))
            }
        }
    };
}

tuple_stages!(A 0);
tuple_stages!(A 0, B 1);
tuple_stages!(A 0, B 1, C 2);
tuple_stages!(A 0, B 1, C 2, D 3);
tuple_stages!(A 0, B 1, C 2, D 3, E 4);
tuple_stages!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_stages!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_stages!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{Match, boxed, literal, skip_any};

    #[test]
    fn test_tuple_sequence() {
        let number = Match::new("[0-9]+").unwrap();
        let assign = sequence((Match::new("[a-z]+").unwrap(), literal("="), number));
        let mut scanner = Scanner::new("x=42;");
        assert_eq!(scanner.parse(&assign), Ok(("x", "=", "42")));
        assert_eq!(scanner.remaining(), ";");
    }

    #[test]
    fn test_vec_sequence() {
        let abc = sequence(vec![literal("a"), literal("b"), literal("c")]);
        let mut scanner = Scanner::new("abcd");
        assert_eq!(scanner.parse(&abc), Ok(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_boxed_stages() {
        let mixed = sequence(vec![
            boxed(literal("<")),
            boxed(Match::new("[a-z]+").unwrap()),
            boxed(literal(">")),
        ]);
        let mut scanner = Scanner::new("<tag>");
        assert_eq!(scanner.parse(&mixed), Ok(vec!["<", "tag", ">"]));
        assert!(scanner.is_eof());
    }

    #[test]
    fn test_failure_short_circuits() {
        let calls = Cell::new(0);
        let counted = |s: &mut Scanner<'_>| -> PResult<()> {
            calls.set(calls.get() + 1);
            s.parse(&skip_any(" "))
        };
        let seq = sequence((literal("a"), literal("b"), counted));

        let mut scanner = Scanner::new("ax ");
        let failure = scanner.parse(&seq).unwrap_err();
        assert_eq!(failure.message(), r#"literal "b" did not match"#);
        assert_eq!(failure.location().offset, 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(scanner.location().offset, 0);
    }

    #[test]
    fn test_empty_vec_sequence_succeeds() {
        let empty: Sequence<Vec<crate::Literal>> = sequence(Vec::new());
        let mut scanner = Scanner::new("abc");
        assert_eq!(scanner.parse(&empty), Ok(Vec::new()));
        assert_eq!(scanner.location().offset, 0);
    }
}
