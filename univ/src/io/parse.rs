use std::io::{BufRead, Read};
use std::iter::Peekable;
use std::str::FromStr;
use log::{debug, trace};
use crate::{Coeff, DegOrder, Term, Univariate};

#[derive(Clone, PartialEq, Eq, Debug, derive_more::Display)]
pub enum ParseError { 
    #[display("missing term count.")]
    MissingCount,

    #[display("negative term count {count}.")]
    NegativeCount { count: i64 },

    #[display("invalid {expected} '{token}' at token {position}.")]
    InvalidToken { token: String, expected: &'static str, position: usize },

    #[display("negative degree {degree} at token {position}.")]
    NegativeDegree { degree: i64, position: usize },

    #[display("input ended after {read} of {expected} terms.")]
    UnexpectedEnd { expected: usize, read: usize },

    #[display("unexpected '{token}' at token {position}.")]
    TrailingInput { token: String, position: usize },
}

impl std::error::Error for ParseError {}

// Reads polynomials given as "N c_1 d_1 ... c_N d_N" from whitespace separated tokens.
// Zero coefficients are skipped. After a failure the reader stays failed.

pub struct TermReader { 
    tokens: Peekable<std::vec::IntoIter<String>>,
    position: usize,
    failed: Option<ParseError>
}

impl TermReader { 
    pub fn new(s: &str) -> Self { 
        let tokens = s.split_whitespace().map(String::from).collect::<Vec<_>>();
        Self { tokens: tokens.into_iter().peekable(), position: 0, failed: None }
    }

    pub fn from_reader<B>(mut r: B) -> std::io::Result<Self>
    where B: BufRead { 
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Ok(Self::new(&s))
    }

    pub fn is_at_end(&mut self) -> bool { 
        self.tokens.peek().is_none()
    }

    pub fn is_failed(&self) -> bool { 
        self.failed.is_some()
    }

    pub fn read_poly<const X: char, R>(&mut self) -> Result<Univariate<X, R>, ParseError>
    where R: Coeff + FromStr { 
        self.read_poly_with(DegOrder::default())
    }

    pub fn read_poly_with<const X: char, R>(&mut self, order: DegOrder) -> Result<Univariate<X, R>, ParseError>
    where R: Coeff + FromStr { 
        if let Some(e) = &self.failed { 
            return Err(e.clone())
        }

        let res = self.read_poly_impl(order);

        if let Err(e) = &res { 
            debug!("parse failed: {e}");
            self.failed = Some(e.clone());
        }

        res
    }

    // ensures that no tokens are left.
    pub fn finish(&mut self) -> Result<(), ParseError> { 
        if let Some(e) = &self.failed { 
            return Err(e.clone())
        }
        if let Some(token) = self.tokens.next() { 
            self.position += 1;
            let e = ParseError::TrailingInput { token, position: self.position };
            self.failed = Some(e.clone());
            return Err(e)
        }
        Ok(())
    }

    fn read_poly_impl<const X: char, R>(&mut self, order: DegOrder) -> Result<Univariate<X, R>, ParseError>
    where R: Coeff + FromStr { 
        let Some(count) = self.read_value::<i64>("term count")? else { 
            return Err(ParseError::MissingCount)
        };

        let Ok(n) = usize::try_from(count) else { 
            return Err(ParseError::NegativeCount { count })
        };

        let mut p = Univariate::new(order);

        for k in 0..n { 
            let end = ParseError::UnexpectedEnd { expected: n, read: k };

            let c = self.read_value::<R>("coefficient")?.ok_or(end.clone())?;
            let d = self.read_value::<i64>("degree")?.ok_or(end)?;

            let Ok(d) = usize::try_from(d) else { 
                return Err(ParseError::NegativeDegree { degree: d, position: self.position })
            };

            if c.is_zero() { 
                trace!("skip zero term at degree {d}.");
                continue
            }

            p.insert(Term::new(c, d));
        }

        debug!("read {n} terms: {p}");

        Ok(p)
    }

    fn read_value<T>(&mut self, expected: &'static str) -> Result<Option<T>, ParseError>
    where T: FromStr { 
        let Some(token) = self.tokens.next() else { 
            return Ok(None)
        };
        self.position += 1;

        match T::from_str(&token) { 
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(ParseError::InvalidToken { token, expected, position: self.position })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Poly;
    use super::*;

    #[test]
    fn read() { 
        let mut r = TermReader::new("2 3 2 -1 0");
        let p: Poly = r.read_poly().unwrap();
        assert_eq!(p.to_string(), "3x² - 1");
        assert!(r.is_at_end());
        assert_eq!(r.finish(), Ok(()));
    }

    #[test]
    fn read_multiple() { 
        let mut r = TermReader::new("2 3 2 -1 0\n2\n1 2\n5 1\n");
        let a: Poly = r.read_poly().unwrap();
        let b: Poly = r.read_poly().unwrap();
        assert_eq!(a.to_string(), "3x² - 1");
        assert_eq!(b.to_string(), "x² + 5x");
        assert!(r.is_at_end());
    }

    #[test]
    fn read_with_order() { 
        let mut r = TermReader::new("3 1 0 2 1 3 2");
        let p: Poly = r.read_poly_with(DegOrder::Descending).unwrap();
        assert_eq!(p.order(), DegOrder::Descending);
        assert_eq!(p.to_string(), "3x² + 2x + 1");
    }

    #[test]
    fn skip_zero() { 
        let mut r = TermReader::new("3 0 5 4 1 0 0");
        let p: Poly = r.read_poly().unwrap();
        assert_eq!(p.to_string(), "4x");
        assert_eq!(p.nterms(), 1);
    }

    #[test]
    fn merge_and_cancel() { 
        let mut r = TermReader::new("3 2 1 3 1 -5 1");
        let p: Poly = r.read_poly().unwrap();
        assert!(p.is_zero_poly());
    }

    #[test]
    fn empty_count() { 
        let mut r = TermReader::new("0");
        let p: Poly = r.read_poly().unwrap();
        assert!(p.is_zero_poly());
    }

    #[test]
    fn missing_count() { 
        let mut r = TermReader::new("   ");
        assert_eq!(r.read_poly::<'x', i64>(), Err(ParseError::MissingCount));
    }

    #[test]
    fn invalid_token() { 
        let mut r = TermReader::new("2 3 x -1 0");
        let e = r.read_poly::<'x', i64>();
        assert_eq!(e, Err(ParseError::InvalidToken { token: "x".into(), expected: "degree", position: 3 }));

        let mut r = TermReader::new("two 3 2");
        let e = r.read_poly::<'x', i64>();
        assert_eq!(e, Err(ParseError::InvalidToken { token: "two".into(), expected: "term count", position: 1 }));

        let mut r = TermReader::new("1 1.5 2");
        let e = r.read_poly::<'x', i64>();
        assert!(matches!(e, Err(ParseError::InvalidToken { expected: "coefficient", .. })));
    }

    #[test]
    fn negative_count() { 
        let mut r = TermReader::new("-1 3 2");
        assert_eq!(r.read_poly::<'x', i64>(), Err(ParseError::NegativeCount { count: -1 }));
    }

    #[test]
    fn negative_degree() { 
        let mut r = TermReader::new("1 3 -2");
        assert_eq!(r.read_poly::<'x', i64>(), Err(ParseError::NegativeDegree { degree: -2, position: 3 }));
    }

    #[test]
    fn unexpected_end() { 
        let mut r = TermReader::new("3 1 2 3");
        assert_eq!(r.read_poly::<'x', i64>(), Err(ParseError::UnexpectedEnd { expected: 3, read: 1 }));
    }

    #[test]
    fn stays_failed() { 
        let mut r = TermReader::new("1 x 2 1 3 2");
        let e = r.read_poly::<'x', i64>().unwrap_err();
        assert!(r.is_failed());

        // the remaining tokens would form a valid polynomial.
        assert_eq!(r.read_poly::<'x', i64>(), Err(e.clone()));
        assert_eq!(r.finish(), Err(e));
    }

    #[test]
    fn trailing_input() { 
        let mut r = TermReader::new("1 3 2 7");
        let _: Poly = r.read_poly().unwrap();
        assert_eq!(r.finish(), Err(ParseError::TrailingInput { token: "7".into(), position: 4 }));
    }

    #[test]
    fn from_reader() { 
        let input = "2 3 2 -1 0\n".as_bytes();
        let mut r = TermReader::from_reader(input).unwrap();
        let p: Poly = r.read_poly().unwrap();
        assert_eq!(p.to_string(), "3x² - 1");
    }

    #[test]
    fn display() { 
        let e = ParseError::InvalidToken { token: "x".into(), expected: "degree", position: 3 };
        assert_eq!(e.to_string(), "invalid degree 'x' at token 3.");

        let e = ParseError::UnexpectedEnd { expected: 3, read: 1 };
        assert_eq!(e.to_string(), "input ended after 1 of 3 terms.");
    }
}
