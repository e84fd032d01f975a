use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use auto_impl_ops::auto_ops;
use delegate::delegate;
use log::debug;
use num_traits::Zero;

use crate::io::{ParseError, TermReader};
use crate::util::format::join_terms;
use crate::{Coeff, Deg, DegOrder, InsertOutcome, PolyError, Term, TermTree, Traversal};

// A univariate polynomial in `X` over `R`, held in a `TermTree`.

pub type Poly = Univariate<'x', i64>;

#[derive(Clone, PartialEq, Eq)]
pub struct Univariate<const X: char, R> { 
    tree: TermTree<R>
}

impl<const X: char, R> Univariate<X, R>
where R: Coeff { 
    pub fn new(order: DegOrder) -> Self { 
        Self { tree: TermTree::new(order) }
    }

    pub fn mono(c: R, d: Deg) -> Self { 
        Self::mono_with(c, d, DegOrder::default())
    }

    pub fn mono_with(c: R, d: Deg, order: DegOrder) -> Self { 
        let mut p = Self::new(order);
        p.insert(Term::new(c, d));
        p
    }

    pub fn var_symbol() -> char { 
        X
    }

    pub fn tree(&self) -> &TermTree<R> { 
        &self.tree
    }

    delegate! { 
        to self.tree { 
            pub fn order(&self) -> DegOrder;
            pub fn insert(&mut self, term: Term<R>) -> InsertOutcome;
            #[call(coeff)] pub fn coefficient(&self, n: Deg) -> R;
            pub fn evaluate(&self, x: f64) -> f64;
            pub fn eval(&self, x: &R) -> R;
            #[call(max_term)] pub fn lead_term(&self) -> Option<&Term<R>>;
            pub fn height(&self) -> usize;
        }
    }

    // highest degree. The zero polynomial has degree 0.
    pub fn degree(&self) -> Deg { 
        self.lead_term().map(|t| t.deg()).unwrap_or(0)
    }

    pub fn lead_coeff(&self) -> R { 
        self.lead_term().map(|t| t.coeff().clone()).unwrap_or_else(R::zero)
    }

    // number of stored terms. The zero polynomial counts as one term, 0.
    pub fn nterms(&self) -> usize { 
        if self.tree.is_empty() { 
            1
        } else { 
            self.tree.len()
        }
    }

    pub fn is_zero_poly(&self) -> bool { 
        self.tree.is_empty()
    }

    // terms from the highest degree down.
    pub fn iter(&self) -> impl Iterator<Item = &Term<R>> { 
        self.tree.iter(Traversal::Descending)
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, PolyError> { 
        if self.order() != rhs.order() { 
            return Err(PolyError::OrderMismatch { lhs: self.order(), rhs: rhs.order() })
        }

        if rhs.is_zero_poly() { 
            return Ok(self.clone())
        } else if self.is_zero_poly() { 
            return Ok(rhs.clone())
        } 

        let mut res = self.clone();
        res.tree.merge_add(&rhs.tree)?;
        Ok(res)
    }

    pub fn differentiate(&self) -> Self { 
        let mut res = self.clone();
        res.tree.differentiate();
        res
    }

    pub fn differentiate_n(&self, n: usize) -> Self { 
        debug!("differentiate {n} times.");
        let mut res = self.clone();
        for _ in 0..n { 
            if res.is_zero_poly() { 
                break
            }
            res.tree.differentiate();
        }
        res
    }

    // the parse contract: "N c_1 d_1 ... c_N d_N", highest degree first.
    pub fn to_term_list(&self) -> String { 
        let mut tokens = vec![self.tree.len().to_string()];
        for t in self.iter() { 
            tokens.push(t.coeff().to_string());
            tokens.push(t.deg().to_string());
        }
        tokens.join(" ")
    }

    fn fmt_impl(&self, unicode: bool) -> String { 
        if self.is_zero_poly() { 
            return "0".to_string()
        }
        join_terms(self.iter().map(|t| t.fmt_with(X, unicode)))
    }
}

impl<const X: char, R> Default for Univariate<X, R>
where R: Coeff {
    fn default() -> Self {
        Self::new(DegOrder::default())
    }
}

impl<const X: char, R> From<Term<R>> for Univariate<X, R>
where R: Coeff {
    fn from(t: Term<R>) -> Self {
        let (c, d) = t.into_pair();
        Self::mono(c, d)
    }
}

impl<const X: char, R> FromIterator<Term<R>> for Univariate<X, R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = Term<R>>>(iter: T) -> Self {
        let mut p = Self::default();
        p.extend(iter);
        p
    }
}

impl<const X: char, R> FromIterator<(R, Deg)> for Univariate<X, R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = (R, Deg)>>(iter: T) -> Self {
        iter.into_iter().map(Term::from).collect()
    }
}

impl<const X: char, R> Extend<Term<R>> for Univariate<X, R>
where R: Coeff {
    fn extend<T: IntoIterator<Item = Term<R>>>(&mut self, iter: T) {
        self.tree.extend(iter)
    }
}

impl<const X: char, R> FromStr for Univariate<X, R>
where R: Coeff + FromStr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut r = TermReader::new(s);
        let p = r.read_poly()?;
        r.finish()?;
        Ok(p)
    }
}

impl<const X: char, R> Display for Univariate<X, R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_impl(!f.alternate()))
    }
}

impl<const X: char, R> Debug for Univariate<X, R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

// panics if the two sides are ordered differently; see `try_add`.
#[auto_ops]
impl<const X: char, R> AddAssign<&Univariate<X, R>> for Univariate<X, R>
where R: Coeff {
    fn add_assign(&mut self, rhs: &Univariate<X, R>) {
        match self.try_add(rhs) { 
            Ok(res) => *self = res,
            Err(e) => panic!("{e}")
        }
    }
}

impl<const X: char, R> Zero for Univariate<X, R>
where R: Coeff {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.is_zero_poly()
    }
}

cfg_if::cfg_if! { 
    if #[cfg(feature = "serde")] {
        impl<const X: char, R> serde::Serialize for Univariate<X, R>
        where R: Coeff {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: serde::Serializer {
                serializer.serialize_str(&self.to_term_list())
            }
        }

        impl<'de, const X: char, R> serde::Deserialize<'de> for Univariate<X, R>
        where R: Coeff + FromStr {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: serde::Deserializer<'de> {
                let s = String::deserialize(deserializer)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use super::*;

    type P = Poly;

    fn pairs(p: &P) -> Vec<(i64, Deg)> { 
        p.iter().map(|t| (*t.coeff(), t.deg())).collect_vec()
    }

    #[test]
    fn zero() { 
        let p = P::zero();
        assert!(p.is_zero_poly());
        assert!(p.is_zero());
        assert_eq!(p.nterms(), 1);
        assert_eq!(p.degree(), 0);
        assert_eq!(p.lead_coeff(), 0);
        assert_eq!(p.coefficient(0), 0);
        assert_eq!(p.to_string(), "0");
        assert_eq!(p.order(), DegOrder::Ascending);
    }

    #[test]
    fn mono() { 
        let p = P::mono(3, 2);
        assert_eq!(pairs(&p), vec![(3, 2)]);
        assert_eq!(p.nterms(), 1);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.to_string(), "3x²");

        let p = P::mono(0, 4);
        assert!(p.is_zero_poly());
    }

    #[test]
    fn mono_with() { 
        let p = P::mono_with(3, 2, DegOrder::Descending);
        assert_eq!(p.order(), DegOrder::Descending);
        assert_eq!(p.coefficient(2), 3);
    }

    #[test]
    fn from_iter() { 
        let p = P::from_iter([(3, 2), (-1, 0), (2, 2)]);
        assert_eq!(pairs(&p), vec![(5, 2), (-1, 0)]);
        assert_eq!(p.nterms(), 2);
    }

    #[test]
    fn coefficient() { 
        let p = P::from_iter([(3, 2), (-1, 0)]);
        assert_eq!(p.coefficient(2), 3);
        assert_eq!(p.coefficient(0), -1);
        assert_eq!(p.coefficient(1), 0);
        assert_eq!(p.coefficient(100), 0);
    }

    #[test]
    fn degree() { 
        let p = P::from_iter([(3, 2), (-1, 0), (1, 7), (2, 5)]);
        assert_eq!(p.degree(), 7);
        assert_eq!(p.lead_coeff(), 1);

        let mut p = P::new(DegOrder::Descending);
        p.extend([(3, 2), (-1, 0), (1, 7), (2, 5)].map(Term::from));
        assert_eq!(p.degree(), 7);
    }

    #[test]
    fn degree_of_constant() { 
        let p = P::mono(5, 0);
        assert_eq!(p.degree(), 0);
        assert!(!p.is_zero_poly());
    }

    #[test]
    fn evaluate() { 
        let p = P::from_iter([(4, 2), (5, 1), (-1, 0)]);
        assert_eq!(p.evaluate(2.0), 25.0);
        assert_eq!(p.eval(&2), 25);
        assert_eq!(P::mono(7, 0).evaluate(0.0), 7.0);
    }

    #[test]
    fn add() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let b = P::from_iter([(1, 2), (5, 1)]);
        let c = &a + &b;

        assert_eq!(pairs(&c), vec![(4, 2), (5, 1), (-1, 0)]);
        assert_eq!(c.nterms(), 3);
        assert_eq!(c.evaluate(2.0), 25.0);
        assert_eq!(c.to_string(), "4x² + 5x - 1");

        assert_eq!(pairs(&a), vec![(3, 2), (-1, 0)]);
        assert_eq!(pairs(&b), vec![(1, 2), (5, 1)]);
    }

    #[test]
    fn add_owned() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let b = P::from_iter([(1, 2), (5, 1)]);
        let c = a.clone() + b.clone();
        let d = b + &a;
        assert_eq!(c, d);
    }

    #[test]
    fn add_assign() { 
        let mut a = P::from_iter([(3, 2), (-1, 0)]);
        a += P::from_iter([(-3, 2)]);
        assert_eq!(pairs(&a), vec![(-1, 0)]);

        a += &P::mono(1, 0);
        assert!(a.is_zero_poly());
    }

    #[test]
    fn add_zero() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let z = P::zero();

        assert_eq!(&a + &z, a);
        assert_eq!(&z + &a, a);
        assert_eq!(&z + &z, z);
    }

    #[test]
    fn add_cancel() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let b = P::from_iter([(-3, 2), (1, 0)]);
        let c = &a + &b;

        assert!(c.is_zero_poly());
        assert_eq!(c.nterms(), 1);
        assert_eq!(c.to_string(), "0");
    }

    #[test]
    fn try_add_order_mismatch() { 
        let a = P::mono_with(1, 2, DegOrder::Ascending);
        let b = P::mono_with(1, 2, DegOrder::Descending);

        let e = a.try_add(&b);
        assert_eq!(e, Err(PolyError::OrderMismatch { lhs: DegOrder::Ascending, rhs: DegOrder::Descending }));

        let z = P::new(DegOrder::Descending);
        assert!(a.try_add(&z).is_err());
    }

    #[test]
    #[should_panic(expected = "cannot combine polynomials")]
    fn add_order_mismatch() { 
        let a = P::mono_with(1, 2, DegOrder::Ascending);
        let b = P::mono_with(1, 2, DegOrder::Descending);
        let _ = a + b;
    }

    #[test]
    fn differentiate() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let d = a.differentiate();

        assert_eq!(pairs(&d), vec![(6, 1)]);
        assert_eq!(d.degree(), 1);
        assert_eq!(d.nterms(), 1);
        assert_eq!(d.to_string(), "6x");

        assert_eq!(pairs(&a), vec![(3, 2), (-1, 0)]);
    }

    #[test]
    fn differentiate_twice() { 
        let c = -4;
        let p = P::mono(c, 2);
        let d = p.differentiate().differentiate();
        assert_eq!(pairs(&d), vec![(2 * c, 0)]);
        assert_eq!(p.differentiate_n(2), d);
    }

    #[test]
    fn differentiate_const_and_zero() { 
        assert!(P::mono(9, 0).differentiate().is_zero_poly());
        assert!(P::zero().differentiate().is_zero_poly());
        assert!(P::mono(9, 3).differentiate_n(10).is_zero_poly());
    }

    #[test]
    fn display() { 
        let p = P::from_iter([(1, 0), (2, 1), (-3, 2)]);
        assert_eq!(p.to_string(), "-3x² + 2x + 1");
        assert_eq!(format!("{p:#}"), "-3x^2 + 2x + 1");
        assert_eq!(format!("{p:?}"), "-3x² + 2x + 1");

        let p = P::from_iter([(-1, 3), (-1, 1), (-1, 0)]);
        assert_eq!(p.to_string(), "-x³ - x - 1");

        type Q = Univariate<'t', i32>;
        let q = Q::from_iter([(1, 4), (1, 0)]);
        assert_eq!(q.to_string(), "t⁴ + 1");
    }

    #[test]
    fn display_descending_order() { 
        let mut p = P::new(DegOrder::Descending);
        p.extend([(1, 0), (2, 1), (-3, 2)].map(Term::from));
        assert_eq!(p.to_string(), "-3x² + 2x + 1");
    }

    #[test]
    fn eq() { 
        let a = P::from_iter([(1, 1), (2, 2), (3, 3)]);
        let b = P::from_iter([(3, 3), (1, 1), (2, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, P::from_iter([(1, 1), (2, 2)]));
    }

    #[test]
    fn clone_is_independent() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let mut b = a.clone();
        b.insert(Term::new(1, 0));
        b.insert(Term::new(8, 9));

        assert_eq!(a.coefficient(0), -1);
        assert_eq!(a.coefficient(9), 0);
        assert_eq!(b.coefficient(0), 0);
        assert_eq!(b.coefficient(9), 8);
    }

    #[test]
    fn assign_replaces() { 
        let a = P::from_iter([(3, 2), (-1, 0)]);
        let mut b = P::from_iter([(5, 5)]);
        b.clone_from(&a);
        assert_eq!(b, a);

        b.insert(Term::new(1, 1));
        assert_eq!(a.coefficient(1), 0);
    }

    #[test]
    fn to_term_list() { 
        let p = P::from_iter([(3, 2), (-1, 0)]);
        assert_eq!(p.to_term_list(), "2 3 2 -1 0");
        assert_eq!(P::zero().to_term_list(), "0");
    }

    #[test]
    fn from_str() { 
        let p = P::from_str("3  3 2 0 1 -1 0").unwrap();
        assert_eq!(pairs(&p), vec![(3, 2), (-1, 0)]);

        let p: P = "0".parse().unwrap();
        assert!(p.is_zero_poly());

        assert!(P::from_str("2 3 2").is_err());
        assert!(P::from_str("1 a 2").is_err());
        assert!(P::from_str("1 3 2 4").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() { 
        let p = P::from_iter([(3, 2), (-1, 0)]);
        let ser = serde_json::to_string(&p).unwrap();
        assert_eq!(ser, "\"2 3 2 -1 0\"");

        let des: P = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, p);
    }
}
