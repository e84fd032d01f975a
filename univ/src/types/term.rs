use std::fmt::{Debug, Display};
use crate::util::format::fmt_mono;
use crate::{Coeff, PolyError};

pub type Deg = usize;

// A single term c x^d. 
// Terms are replaced as a whole, never edited from outside the tree.

#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Term<R> { 
    pub(crate) coeff: R,
    pub(crate) deg: Deg
}

impl<R> Term<R> { 
    pub fn new(coeff: R, deg: Deg) -> Self { 
        Self { coeff, deg }
    }

    pub fn coeff(&self) -> &R { 
        &self.coeff
    }

    pub fn deg(&self) -> Deg { 
        self.deg
    }

    pub fn into_pair(self) -> (R, Deg) { 
        (self.coeff, self.deg)
    }
}

impl<R> Term<R>
where R: Coeff { 
    pub fn is_zero(&self) -> bool { 
        self.coeff.is_zero()
    }

    pub fn fmt_with(&self, x: char, unicode: bool) -> String { 
        let c = self.coeff.to_string();
        let m = fmt_mono(x, self.deg, unicode);

        if m == "1" { 
            c
        } else if c == "1" { 
            m
        } else if c == "-1" { 
            format!("-{m}")
        } else { 
            format!("{c}{m}")
        }
    }
}

impl<R> From<(R, Deg)> for Term<R> {
    fn from(pair: (R, Deg)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl<R> TryFrom<(R, i64)> for Term<R> {
    type Error = PolyError;

    fn try_from(pair: (R, i64)) -> Result<Self, Self::Error> {
        let (c, d) = pair;
        let Ok(d) = Deg::try_from(d) else { 
            return Err(PolyError::InvalidTerm { msg: format!("negative degree {d}") })
        };
        Ok(Self::new(c, d))
    }
}

impl<R> Display for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.fmt_with('x', !f.alternate()))
    }
}

impl<R> Debug for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
