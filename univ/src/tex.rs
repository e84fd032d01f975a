use crate::util::format::join_terms;
use crate::{Coeff, Term, Univariate};

pub trait TeX { 
    fn tex_math_symbol() -> String;
    fn tex_string(&self) -> String;
}

fn tex_term<R>(t: &Term<R>, x: char) -> String
where R: Coeff { 
    let c = t.coeff().to_string();
    let m = match t.deg() { 
        0 => "1".to_string(),
        1 => x.to_string(),
        d => format!("{x}^{{{d}}}")
    };

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

impl<const X: char, R> TeX for Univariate<X, R>
where R: Coeff {
    fn tex_math_symbol() -> String {
        format!("\\mathbb{{Z}}[{X}]")
    }

    fn tex_string(&self) -> String {
        if self.is_zero_poly() { 
            return "0".to_string()
        }
        join_terms(self.iter().map(|t| tex_term(t, X)))
    }
}
