// Rejected command input: missing polynomials, malformed points, etc.
// Parse and arithmetic failures come through as `univ::PolyError` / `univ::io::ParseError`.

#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct InputError { 
    pub msg: String
}

impl std::error::Error for InputError {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = InputError { msg: format!($($arg)*) };
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
