use crate::io::ParseError;
use crate::DegOrder;

#[derive(Clone, PartialEq, Eq, Debug, derive_more::Display)]
pub enum PolyError { 
    #[display("invalid term: {msg}")]
    InvalidTerm { msg: String },

    #[display("cannot combine polynomials ordered {lhs} and {rhs}.")]
    OrderMismatch { lhs: DegOrder, rhs: DegOrder },

    #[display("parse failure: {_0}")]
    Parse(ParseError),
}

impl std::error::Error for PolyError {}

impl From<ParseError> for PolyError {
    fn from(e: ParseError) -> Self {
        PolyError::Parse(e)
    }
}

macro_rules! ensure_same_order {
    ($lhs:expr, $rhs:expr) => {{
        let (lhs, rhs) = ($lhs, $rhs);
        if lhs != rhs { 
            return Err($crate::PolyError::OrderMismatch { lhs, rhs })
        }
    }}
}

pub(crate) use ensure_same_order;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() { 
        let e = PolyError::OrderMismatch { lhs: DegOrder::Ascending, rhs: DegOrder::Descending };
        assert_eq!(e.to_string(), "cannot combine polynomials ordered ascending and descending.");

        let e = PolyError::InvalidTerm { msg: "negative degree -1".into() };
        assert_eq!(e.to_string(), "invalid term: negative degree -1");

        let e = PolyError::from(ParseError::MissingCount);
        assert_eq!(e.to_string(), "parse failure: missing term count.");
    }
}
