use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Mul, MulAssign};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

// Coefficient domain of a polynomial term.
// Machine integers (i32, i64, i128, ...) satisfy it.

pub trait CoeffBase: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> CoeffBase for T where T: 
    Default + 
    PartialEq + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

pub trait Coeff: 
    CoeffBase + 
    Zero + 
    One + 
    Mul<Output = Self> + 
    for<'x> AddAssign<&'x Self> + 
    for<'x> MulAssign<&'x Self> + 
    FromPrimitive + 
    ToPrimitive
{
    // c * d, used by differentiation. 
    fn scale_by_deg(&self, d: usize) -> Self { 
        let Some(k) = Self::from_usize(d) else { 
            panic!("degree {d} does not fit in the coefficient type {}.", std::any::type_name::<Self>())
        };
        let mut c = self.clone();
        c *= &k;
        c
    }

    // Lossy conversion used by floating point evaluation.
    fn as_f64(&self) -> f64 { 
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Coeff for T where T: 
    CoeffBase + 
    Zero + 
    One + 
    Mul<Output = Self> + 
    for<'x> AddAssign<&'x Self> + 
    for<'x> MulAssign<&'x Self> + 
    FromPrimitive + 
    ToPrimitive
{}
