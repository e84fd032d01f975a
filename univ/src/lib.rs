mod abst;
mod types;
mod err;

pub use abst::*;
pub use types::*;
pub use err::*;

pub mod io;
pub mod util;

#[cfg(feature = "tex")]
pub mod tex;
