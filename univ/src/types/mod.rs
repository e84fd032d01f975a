mod term;
mod order;
mod tree;
mod univar;

pub use term::*;
pub use order::*;
pub use tree::*;
pub use univar::*;
