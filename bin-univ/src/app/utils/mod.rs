mod args;
mod helper;

pub use args::*;
pub use helper::*;
