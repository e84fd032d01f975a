pub mod show;
pub mod add;
pub mod diff;
pub mod eval;
