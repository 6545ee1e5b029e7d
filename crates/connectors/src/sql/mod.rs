pub mod base;
pub mod dm;
