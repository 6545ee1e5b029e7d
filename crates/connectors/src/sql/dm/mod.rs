pub mod adapter;
pub mod metadata;
