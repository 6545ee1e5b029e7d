pub mod adapter;
pub mod context;
pub mod error;
pub mod metadata;
