pub mod error;
pub mod headers;
pub mod payload;
