pub mod error;
pub mod hashcode;
pub mod parser;
