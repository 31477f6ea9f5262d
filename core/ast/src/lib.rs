#![warn(clippy::pedantic)]
pub(crate) mod builder;
pub mod errors;
pub mod linker;
pub mod literal;
pub mod nodes;
pub mod scan;
pub mod session;
