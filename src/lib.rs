//! Compiles a small subset of Prolog into Verilog. Each predicate becomes a
//! combinational module whose `$valid` output is true exactly when its inputs
//! satisfy one of the predicate's clauses.

pub mod ast;
pub mod compiler;
pub mod config;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod groups;
pub mod ident;
pub mod lower;
pub mod operators;
pub mod parser;
pub mod symbols;
pub mod validate;
pub mod walker;

pub use config::Parameters;
pub use driver::compile_source;
pub use error::{Error, Result};
