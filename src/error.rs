//! Errors raised while compiling a program.
//!
//! User errors describe something wrong with the input program and usually
//! carry a source position. Internal errors mean a construct got past the
//! validator without having a lowering rule; they should be unreachable.

use thiserror::Error;

use crate::ast::{NodeKind, Position};
use crate::parser::Rule;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", .0.variant.message())]
    Syntax(Box<pest::error::Error<Rule>>),

    #[error("{what} are not currently supported")]
    Unsupported { pos: Position, what: &'static str },

    #[error("Too many parameters (parameter {index} exceeds the limit of 702)")]
    TooManyParameters { index: usize },

    #[error("Argument {text:?} is not a symbol, numeral, or variable")]
    UnclassifiableArgument { pos: Position, text: String },

    #[error("Internal error: {kind} node carries unexpected payload {payload}")]
    PayloadMismatch { kind: NodeKind, payload: String },

    #[error("Internal error: Failed to convert {kind} {op:?} to Verilog")]
    UnmappedOperator { kind: NodeKind, op: String },

    #[error("Internal error: Failed to convert variable {name} to Verilog")]
    UnboundVariable { name: String },

    #[error("Internal error: Unexpected AST node type {kind}")]
    UnexpectedNode { kind: NodeKind },

    #[error("Internal error: Grammar rule {rule:?} produced no {expected}")]
    MissingPair { rule: Rule, expected: &'static str },

    #[error("Internal error: {kind} node has {children} children")]
    MalformedNode { kind: NodeKind, children: usize },

    #[error("Failed to format output")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /**
     * Source position the error refers to, when it has one.
     */
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Syntax(e) => {
                let (line, column) = match e.line_col {
                    pest::error::LineColLocation::Pos(pos) => pos,
                    pest::error::LineColLocation::Span(start, _) => start,
                };
                Some(Position::new(line, column))
            }
            Error::Unsupported { pos, .. } | Error::UnclassifiableArgument { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /**
     * True for defects in the compiler itself as opposed to problems with
     * the input program.
     */
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::PayloadMismatch { .. }
                | Error::UnmappedOperator { .. }
                | Error::UnboundVariable { .. }
                | Error::UnexpectedNode { .. }
                | Error::MissingPair { .. }
                | Error::MalformedNode { .. }
                | Error::Format(_)
        )
    }
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(e: pest::error::Error<Rule>) -> Self {
        Error::Syntax(Box::new(e))
    }
}
