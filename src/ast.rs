use std::fmt;

use crate::error::{Error, Result};

/**
 * Location of a node in the source text. Both fields are 1-based.
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Root of a parsed file; children are clauses
    Program,

    Numeral,
    Atom,
    Variable,
    Clause,
    List,
    Structure,

    UnaryOp,
    AdditiveOp,
    MultiplicativeOp,
    RelationOp,

    PrimaryExpr,
    UnaryExpr,
    MultiplicativeExpr,
    AdditiveExpr,
    Relation,

    Predicate,
    Term,
}

/**
 * Typed value attached to a node. Which variant is present depends only on
 * the node's kind.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    None,
    Str(String),
    Int(u64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub payload: Payload,
    pub text: String,
    pub children: Vec<Node>,
    pub pos: Position,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "program",
            NodeKind::Numeral => "numeral",
            NodeKind::Atom => "atom",
            NodeKind::Variable => "variable",
            NodeKind::Clause => "clause",
            NodeKind::List => "list",
            NodeKind::Structure => "structure",
            NodeKind::UnaryOp => "unary operator",
            NodeKind::AdditiveOp => "additive operator",
            NodeKind::MultiplicativeOp => "multiplicative operator",
            NodeKind::RelationOp => "relational operator",
            NodeKind::PrimaryExpr => "primary expression",
            NodeKind::UnaryExpr => "unary expression",
            NodeKind::MultiplicativeExpr => "multiplicative expression",
            NodeKind::AdditiveExpr => "additive expression",
            NodeKind::Relation => "relation",
            NodeKind::Predicate => "predicate",
            NodeKind::Term => "term",
        };
        f.write_str(name)
    }
}

impl Node {
    pub fn new(kind: NodeKind, payload: Payload, text: &str, pos: Position) -> Self {
        Node {
            kind,
            payload,
            text: text.to_string(),
            children: Vec::new(),
            pos,
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /**
     * String payload of an atom, variable, operator or primary expression.
     */
    pub fn as_str(&self) -> Result<&str> {
        match &self.payload {
            Payload::Str(s) => Ok(s),
            other => Err(Error::PayloadMismatch {
                kind: self.kind,
                payload: format!("{:?}", other),
            }),
        }
    }

    pub fn as_int(&self) -> Result<u64> {
        match &self.payload {
            Payload::Int(n) => Ok(*n),
            other => Err(Error::PayloadMismatch {
                kind: self.kind,
                payload: format!("{:?}", other),
            }),
        }
    }

    /**
     * Returns the `index`th child, treating a missing child as a malformed
     * tree rather than panicking.
     */
    pub fn child(&self, index: usize) -> Result<&Node> {
        self.children.get(index).ok_or(Error::MalformedNode {
            kind: self.kind,
            children: self.children.len(),
        })
    }

    /**
     * For a clause, the head predicate (name followed by formal arguments).
     */
    pub fn head(&self) -> Result<&Node> {
        self.child(0)
    }

    /**
     * For a clause, the body goals that follow the head.
     */
    pub fn body(&self) -> &[Node] {
        self.children.get(1..).unwrap_or(&[])
    }

    /**
     * For a clause, the predicate name in its head.
     */
    pub fn name(&self) -> Result<&str> {
        self.head()?.child(0)?.as_str()
    }

    /**
     * For a clause, the formal arguments in its head.
     */
    pub fn formal_args(&self) -> Result<&[Node]> {
        let head = self.head()?;
        Ok(head.children.get(1..).unwrap_or(&[]))
    }

    pub fn arity(&self) -> Result<usize> {
        Ok(self.formal_args()?.len())
    }
}

/**
 * Short-hand constructors used when building trees by hand in tests.
 */
