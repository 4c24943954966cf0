use std::collections::HashMap;

use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::operators::translate;
use crate::symbols::symbol_ref;

/**
 * Maps a Prolog variable name to the Verilog parameter holding its value.
 * One is built per clause and never shared between clauses.
 */
pub type Substitution = HashMap<String, String>;

/**
 * Recursively converts a body predicate, or any expression below one, to a
 * Verilog expression.
 */
pub fn lower_expr(node: &Node, p2v: &Substitution) -> Result<String> {
    match node.kind {
        NodeKind::Numeral => Ok(node.as_int()?.to_string()),

        NodeKind::Atom => Ok(symbol_ref(node.as_str()?)),

        NodeKind::Variable => {
            let name = node.as_str()?;
            p2v.get(name)
                .cloned()
                .ok_or_else(|| Error::UnboundVariable { name: name.to_string() })
        }

        NodeKind::UnaryOp
        | NodeKind::AdditiveOp
        | NodeKind::MultiplicativeOp
        | NodeKind::RelationOp => Ok(translate(node.kind, node.as_str()?)?.to_string()),

        NodeKind::PrimaryExpr => {
            let inner = lower_expr(node.child(0)?, p2v)?;
            if node.as_str()? == "()" {
                Ok(format!("({})", inner))
            } else {
                Ok(inner)
            }
        }

        NodeKind::UnaryExpr => match node.children.as_slice() {
            [operand] => lower_expr(operand, p2v),
            [op, operand] => Ok(lower_expr(op, p2v)? + &lower_expr(operand, p2v)?),
            _ => Err(malformed(node)),
        },

        NodeKind::MultiplicativeExpr => lower_binary(node, p2v, ""),

        NodeKind::AdditiveExpr => lower_binary(node, p2v, " "),

        NodeKind::Relation => match node.children.as_slice() {
            [lhs, op, rhs] => Ok(format!(
                "{} {} {}",
                lower_expr(lhs, p2v)?,
                lower_expr(op, p2v)?,
                lower_expr(rhs, p2v)?
            )),
            _ => Err(malformed(node)),
        },

        NodeKind::Predicate | NodeKind::Term => lower_expr(node.child(0)?, p2v),

        NodeKind::Program | NodeKind::Clause | NodeKind::List | NodeKind::Structure => {
            Err(Error::UnexpectedNode { kind: node.kind })
        }
    }
}

/**
 * Handles the one-child pass-through and three-child `lhs op rhs` shapes
 * shared by additive and multiplicative expressions.
 */
fn lower_binary(node: &Node, p2v: &Substitution, sep: &str) -> Result<String> {
    match node.children.as_slice() {
        [operand] => lower_expr(operand, p2v),
        [lhs, op, rhs] => Ok([lower_expr(lhs, p2v)?, lower_expr(op, p2v)?, lower_expr(rhs, p2v)?]
            .join(sep)),
        _ => Err(malformed(node)),
    }
}

fn malformed(node: &Node) -> Error {
    Error::MalformedNode { kind: node.kind, children: node.children.len() }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::Error;
    use crate::lower::*;
    use crate::parser::parse;

    /**
     * Parses a single clause and lowers its first body goal with the head
     * variables bound to "$A", "$B", ...
     */
    fn lower_goal(code: &str) -> Result<String> {
        let program = parse(code).unwrap();
        let clause = &program.children[0];
        let mut p2v = Substitution::new();
        for (i, arg) in clause.formal_args().unwrap().iter().enumerate() {
            p2v.insert(arg.text.clone(), crate::ident::param_name(i).unwrap());
        }
        lower_expr(&clause.body()[0], &p2v)
    }

    #[test]
    fn test_relation() {
        assert_eq!(lower_goal("p(X, Y) :- X < Y.").unwrap(), "$A < $B");
        assert_eq!(lower_goal("p(X, Y) :- X \\= Y.").unwrap(), "$A != $B");
        assert_eq!(lower_goal("p(X) :- X = 5.").unwrap(), "$A == 5");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(lower_goal("p(X, Y, Z) :- Z is X + Y * 2.").unwrap(), "$C == $A + $B*2");
        assert_eq!(lower_goal("p(X, Y, Z) :- Z is X - Y - 1.").unwrap(), "$C == $A - $B - 1");
        assert_eq!(lower_goal("p(X, Y) :- Y = -X.").unwrap(), "$B == -$A");
    }

    #[test]
    fn test_parentheses_preserved() {
        assert_eq!(
            lower_goal("p(X, Y, Z) :- Z is (X + Y) * 2.").unwrap(),
            "$C == ($A + $B)*2"
        );
    }

    #[test]
    fn test_atom_is_symbol_reference() {
        assert_eq!(lower_goal("p(X) :- X = red.").unwrap(), "$A == `red");
    }

    #[test]
    fn test_unbound_variable() {
        let err = lower_goal("p(X) :- X < Y.").unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(err, Error::UnboundVariable { ref name } if name == "Y"));
    }

    #[test]
    fn test_structure_is_unexpected() {
        let err = lower_goal("p(X) :- q(X).").unwrap_err();
        assert!(matches!(err, Error::UnexpectedNode { kind: NodeKind::Structure }));
    }

    #[test]
    fn test_wrong_arity_expression() {
        let node = Node::new(NodeKind::AdditiveExpr, Payload::None, "", Position::new(1, 1));
        assert!(matches!(
            lower_expr(&node, &Substitution::new()),
            Err(Error::MalformedNode { kind: NodeKind::AdditiveExpr, children: 0 })
        ));
    }
}
