use crate::ast::NodeKind;
use crate::error::{Error, Result};

const UNARY: &[(&str, &str)] = &[("-", "-")];

const ADDITIVE: &[(&str, &str)] = &[("+", "+"), ("-", "-")];

const MULTIPLICATIVE: &[(&str, &str)] = &[("*", "*")];

const RELATIONAL: &[(&str, &str)] = &[
    ("<=", "<="),
    ("=<", "<="),
    (">=", ">="),
    ("<", "<"),
    (">", ">"),
    ("=", "=="),
    ("\\=", "!="),
    ("is", "=="),
];

/**
 * Translates a Prolog operator token to the equivalent Verilog token.
 * `kind` must be one of the four operator node kinds. A token with no entry
 * means the grammar accepts an operator this table was never taught.
 */
pub fn translate(kind: NodeKind, op: &str) -> Result<&'static str> {
    let table = match kind {
        NodeKind::UnaryOp => UNARY,
        NodeKind::AdditiveOp => ADDITIVE,
        NodeKind::MultiplicativeOp => MULTIPLICATIVE,
        NodeKind::RelationOp => RELATIONAL,
        _ => return Err(Error::UnexpectedNode { kind }),
    };
    table
        .iter()
        .find(|(prolog, _)| *prolog == op)
        .map(|(_, verilog)| *verilog)
        .ok_or_else(|| Error::UnmappedOperator { kind, op: op.to_string() })
}

#[cfg(test)]
mod tests {
    use crate::ast::NodeKind;
    use crate::error::Error;
    use crate::operators::*;

    #[test]
    fn test_relational() {
        assert_eq!(translate(NodeKind::RelationOp, "=").unwrap(), "==");
        assert_eq!(translate(NodeKind::RelationOp, "is").unwrap(), "==");
        assert_eq!(translate(NodeKind::RelationOp, "\\=").unwrap(), "!=");
        assert_eq!(translate(NodeKind::RelationOp, "=<").unwrap(), "<=");
        assert_eq!(translate(NodeKind::RelationOp, ">").unwrap(), ">");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(translate(NodeKind::UnaryOp, "-").unwrap(), "-");
        assert_eq!(translate(NodeKind::AdditiveOp, "+").unwrap(), "+");
        assert_eq!(translate(NodeKind::MultiplicativeOp, "*").unwrap(), "*");
    }

    #[test]
    fn test_unmapped_operator() {
        let err = translate(NodeKind::MultiplicativeOp, "/").unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(err, Error::UnmappedOperator { kind: NodeKind::MultiplicativeOp, .. }));

        // Tables are per class: "+" is not a unary operator.
        assert!(translate(NodeKind::UnaryOp, "+").is_err());
    }

    #[test]
    fn test_not_an_operator_kind() {
        assert!(matches!(
            translate(NodeKind::Atom, "-"),
            Err(Error::UnexpectedNode { kind: NodeKind::Atom })
        ));
    }
}
