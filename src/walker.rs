//! Read-only queries over a parsed program.

use std::collections::BTreeSet;

use crate::ast::{Node, NodeKind};
use crate::error::Result;

/**
 * Returns every node of the given kind, in depth-first pre-order. The root
 * itself is included when it matches.
 */
pub fn find_by_type(root: &Node, kind: NodeKind) -> Vec<&Node> {
    let mut nodes = Vec::new();
    collect_by_type(root, kind, &mut nodes);
    nodes
}

fn collect_by_type<'a>(node: &'a Node, kind: NodeKind, nodes: &mut Vec<&'a Node>) {
    if node.kind == kind {
        nodes.push(node);
    }
    for child in &node.children {
        collect_by_type(child, kind, nodes);
    }
}

/**
 * Returns the sorted, de-duplicated names of all atoms in the tree except
 * the names of clause heads. Atoms appearing as head arguments are kept.
 */
pub fn atom_names(root: &Node) -> Result<Vec<String>> {
    let mut names = BTreeSet::new();
    unique_atom_names(root, &mut names)?;
    Ok(names.into_iter().collect())
}

fn unique_atom_names(node: &Node, names: &mut BTreeSet<String>) -> Result<()> {
    if node.kind == NodeKind::Atom {
        names.insert(node.as_str()?.to_string());
    }

    if node.kind == NodeKind::Clause {
        if let Some((head, body)) = node.children.split_first() {
            // Skip the predicate name but not its arguments.
            for arg in head.children.iter().skip(1) {
                unique_atom_names(arg, names)?;
            }
            for goal in body {
                unique_atom_names(goal, names)?;
            }
        }
        return Ok(());
    }

    for child in &node.children {
        unique_atom_names(child, names)?;
    }
    Ok(())
}

/**
 * Returns the largest numeral in the tree, or 0 if there are none.
 */
pub fn max_numeral(root: &Node) -> Result<u64> {
    let mut max = 0;
    if root.kind == NodeKind::Numeral {
        max = root.as_int()?;
    }
    for child in &root.children {
        max = max.max(max_numeral(child)?);
    }
    Ok(max)
}

#[cfg(test)]
mod tests {
    use crate::ast::build::*;
    use crate::ast::*;
    use crate::error::Error;
    use crate::walker::*;

    fn sample() -> Node {
        program(vec![
            clause(head("foo", vec![atom("b"), var("X"), num(3)]), Vec::new()),
            clause(
                head("bar", vec![var("Y")]),
                vec![relation(operand(var("Y")), "<", operand(num(7)))],
            ),
            clause(head("foo", vec![atom("a"), atom("b"), num(2)]), Vec::new()),
        ])
    }

    #[test]
    fn test_find_by_type_preorder() {
        let root = sample();
        let clauses = find_by_type(&root, NodeKind::Clause);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[1].name().unwrap(), "bar");

        let vars: Vec<&str> = find_by_type(&root, NodeKind::Variable)
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(vars, vec!["X", "Y", "Y"]);
    }

    #[test]
    fn test_find_by_type_includes_root() {
        let root = atom("solo");
        assert_eq!(find_by_type(&root, NodeKind::Atom).len(), 1);
        assert!(find_by_type(&root, NodeKind::List).is_empty());
    }

    #[test]
    fn test_atom_names_excludes_head_names() {
        let names = atom_names(&sample()).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_atom_names_keeps_predicate_named_argument() {
        // An argument that happens to share a predicate's name is still a symbol.
        let root = program(vec![clause(head("foo", vec![atom("foo")]), Vec::new())]);
        assert_eq!(atom_names(&root).unwrap(), vec!["foo"]);
    }

    #[test]
    fn test_atom_names_bad_payload() {
        let mut bad = atom("x");
        bad.payload = Payload::Int(1);
        let root = program(vec![clause(head("p", vec![bad]), Vec::new())]);
        assert!(matches!(atom_names(&root), Err(Error::PayloadMismatch { .. })));
    }

    #[test]
    fn test_max_numeral() {
        assert_eq!(max_numeral(&sample()).unwrap(), 7);

        let no_numerals = program(vec![clause(head("p", vec![var("X")]), Vec::new())]);
        assert_eq!(max_numeral(&no_numerals).unwrap(), 0);
    }
}
