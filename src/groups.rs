use indexmap::IndexMap;

use crate::ast::{Node, NodeKind};
use crate::error::Result;
use crate::walker::find_by_type;

/**
 * Clauses grouped by predicate name and arity. Groups appear in the order
 * their first clause appears in the source; clauses within a group keep
 * their source order.
 */
#[derive(Debug, Default)]
pub struct ClauseGroups<'a> {
    groups: IndexMap<String, Vec<&'a Node>>,
}

impl<'a> ClauseGroups<'a> {
    pub fn from_ast(root: &'a Node) -> Result<Self> {
        let mut groups: IndexMap<String, Vec<&'a Node>> = IndexMap::new();
        for clause in find_by_type(root, NodeKind::Clause) {
            let key = format!("{}/{}", clause.name()?, clause.arity()?);
            groups.entry(key).or_default().push(clause);
        }
        Ok(ClauseGroups { groups })
    }

    /**
     * Iterates over `("name/arity", clauses)` pairs.
     */
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Node])> {
        self.groups.iter().map(|(name, clauses)| (name.as_str(), clauses.as_slice()))
    }

    pub fn get(&self, key: &str) -> Option<&[&'a Node]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::groups::*;
    use crate::parser::parse;

    #[test]
    fn test_group_by_name_and_arity() {
        let program = parse("b(1).\na(X).\nb(2).\nb(X, Y).\na(3).").unwrap();
        let groups = ClauseGroups::from_ast(&program).unwrap();

        let keys: Vec<&str> = groups.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b/1", "a/1", "b/2"]);

        let b1 = groups.get("b/1").unwrap();
        assert_eq!(b1.len(), 2);
        assert_eq!(b1[0].text, "b(1).");
        assert_eq!(b1[1].text, "b(2).");
        assert_eq!(groups.get("a/1").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_program() {
        let program = parse("").unwrap();
        assert!(ClauseGroups::from_ast(&program).unwrap().is_empty());
    }
}
