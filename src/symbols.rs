use std::collections::HashMap;

use crate::ast::Node;
use crate::error::Result;
use crate::walker::atom_names;

/**
 * Every symbol named in a program, in ascending order. A symbol's index is
 * the integer that represents it in the generated circuit.
 */
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<String>,
    symbols_to_indices: HashMap<String, usize>,
}

/**
 * Verilog reference to the macro defined for a symbol.
 */
pub fn symbol_ref(name: &str) -> String {
    format!("`{}", name)
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { symbols: Vec::new(), symbols_to_indices: HashMap::new() }
    }

    /**
     * Builds the table from every atom in the program except predicate names.
     */
    pub fn from_ast(root: &Node) -> Result<Self> {
        let mut table = SymbolTable::new();
        for name in atom_names(root)? {
            table.push(&name);
        }
        Ok(table)
    }

    /**
     * Adds a symbol if it is not already present and returns its index.
     */
    pub fn push(&mut self, symbol: &str) -> usize {
        if let Some(index) = self.get_index(symbol) {
            return index;
        }
        self.symbols.push(symbol.to_string());
        let index = self.symbols.len() - 1;
        self.symbols_to_indices.insert(symbol.to_string(), index);
        index
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn get_index(&self, symbol: &str) -> Option<usize> {
        self.symbols_to_indices.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use crate::symbols::*;

    #[test]
    fn test_push() {
        let mut table = SymbolTable::new();
        assert_eq!(table.push("a"), 0);
        assert_eq!(table.push("b"), 1);
        assert_eq!(table.push("a"), 0);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some("b"));
        assert_eq!(table.get(2), None);
        assert_eq!(table.get_index("b"), Some(1));
        assert_eq!(table.get_index("c"), None);
    }

    #[test]
    fn test_from_ast() {
        let program = parse("color(red).\ncolor(green).\npick(X) :- X = blue.").unwrap();
        let table = SymbolTable::from_ast(&program).unwrap();

        let symbols: Vec<&str> = table.iter().collect();
        assert_eq!(symbols, vec!["blue", "green", "red"]);
        assert_eq!(table.get_index("red"), Some(2));
        assert_eq!(table.get_index("color"), None);
    }

    #[test]
    fn test_symbol_ref() {
        assert_eq!(symbol_ref("red"), "`red");
    }
}
