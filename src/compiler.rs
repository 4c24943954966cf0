use std::fmt::Write;

use crate::ast::Node;
use crate::error::{Error, Result};
use crate::ident::param_name;
use crate::lower::{lower_expr, Substitution};
use crate::symbols::symbol_ref;

/**
 * Turns groups of clauses into Verilog modules, one module per group.
 */
pub struct Compiler<'w> {
    out: &'w mut dyn Write,
    int_bits: u32,
}

/**
 * How a formal argument constrains its parameter, decided by the first
 * character of its source text.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ArgClass {
    Symbol,
    Numeral,
    Variable,
    // A bare "_" matches anything and never unifies with another argument
    Anonymous,
}

fn classify(arg: &Node) -> Result<ArgClass> {
    let text = arg.text.as_str();
    match text.chars().next() {
        Some(c) if c.is_lowercase() => Ok(ArgClass::Symbol),
        Some(c) if c.is_ascii_digit() => Ok(ArgClass::Numeral),
        Some('_') if text == "_" => Ok(ArgClass::Anonymous),
        Some(c) if c.is_uppercase() || c == '_' => Ok(ArgClass::Variable),
        _ => Err(Error::UnclassifiableArgument { pos: arg.pos, text: text.to_string() }),
    }
}

/**
 * A clause's formal arguments paired with the Verilog parameter generated
 * for each position.
 */
fn args(clause: &Node) -> Result<Vec<(&Node, String)>> {
    clause
        .formal_args()?
        .iter()
        .enumerate()
        .map(|(i, arg)| Ok::<_, Error>((arg, param_name(i)?)))
        .collect()
}

/**
 * Computes every Boolean condition that must hold for `clause` to accept its
 * inputs: repeated variables must agree, symbol and numeral arguments must
 * match, and each body goal must be true. A clause with no conditions at
 * all accepts everything and yields the single condition "1'b1".
 */
pub fn clause_constraints(clause: &Node) -> Result<Vec<String>> {
    let args = args(clause)?;
    let mut valid = Vec::new();

    // Bind each variable to its first parameter; later occurrences must
    // equal that one.
    let mut p2v = Substitution::new();
    for (arg, param) in &args {
        if classify(arg)? != ArgClass::Variable {
            continue;
        }
        match p2v.get(&arg.text) {
            Some(first) => valid.push(format!("{} == {}", first, param)),
            None => {
                p2v.insert(arg.text.clone(), param.clone());
            }
        }
    }

    // Inputs must match any symbols or numbers given in the head.
    for (arg, param) in &args {
        match classify(arg)? {
            ArgClass::Symbol => valid.push(format!("{} == {}", param, symbol_ref(&arg.text))),
            ArgClass::Numeral => valid.push(format!("{} == {}", param, arg.text)),
            ArgClass::Variable | ArgClass::Anonymous => (),
        }
    }

    for goal in clause.body() {
        valid.push(lower_expr(goal, &p2v)?);
    }

    if valid.is_empty() {
        valid.push(String::from("1'b1"));
    }
    Ok(valid)
}

impl<'w> Compiler<'w> {
    pub fn new(out: &'w mut dyn Write, int_bits: u32) -> Self {
        Compiler { out, int_bits }
    }

    /**
     * Writes a module whose `$valid` output is true when any clause in the
     * group accepts the inputs. `name` is the group's "name/arity" key.
     */
    pub fn compile_clause_group(&mut self, name: &str, clauses: &[&Node]) -> Result<()> {
        self.write_clause_group_header(name, clauses)?;

        for (i, clause) in clauses.iter().enumerate() {
            self.write_clause_body(clause, i + 1)?;
        }

        let alternatives: Vec<String> = (1..=clauses.len()).map(|n| format!("&$v{}", n)).collect();
        if alternatives.is_empty() {
            writeln!(self.out, "  assign $valid = 1'b0;")?;
        } else {
            writeln!(self.out, "  assign $valid = {};", alternatives.join(" | "))?;
        }
        writeln!(self.out, "endmodule")?;
        Ok(())
    }

    fn write_clause_group_header(&mut self, name: &str, clauses: &[&Node]) -> Result<()> {
        let params: Vec<String> = match clauses.first() {
            Some(clause) => args(clause)?.into_iter().map(|(_, param)| param).collect(),
            None => Vec::new(),
        };

        let mut ports = params.clone();
        ports.push(String::from("$valid"));

        writeln!(self.out, "// Define {}.", name)?;
        // The space ends the escaped identifier.
        writeln!(self.out, "module \\{} ({});", name, ports.join(", "))?;
        for param in &params {
            if self.int_bits == 1 {
                writeln!(self.out, "  input {};", param)?;
            } else {
                writeln!(self.out, "  input [{}:0] {};", self.int_bits - 1, param)?;
            }
        }
        writeln!(self.out, "  output $valid;")?;
        Ok(())
    }

    /**
     * Assigns one bit of `$v<num>` per condition of the clause.
     */
    fn write_clause_body(&mut self, clause: &Node, num: usize) -> Result<()> {
        let valid = clause_constraints(clause)?;
        writeln!(self.out, "  wire [{}:0] $v{};", valid.len() - 1, num)?;
        for (i, v) in valid.iter().enumerate() {
            writeln!(self.out, "  assign $v{}[{}] = {};", num, i, v)?;
        }
        Ok(())
    }
}
