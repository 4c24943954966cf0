use std::fmt::Write;

use tracing::{debug, trace};

use crate::compiler::Compiler;
use crate::config::Parameters;
use crate::error::Result;
use crate::groups::ClauseGroups;
use crate::symbols::SymbolTable;

/**
 * Number of decimal digits in `n`.
 */
fn decimal_digits(n: usize) -> usize {
    n.to_string().len()
}

/**
 * Defines every symbol as a Verilog macro whose value is its index in the
 * table. Names and values are padded so the definitions line up.
 */
pub fn write_symbols(out: &mut dyn Write, symbols: &SymbolTable, int_bits: u32) -> Result<()> {
    let name_width = symbols.iter().map(str::len).max().unwrap_or(0);
    let digits = decimal_digits(symbols.len().saturating_sub(1));

    writeln!(out, "// Define all of the symbols used in this program.")?;
    for (i, name) in symbols.iter().enumerate() {
        writeln!(out, "`define {:<nw$} {}'d{:>dw$}", name, int_bits, i, nw = name_width, dw = digits)?;
    }
    Ok(())
}

fn write_header(out: &mut dyn Write, params: &Parameters, int_bits: u32) -> Result<()> {
    writeln!(out, "// Verilog version of Prolog program {}", params.in_file_name)?;
    writeln!(out, "// Conversion by {}", params.prog_name)?;
    writeln!(out, "//")?;
    writeln!(out, "// This program is intended to be passed to edif2qmasm, then to qmasm, and")?;
    writeln!(out, "// finally run on a quantum annealer.")?;
    writeln!(out, "//")?;
    writeln!(out, "// Note: This program uses exclusively {}-bit unsigned integers.", int_bits)?;
    writeln!(out)?;
    Ok(())
}

/**
 * Writes an entire validated program as Verilog: header comments, symbol
 * definitions, then one module per clause group in table order.
 */
pub fn write_verilog(
    out: &mut dyn Write,
    params: &Parameters,
    symbols: &SymbolTable,
    groups: &ClauseGroups,
    int_bits: u32,
) -> Result<()> {
    write_header(out, params, int_bits)?;
    write_symbols(out, symbols, int_bits)?;

    for (name, clauses) in groups.iter() {
        debug!(group = name, clauses = clauses.len(), "compiling clause group");
        writeln!(out)?;
        Compiler::new(out, int_bits).compile_clause_group(name, clauses)?;
    }
    trace!(groups = groups.len(), "finished writing modules");
    Ok(())
}
