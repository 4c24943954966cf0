use tracing::{debug, info};

use crate::config::Parameters;
use crate::emitter::write_verilog;
use crate::error::Result;
use crate::groups::ClauseGroups;
use crate::parser::parse;
use crate::symbols::SymbolTable;
use crate::validate::reject_unimplemented;
use crate::walker::max_numeral;

/**
 * Compiles Prolog source text to Verilog. The whole program is rendered in
 * memory, so on error nothing has been written anywhere.
 */
pub fn compile_source(source: &str, params: &Parameters) -> Result<String> {
    let ast = parse(source)?;
    reject_unimplemented(&ast)?;

    let symbols = SymbolTable::from_ast(&ast)?;
    let groups = ClauseGroups::from_ast(&ast)?;
    let int_bits = params.effective_int_bits(symbols.len(), max_numeral(&ast)?);
    info!(
        symbols = symbols.len(),
        groups = groups.len(),
        int_bits,
        "compiling {}",
        params.in_file_name
    );
    if int_bits > params.int_bits && params.int_bits > 0 {
        debug!(requested = params.int_bits, int_bits, "widened integers to fit the program");
    }

    let mut out = String::new();
    write_verilog(&mut out, params, &symbols, &groups, int_bits)?;
    Ok(out)
}
